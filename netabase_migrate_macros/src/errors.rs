use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigratableDeriveError {
    #[error("missing #[migratable(...)] attribute")]
    MissingAttribute,
    #[error("#[migratable] requires `{0}`")]
    MissingKey(&'static str),
    #[error("`{0}` given more than once")]
    DuplicateKey(String),
    #[error("unknown key `{0}`, expected family, version, upgrade or declare")]
    UnknownKey(String),
    #[error("Migratable cannot be derived for generic types")]
    Generic,
}

impl MigratableDeriveError {
    pub fn spanned<T: quote::ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self)
    }
}
