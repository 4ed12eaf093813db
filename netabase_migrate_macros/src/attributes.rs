use syn::{Attribute, Expr, ExprLit, Ident, Lit, LitBool, LitInt, Path, Result, Type};

use crate::errors::MigratableDeriveError;

/// Parsed `#[migratable(family = .., version = .., upgrade = .., declare = ..)]`.
pub struct MigratableArgs {
    /// Either a string literal naming the family or an expression of type
    /// `TypeToken`.
    pub family: Expr,
    pub version: u32,
    /// The next version, if this one is not the latest.
    pub upgrade: Option<Type>,
    /// Whether to submit an `inventory` declaration.
    pub declare: bool,
}

impl MigratableArgs {
    pub fn from_attributes(attrs: &[Attribute], ident: &Ident) -> Result<Self> {
        let attr = attrs
            .iter()
            .find(|attr| attr.path().is_ident("migratable"))
            .ok_or_else(|| MigratableDeriveError::MissingAttribute.spanned(ident))?;

        let mut family: Option<Expr> = None;
        let mut version: Option<LitInt> = None;
        let mut upgrade: Option<Type> = None;
        let mut declare: Option<LitBool> = None;

        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(ToString::to_string)
                .unwrap_or_default();
            match key.as_str() {
                "family" => set(&mut family, meta.value()?.parse()?, &meta.path),
                "version" => set(&mut version, meta.value()?.parse()?, &meta.path),
                "upgrade" => set(&mut upgrade, meta.value()?.parse()?, &meta.path),
                "declare" => set(&mut declare, meta.value()?.parse()?, &meta.path),
                _ => Err(MigratableDeriveError::UnknownKey(key).spanned(&meta.path)),
            }
        })?;

        let family = family.ok_or_else(|| MigratableDeriveError::MissingKey("family").spanned(attr))?;
        let version = version
            .ok_or_else(|| MigratableDeriveError::MissingKey("version").spanned(attr))?
            .base10_parse::<u32>()?;

        Ok(Self {
            family,
            version,
            upgrade,
            declare: declare.is_none_or(|flag| flag.value),
        })
    }

    /// Whether the family was given as a string literal rather than a token.
    pub fn family_literal(&self) -> Option<&syn::LitStr> {
        match &self.family {
            Expr::Lit(ExprLit {
                lit: Lit::Str(name),
                ..
            }) => Some(name),
            _ => None,
        }
    }
}

fn set<T>(slot: &mut Option<T>, value: T, path: &Path) -> Result<()> {
    if slot.is_some() {
        let key = path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(MigratableDeriveError::DuplicateKey(key).spanned(path));
    }
    *slot = Some(value);
    Ok(())
}
