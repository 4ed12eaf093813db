//! Code generation for `#[derive(Migratable)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attributes::MigratableArgs;
use crate::errors::MigratableDeriveError;

pub fn generate(input: &DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(MigratableDeriveError::Generic.spanned(&input.generics));
    }

    let args = MigratableArgs::from_attributes(&input.attrs, &input.ident)?;

    let mut output = TokenStream::new();
    output.extend(generate_versioned_model(input, &args));
    output.extend(generate_migratable(input, &args));
    if args.declare {
        output.extend(generate_declaration(input));
    }
    Ok(output)
}

fn generate_versioned_model(input: &DeriveInput, args: &MigratableArgs) -> TokenStream {
    let name = &input.ident;
    let version = args.version;
    let is_latest = args.upgrade.is_none();
    let family = match args.family_literal() {
        Some(literal) => quote! { ::netabase_migrate::TypeToken::new(#literal) },
        None => {
            let family = &args.family;
            quote! { #family }
        }
    };

    quote! {
        impl ::netabase_migrate::traits::migration::VersionedModel for #name {
            const FAMILY: ::netabase_migrate::TypeToken = #family;
            const VERSION: u32 = #version;
            const IS_LATEST: bool = #is_latest;
        }
    }
}

fn generate_migratable(input: &DeriveInput, args: &MigratableArgs) -> TokenStream {
    let name = &input.ident;
    let body = match &args.upgrade {
        Some(next) => quote! {
            ::netabase_migrate::traits::migration::Upgrade::Next(::std::boxed::Box::new(
                <#next as ::netabase_migrate::traits::migration::MigrateFrom<Self>>::migrate_from(*self),
            ))
        },
        None => quote! {
            ::netabase_migrate::traits::migration::Upgrade::Latest(self)
        },
    };

    quote! {
        impl ::netabase_migrate::traits::migration::Migratable for #name {
            fn upgrade(
                self: ::std::boxed::Box<Self>,
            ) -> ::netabase_migrate::traits::migration::Upgrade {
                #body
            }
        }
    }
}

fn generate_declaration(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let name_str = name.to_string();

    quote! {
        ::netabase_migrate::__private::inventory::submit! {
            ::netabase_migrate::registry::Declaration {
                type_name: ::std::concat!(::std::module_path!(), "::", #name_str),
                register: ::netabase_migrate::registry::Registry::register_versioned::<#name>,
            }
        }
    }
}
