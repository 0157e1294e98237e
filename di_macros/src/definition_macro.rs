use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ItemImpl, Lit, Meta, Token, Type, parse_macro_input};

pub(crate) struct DefinitionArgs {
    pub identifier: Option<String>,
}

pub(crate) fn generate_definition_macro(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match parse_definition_args(attr) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error().into(),
    };
    let input = parse_macro_input!(item as ItemImpl);
    let self_ty = &input.self_ty;

    if !input.generics.params.is_empty() {
        return syn::Error::new(
            input.generics.span(),
            "`#[service_di::definition]` cannot register a generic definition by identifier",
        )
        .to_compile_error()
        .into();
    }

    let type_ident = match self_ty.as_ref() {
        Type::Path(type_path) => match type_path.path.segments.last() {
            Some(segment) => segment.ident.to_string(),
            None => return type_error(self_ty),
        },
        _ => return type_error(self_ty),
    };

    let identifier = match args.identifier {
        Some(name) => {
            let literal = syn::LitStr::new(&name, proc_macro2::Span::call_site());
            quote!(#literal)
        }
        None => {
            let literal = syn::LitStr::new(&type_ident, proc_macro2::Span::call_site());
            quote!(concat!(module_path!(), "::", #literal))
        }
    };

    let expanded = quote! {
        #input

        ::service_di::inventory::submit! {
            ::service_di::core::di_inventory::DefinitionType::new(
                #identifier,
                ::service_di::core::di_inventory::DefinitionType::construct_definition::<#self_ty>,
            )
        }
    };

    TokenStream::from(expanded)
}

fn type_error(self_ty: &Type) -> TokenStream {
    syn::Error::new_spanned(
        self_ty,
        "`#[service_di::definition]` expects an impl block for a named type",
    )
    .to_compile_error()
    .into()
}

fn parse_definition_args(attr: TokenStream) -> syn::Result<DefinitionArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse(attr)?;

    let mut identifier = None;

    for meta in metas {
        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("name") => match nv.value {
                Expr::Lit(expr_lit) => match expr_lit.lit {
                    Lit::Str(lit_str) => identifier = Some(lit_str.value()),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected a string, like `name = \"mailer\"`",
                        ));
                    }
                },
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string, like `name = \"mailer\"`",
                    ));
                }
            },
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "unsupported argument, expected `name = \"...\"`",
                ));
            }
        }
    }

    Ok(DefinitionArgs { identifier })
}
