use proc_macro::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Attribute, DeriveInput, Ident, Lit, Meta, NestedMeta};

const FORMATS: &[&str] = &["Json", "Xml", "Binary"];

#[derive(Debug)]
struct TypeAttribs {
    format: String,
}

impl Default for TypeAttribs {
    fn default() -> Self {
        Self {
            format: "Json".to_owned(),
        }
    }
}

pub fn derive_serializable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let attribs = parse_type_attribs(&ast.attrs);
    let format = Ident::new(&attribs.format, Span::call_site().into());
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    quote! {
        impl #impl_generics ofx_serde::Serializable for #name #ty_generics #where_clause {
            type Format = ofx_serde::archive::#format;
            type Target = Self;

            fn get(&self) -> &Self {
                self
            }

            fn get_mut(&mut self) -> &mut Self {
                self
            }
        }
    }
    .into()
}

fn parse_type_attribs(attrs: &[Attribute]) -> TypeAttribs {
    let mut result = TypeAttribs::default();
    for attrib in attrs {
        if !attrib.path.is_ident("serializable") {
            continue;
        }
        match attrib.parse_meta() {
            Err(error) => panic!(
                "Could not parse attribute `{}`: {:?}",
                attrib.to_token_stream(),
                error
            ),
            Ok(Meta::List(meta)) => {
                if meta.path.is_ident("serializable") {
                    for meta in meta.nested {
                        match &meta {
                            NestedMeta::Meta(Meta::NameValue(meta))
                                if meta.path.is_ident("format") =>
                            {
                                if let Lit::Str(value) = &meta.lit {
                                    result.format = parse_format(&value.value());
                                }
                            }
                            NestedMeta::Meta(Meta::Path(path)) => {
                                if let Some(ident) = path.get_ident() {
                                    result.format = parse_format(&ident.to_string());
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }
    result
}

fn parse_format(value: &str) -> String {
    FORMATS
        .iter()
        .find(|format| format.eq_ignore_ascii_case(value))
        .map(|format| format.to_string())
        .unwrap_or_else(|| {
            panic!(
                "Unknown serializable format `{}`, expected one of: {}",
                value,
                FORMATS.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("Json"), "Json");
        assert_eq!(parse_format("xml"), "Xml");
        assert_eq!(parse_format("BINARY"), "Binary");
    }

    #[test]
    #[should_panic(expected = "Unknown serializable format `yaml`")]
    fn test_parse_unknown_format() {
        parse_format("yaml");
    }

    #[test]
    fn test_parse_type_attribs() {
        assert_eq!(parse_type_attribs(&[]).format, "Json");

        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[derive(Debug)]),
            parse_quote!(#[serializable(format = "xml")]),
        ];
        assert_eq!(parse_type_attribs(&attrs).format, "Xml");

        let attrs: Vec<Attribute> = vec![parse_quote!(#[serializable(Binary)])];
        assert_eq!(parse_type_attribs(&attrs).format, "Binary");
    }
}
