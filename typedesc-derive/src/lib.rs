use proc_macro::TokenStream;
use proc_macro2::Literal;
use syn::{Data, DeriveInput, Fields, LitChar, LitInt, LitStr, parse_macro_input};

struct PrimitiveAttributes {
    name: String,
    code: char,
    width: u8,
}

/// Generates the closed primitive table for a fieldless enum.
///
/// Every variant carries `#[primitive(name = "...", code = 'X', width = N)]`.
/// The derive emits `ALL`, `name()`, `jvm_code()`, `width()` and `from_name()`.
#[proc_macro_derive(PrimitiveTable, attributes(primitive))]
pub fn primitive_table(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_name = input.ident;

    let Data::Enum(enum_) = input.data else {
        panic!("This macro can only be applied to enums.");
    };

    let mut variants = vec![];
    let mut names = vec![];
    let mut codes = vec![];
    let mut widths = vec![];

    for variant in enum_.variants {
        assert!(
            matches!(variant.fields, Fields::Unit),
            "Variant {} must not have fields",
            variant.ident
        );

        let attribute = variant
            .attrs
            .iter()
            .find(|x| x.path().is_ident("primitive"))
            .unwrap_or_else(|| panic!("Variant {} is missing #[primitive(...)]", variant.ident));

        let attributes = parse_primitive_attributes(attribute)
            .unwrap_or_else(|e| panic!("Invalid #[primitive] on {}: {e}", variant.ident));

        names.push(Literal::string(&attributes.name));
        codes.push(Literal::character(attributes.code));
        widths.push(Literal::u8_unsuffixed(attributes.width));
        variants.push(variant.ident);
    }

    let count = Literal::usize_unsuffixed(variants.len());

    quote::quote! {
        impl #enum_name {
            pub const ALL: [Self; #count] = [#(Self::#variants),*];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names),*
                }
            }

            #[must_use]
            pub const fn jvm_code(self) -> char {
                match self {
                    #(Self::#variants => #codes),*
                }
            }

            #[must_use]
            pub const fn width(self) -> u8 {
                match self {
                    #(Self::#variants => #widths),*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> std::option::Option<Self> {
                match name {
                    #(#names => std::option::Option::Some(Self::#variants),)*
                    _ => std::option::Option::None,
                }
            }
        }
    }
    .into()
}

fn parse_primitive_attributes(attribute: &syn::Attribute) -> syn::Result<PrimitiveAttributes> {
    let mut name = None;
    let mut code = None;
    let mut width = None;

    attribute.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let value: LitStr = meta.value()?.parse()?;
            name = Some(value.value());
        } else if meta.path.is_ident("code") {
            let value: LitChar = meta.value()?.parse()?;
            code = Some(value.value());
        } else if meta.path.is_ident("width") {
            let value: LitInt = meta.value()?.parse()?;
            width = Some(value.base10_parse::<u8>()?);
        } else {
            return Err(meta.error("expected `name`, `code` or `width`"));
        }

        Ok(())
    })?;

    match (name, code, width) {
        (Some(name), Some(code), Some(width)) => Ok(PrimitiveAttributes { name, code, width }),
        _ => Err(syn::Error::new_spanned(
            attribute,
            "`name`, `code` and `width` are all required",
        )),
    }
}
