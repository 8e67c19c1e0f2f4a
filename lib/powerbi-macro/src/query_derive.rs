//! Query derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, Type, parse2};

/// Struct-level options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryStructOptions {
    /// Rename all fields using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `camelCase`
    CamelCase,
    /// `PascalCase`
    PascalCase,
    /// `snake_case`
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse a rename rule from a string.
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a `snake_case` field name.
    fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::CamelCase => to_camel_case(name),
            Self::PascalCase => to_pascal_case(name),
            Self::SnakeCase => name.to_string(),
            Self::ScreamingSnakeCase => name.to_uppercase(),
            Self::KebabCase => name.replace('_', "-"),
            Self::ScreamingKebabCase => name.to_uppercase().replace('_', "-"),
        }
    }
}

/// Convert a `snake_case` string to `camelCase`.
fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a `snake_case` string to `PascalCase`.
fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collection format for `Vec<T>` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum CollectionFormat {
    /// `a,b,c`
    Csv,
    /// `a b c`
    Ssv,
    /// `a|b|c`
    Pipes,
    /// `key=a&key=b&key=c`
    #[default]
    Multi,
}

impl CollectionFormat {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "csv" | "comma" => Some(Self::Csv),
            "ssv" | "space" => Some(Self::Ssv),
            "pipes" | "pipe" => Some(Self::Pipes),
            "multi" => Some(Self::Multi),
            _ => None,
        }
    }

    fn separator(self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(","),
            Self::Ssv => Some(" "),
            Self::Pipes => Some("|"),
            Self::Multi => None,
        }
    }
}

/// Field options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryFieldOptions {
    /// Rename the field in query string
    rename: Option<String>,
    /// Collection format for Vec<T> fields
    format: CollectionFormat,
    /// Inline the pairs of a nested options struct
    flatten: bool,
    /// Never encode this field
    skip: bool,
}

/// Expand the `#[derive(Query)]` macro.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_options = parse_query_struct_options(&input.attrs)?;

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::powerbi::ToQueryPairs for #name #ty_generics #where_clause {
                        fn to_query_pairs(&self) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                            ::std::vec::Vec::new()
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Query derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Query derive only supports structs",
            ));
        }
    };

    let mut field_handlers = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_query_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        // Determine the key: explicit rename > rename_all > field name
        let key = if let Some(ref rename) = options.rename {
            rename.clone()
        } else if let Some(rule) = struct_options.rename_all {
            rule.apply(&field_name.to_string())
        } else {
            field_name.to_string()
        };

        field_handlers.push(generate_field_handler(field_name, &field.ty, &key, &options)?);
    }

    Ok(quote! {
        impl #impl_generics ::powerbi::ToQueryPairs for #name #ty_generics #where_clause {
            fn to_query_pairs(&self) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                let mut pairs = ::std::vec::Vec::new();
                #(#field_handlers)*
                pairs
            }
        }
    })
}

/// Parse struct-level options from `#[query(...)]` attributes.
fn parse_query_struct_options(attrs: &[syn::Attribute]) -> syn::Result<QueryStructOptions> {
    let mut options = QueryStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, UPPERCASE, camelCase, PascalCase, \
                             snake_case, SCREAMING_SNAKE_CASE, kebab-case, SCREAMING-KEBAB-CASE",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
                Ok(())
            } else {
                Err(meta.error("unsupported struct attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[query(...)]` attributes.
fn parse_query_field_options(attrs: &[syn::Attribute]) -> syn::Result<QueryFieldOptions> {
    let mut options = QueryFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            } else if meta.path.is_ident("format") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.format = CollectionFormat::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        "unknown format, expected one of: csv, ssv, pipes, multi",
                    )
                })?;
            } else if meta.path.is_ident("flatten") {
                options.flatten = true;
            } else if meta.path.is_ident("skip") {
                options.skip = true;
            } else {
                return Err(meta.error(
                    "unsupported field attribute, expected one of: rename, format, flatten, skip",
                ));
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Generate code for handling a single field.
fn generate_field_handler(
    field_name: &syn::Ident,
    field_ty: &Type,
    key: &str,
    options: &QueryFieldOptions,
) -> syn::Result<TokenStream> {
    if options.flatten {
        if options.rename.is_some() {
            return Err(syn::Error::new_spanned(
                field_name,
                "`flatten` cannot be combined with `rename`",
            ));
        }
        return Ok(quote! {
            pairs.extend(::powerbi::ToQueryPairs::to_query_pairs(&self.#field_name));
        });
    }

    let handler = if is_wrapper_type(field_ty, "Option") {
        quote! {
            if let ::std::option::Option::Some(ref value) = self.#field_name {
                pairs.push((#key.to_string(), value.to_string()));
            }
        }
    } else if is_wrapper_type(field_ty, "Vec") {
        match options.format.separator() {
            Some(separator) => quote! {
                if !self.#field_name.is_empty() {
                    let value = self.#field_name.iter()
                        .map(|x| x.to_string())
                        .collect::<::std::vec::Vec<_>>()
                        .join(#separator);
                    pairs.push((#key.to_string(), value));
                }
            },
            None => quote! {
                for item in &self.#field_name {
                    pairs.push((#key.to_string(), item.to_string()));
                }
            },
        }
    } else {
        quote! {
            if self.#field_name != <#field_ty as ::std::default::Default>::default() {
                pairs.push((#key.to_string(), self.#field_name.to_string()));
            }
        }
    };
    Ok(handler)
}

/// Check if a type is `Wrapper<T>`, e.g. `Option<T>` or `Vec<T>`.
fn is_wrapper_type(ty: &Type, wrapper: &str) -> bool {
    matches!(ty, Type::Path(type_path)
        if type_path.path.segments.last()
            .is_some_and(|seg| seg.ident == wrapper))
}
