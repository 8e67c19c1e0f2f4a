//! Procedural macros for the Power BI REST client.
//!
//! This crate provides `#[derive(Query)]`, which turns an options struct into
//! query parameter pairs following "omit if default" rules.
//!
//! # Example
//!
//! ```ignore
//! use powerbi::Query;
//!
//! #[derive(Debug, Default, Query)]
//! pub struct ListGroupsOptions {
//!     #[query(rename = "$filter")]
//!     pub filter: String,
//!     #[query(rename = "$skip")]
//!     pub skip: u32,
//!     #[query(rename = "$top")]
//!     pub top: u32,
//! }
//! ```

mod query_derive;

use proc_macro::TokenStream;

/// Derive the `ToQueryPairs` trait for a struct.
///
/// This generates a method to convert the struct into query parameter pairs.
/// A field only produces a pair when it differs from its default value, so a
/// struct left at `Default::default()` produces no query string at all.
///
/// # Struct Attributes
///
/// - `#[query(rename_all = "camelCase")]` - Rename all fields using a case convention
///
/// Supported case conventions:
/// - `lowercase`, `UPPERCASE`
/// - `camelCase`, `PascalCase`
/// - `snake_case`, `SCREAMING_SNAKE_CASE`
/// - `kebab-case`, `SCREAMING-KEBAB-CASE`
///
/// # Field Attributes
///
/// - `#[query(rename = "name")]` - Use a different name in the query string (overrides `rename_all`)
/// - `#[query(format = "csv")]` - Collection format for `Vec<T>` (csv, ssv, pipes, multi)
/// - `#[query(flatten)]` - Inline the pairs of a nested options struct
/// - `#[query(skip)]` - Never encode this field
///
/// # Field Kinds
///
/// - `Option<T>` - encoded when `Some`
/// - `Vec<T>` - encoded when non-empty
/// - anything else - encoded when `!= Default::default()`; needs `PartialEq + Default + Display`
///
/// # Example
///
/// ```ignore
/// use powerbi::Query;
///
/// #[derive(Debug, Default, Query)]
/// #[query(rename_all = "camelCase")]
/// struct DeleteUserOptions {
///     is_group: bool,        // becomes "isGroup", sent only when true
///     profile_id: String,    // becomes "profileId", sent only when non-empty
/// }
/// ```
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
