//! Query string and path segment encoding.
//!
//! Options structs turn into query pairs through [`ToQueryPairs`], usually
//! derived with `#[derive(Query)]`. [`add_options`] appends them to a
//! relative path; [`escape_path`] makes caller-supplied identifiers safe to
//! splice into a path template.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{Error, Result};

/// Characters escaped in query keys and values.
///
/// `$` stays literal so OData parameters read `$top=10`, not `%24top=10`.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$');

/// Characters escaped in a single path segment.
///
/// Everything a path segment may carry literally is kept; `/`, `?` and `#`
/// are always escaped so an identifier stays a single segment. Dot segments
/// survive escaping and are refused by [`check_path`] instead.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'@')
    .remove(b':')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Trait for types that can be converted to query parameter pairs.
///
/// This is automatically implemented by the `#[derive(Query)]` macro. Fields
/// holding their default value produce no pair, so an options value left at
/// its defaults produces an empty list.
///
/// # Example
///
/// ```ignore
/// use powerbi::Query;
///
/// #[derive(Debug, Default, Query)]
/// struct ListGroupsOptions {
///     #[query(rename = "$filter")]
///     filter: String,
///     #[query(rename = "$top")]
///     top: u32,
/// }
/// ```
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}

/// Encode query pairs as `key=value&key=value`, in the order given.
#[must_use]
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY),
                utf8_percent_encode(value, QUERY)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append the query parameters of `options` to `path`.
///
/// Absent options, or options whose fields are all at their defaults, leave
/// `path` unchanged with no trailing `?`.
///
/// # Example
///
/// ```
/// use powerbi_core::{ToQueryPairs, add_options};
///
/// struct Page { top: u32 }
///
/// impl ToQueryPairs for Page {
///     fn to_query_pairs(&self) -> Vec<(String, String)> {
///         if self.top == 0 { vec![] } else { vec![("$top".into(), self.top.to_string())] }
///     }
/// }
///
/// assert_eq!(add_options("groups", Some(&Page { top: 10 })), "groups?$top=10");
/// assert_eq!(add_options("groups", Some(&Page { top: 0 })), "groups");
/// assert_eq!(add_options::<Page>("groups", None), "groups");
/// ```
#[must_use]
pub fn add_options<T: ToQueryPairs + ?Sized>(path: &str, options: Option<&T>) -> String {
    let Some(options) = options else {
        return path.to_string();
    };
    let pairs = options.to_query_pairs();
    if pairs.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{}", encode_query(&pairs))
}

/// Escape one path segment, e.g. a group or dataset identifier.
#[must_use]
pub fn escape_path(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Refuse a relative path holding a `.` or `..` segment.
///
/// URL resolution folds those away, so an identifier such as `..` would
/// silently target another endpoint. Percent-encoded dots count too: the
/// URL parser normalizes `%2e` the same way. Only the part before `?` is
/// inspected.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] naming the offending segment.
pub fn check_path(path: &str) -> Result<()> {
    let route = path.split_once('?').map_or(path, |(route, _)| route);
    let dot_segment = route.split('/').find(|segment| {
        let unescaped = segment.to_ascii_lowercase().replace("%2e", ".");
        unescaped == "." || unescaped == ".."
    });
    match dot_segment {
        Some(segment) => Err(Error::invalid_request(format!(
            "path segment {segment:?} is not allowed in {route:?}"
        ))),
        None => Ok(()),
    }
}
