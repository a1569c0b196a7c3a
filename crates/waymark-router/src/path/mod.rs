//! Path utilities for trimming and tokenizing request paths
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.
//! Every function borrows from its input; nothing here allocates beyond the returned `Vec`.

/// Characters stripped from both ends of a path or template
fn is_edge_char(c: char) -> bool {
    c == '/' || c.is_whitespace()
}

/// Trims leading/trailing `/` and whitespace from a path
///
/// **Pure function**: zero-copy, returns a subslice of the input.
///
/// # Examples
///
/// ```
/// use waymark_router::path::trim_path;
///
/// assert_eq!(trim_path("/blog/42/"), "blog/42");
/// assert_eq!(trim_path("  //blog// "), "blog");
/// assert_eq!(trim_path("/"), "");
/// ```
pub fn trim_path(path: &str) -> &str {
    path.trim_matches(is_edge_char)
}

/// Splits a path into its components, dropping the empty result of an empty path
///
/// Interior empty components (`a//b`) are kept; only the ends are trimmed.
///
/// # Examples
///
/// ```
/// use waymark_router::path::split_path;
///
/// assert_eq!(split_path("/blog/view/"), vec!["blog", "view"]);
/// assert!(split_path("").is_empty());
/// assert!(split_path("///").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    match trim_path(path) {
        "" => Vec::new(),
        trimmed => trimmed.split('/').collect(),
    }
}

/// Splits a path into tokens for pattern matching
///
/// Unlike [`split_path`], an empty path still yields a single empty token, so
/// an empty request path only matches a pattern whose first segment accepts it.
///
/// # Examples
///
/// ```
/// use waymark_router::path::path_tokens;
///
/// assert_eq!(path_tokens("/blog/42"), vec!["blog", "42"]);
/// assert_eq!(path_tokens("/"), vec![""]);
/// ```
pub fn path_tokens(path: &str) -> Vec<&str> {
    trim_path(path).split('/').collect()
}

/// Cuts a request URI at the start of its query string or fragment
///
/// # Examples
///
/// ```
/// use waymark_router::path::strip_query;
///
/// assert_eq!(strip_query("/blog/42?page=2"), "/blog/42");
/// assert_eq!(strip_query("/blog#top"), "/blog");
/// assert_eq!(strip_query("/blog"), "/blog");
/// ```
pub fn strip_query(uri: &str) -> &str {
    uri.find(['?', '#']).map_or(uri, |idx| &uri[..idx])
}
