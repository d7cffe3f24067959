/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod base;
pub use base::BasePath;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use speeches_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/speeches"));
/// assert!(is_valid_path("/speaker/lincoln"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("speeches")); // Missing leading /
/// assert!(!is_valid_path("/speeches/")); // Trailing /
/// assert!(!is_valid_path("/speech//42")); // Double //
/// assert!(!is_valid_path("/speech\\42")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/speeches/` → `/speeches`
/// - Double slashes: `/speech//42` → `/speech/42`
/// - Backslashes: `\speech\42` → `/speech/42`
///
/// # Examples
///
/// ```
/// use speeches_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/speakers");
/// assert!(matches!(path, Cow::Borrowed("/speakers")));
///
/// assert_eq!(normalize_path("/speakers/"), "/speakers");
/// assert_eq!(normalize_path("speaker//lincoln"), "/speaker/lincoln");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Drops the `?query` and `#fragment` parts of a URL
///
/// # Examples
///
/// ```
/// use speeches_router::path::strip_query;
///
/// assert_eq!(strip_query("/speeches?page=2"), "/speeches");
/// assert_eq!(strip_query("/speech/42#p3"), "/speech/42");
/// assert_eq!(strip_query("/speakers"), "/speakers");
/// ```
pub fn strip_query(url: &str) -> &str {
    url.find(|c: char| c == '?' || c == '#')
        .map_or(url, |idx| &url[..idx])
}

/// Splits a path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
