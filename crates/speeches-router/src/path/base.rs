/// Deployment base path
///
/// The application may be served below a prefix (`/archive/`). Incoming URLs
/// carry that prefix, route patterns never do: `strip` removes it before
/// matching and `join` puts it back before a URL is handed to the history
/// backend.

use std::borrow::Cow;
use std::fmt;

/// A normalized URL prefix. The root base is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// The root base: URLs are used as-is
    pub fn root() -> Self {
        Self::default()
    }

    /// Normalizes a configured base
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::BasePath;
    ///
    /// assert_eq!(BasePath::new("/archive/").as_str(), "/archive");
    /// assert_eq!(BasePath::new("archive").as_str(), "/archive");
    /// assert!(BasePath::new("/").is_root());
    /// assert!(BasePath::new("").is_root());
    /// ```
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Removes the base from a URL
    ///
    /// Returns `None` when the URL does not live under the base. The prefix must
    /// end on a segment boundary, so `/archived` is not under `/archive`.
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::BasePath;
    ///
    /// let base = BasePath::new("/archive");
    /// assert_eq!(base.strip("/archive/speeches").as_deref(), Some("/speeches"));
    /// assert_eq!(base.strip("/archive").as_deref(), Some("/"));
    /// assert_eq!(base.strip("/archive?q=1").as_deref(), Some("/?q=1"));
    /// assert_eq!(base.strip("/archived"), None);
    /// assert_eq!(base.strip("/speeches"), None);
    /// ```
    pub fn strip<'a>(&self, url: &'a str) -> Option<Cow<'a, str>> {
        if self.is_root() {
            return Some(Cow::Borrowed(url));
        }

        let rest = url.strip_prefix(self.0.as_str())?;
        match rest.chars().next() {
            None => Some(Cow::Borrowed("/")),
            Some('/') => Some(Cow::Borrowed(rest)),
            Some('?') | Some('#') => Some(Cow::Owned(format!("/{}", rest))),
            Some(_) => None,
        }
    }

    /// Prepends the base to a route path
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::BasePath;
    ///
    /// let base = BasePath::new("/archive/");
    /// assert_eq!(base.join("/speaker/lincoln"), "/archive/speaker/lincoln");
    /// assert_eq!(base.join("/"), "/archive");
    ///
    /// assert_eq!(BasePath::root().join("/speeches"), "/speeches");
    /// assert_eq!(BasePath::root().join(""), "/");
    /// ```
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            return match path {
                "" => "/".to_string(),
                _ => path.to_string(),
            };
        }
        match path {
            "" | "/" => self.0.clone(),
            _ if path.starts_with('/') => format!("{}{}", self.0, path),
            _ => format!("{}/{}", self.0, path),
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for BasePath {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_path() {
        assert_eq!(BasePath::root().join(""), "/");
        assert_eq!(BasePath::new("/archive").join(""), "/archive");
    }
}
