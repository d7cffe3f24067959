/// Pattern parsing for route templates
///
/// A route template is a `/`-delimited list of segments. A segment prefixed
/// with `:` captures one path segment under that name; anything else must
/// match literally.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, RouterError};
use crate::path::segments;
use crate::Params;

/// One `/`-delimited unit of a route template
///
/// # Examples
///
/// ```
/// use speeches_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("speeches"), Segment::Literal("speeches".to_string()));
/// assert_eq!(classify_segment(":name"), Segment::Param("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text segment
    Literal(String),
    /// Named capture: `:name`
    Param(String),
}

impl Segment {
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// Classifies a template segment (pure function)
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Literal(segment.to_string()),
    }
}

/// A parsed route template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a template like `/speaker/:name`
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::route::Pattern;
    ///
    /// let pattern = Pattern::parse("/speaker/:name").unwrap();
    /// assert_eq!(pattern.params().collect::<Vec<_>>(), vec!["name"]);
    ///
    /// assert!(Pattern::parse("/").unwrap().segments().is_empty());
    /// assert!(Pattern::parse("speaker").is_err());
    /// assert!(Pattern::parse("/speaker/").is_err());
    /// assert!(Pattern::parse("/speaker/:").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        if !source.starts_with('/') {
            return Err(RouterError::invalid_pattern(source, "must start with `/`"));
        }
        if source != "/" && source.ends_with('/') {
            return Err(RouterError::invalid_pattern(source, "trailing `/`"));
        }
        if source.contains("//") {
            return Err(RouterError::invalid_pattern(source, "empty segment"));
        }

        let segments: Vec<Segment> = segments(source).map(classify_segment).collect();

        let mut seen = HashSet::new();
        for segment in &segments {
            if let Segment::Param(name) = segment {
                if name.is_empty() {
                    return Err(RouterError::invalid_pattern(source, "unnamed parameter"));
                }
                if !seen.insert(name.as_str()) {
                    return Err(RouterError::invalid_pattern(
                        source,
                        format!("parameter `{}` appears twice", name),
                    ));
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the capture segments, in template order
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches a normalized path against this template
    ///
    /// Segment counts must agree exactly. Captured values are percent-decoded;
    /// a value that does not decode to UTF-8 is kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::route::Pattern;
    ///
    /// let pattern = Pattern::parse("/speech/:paragraph_id").unwrap();
    ///
    /// let params = pattern.matches("/speech/42", false).unwrap();
    /// assert_eq!(params.get("paragraph_id").map(String::as_str), Some("42"));
    ///
    /// assert!(pattern.matches("/speech", false).is_none());
    /// assert!(pattern.matches("/speech/42/extra", false).is_none());
    /// assert!(pattern.matches("/Speech/42", false).is_none());
    /// assert!(pattern.matches("/Speech/42", true).is_some());
    /// ```
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments: Vec<&str> = segments(path).collect();
        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments)
            .try_fold(Params::new(), |mut params, (segment, value)| match segment {
                Segment::Literal(literal) => {
                    let equal = if case_insensitive {
                        literal.eq_ignore_ascii_case(value)
                    } else {
                        literal == value
                    };
                    equal.then_some(params)
                }
                Segment::Param(name) => {
                    let decoded = urlencoding::decode(value)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decoded);
                    Some(params)
                }
            })
    }

    /// Substitutes parameter values into the template
    ///
    /// Values are percent-encoded so that one value always occupies exactly one
    /// segment. `route` names the owning route in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::route::Pattern;
    /// use speeches_router::Params;
    ///
    /// let pattern = Pattern::parse("/speaker/:name").unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("name".to_string(), "lincoln".to_string());
    /// assert_eq!(pattern.build("single-speaker", &params).unwrap(), "/speaker/lincoln");
    ///
    /// assert!(pattern.build("single-speaker", &Params::new()).is_err());
    /// ```
    pub fn build(&self, route: &str, params: &Params) -> Result<String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => Ok(literal.clone()),
                Segment::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| urlencoding::encode(value).into_owned())
                    .ok_or_else(|| RouterError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    }),
            })
            .try_fold(String::new(), |mut url, segment| {
                url.push('/');
                url.push_str(&segment?);
                Ok(url)
            })
    }

    /// True when every path matched by `other` is also matched by `self`
    ///
    /// Used to flag routes that can never be reached because an earlier
    /// declaration always wins. Literals compare case-sensitively; see
    /// `shadows_with_options` for case-insensitive tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::route::Pattern;
    ///
    /// let wildcard = Pattern::parse("/:speech_name").unwrap();
    /// let speeches = Pattern::parse("/speeches").unwrap();
    ///
    /// assert!(wildcard.shadows(&speeches));
    /// assert!(!speeches.shadows(&wildcard));
    /// ```
    pub fn shadows(&self, other: &Pattern) -> bool {
        self.shadows_with_options(other, false)
    }

    /// Shadow check under the literal comparison used for matching
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::route::Pattern;
    ///
    /// let upper = Pattern::parse("/About").unwrap();
    /// let lower = Pattern::parse("/about").unwrap();
    ///
    /// assert!(!upper.shadows_with_options(&lower, false));
    /// assert!(upper.shadows_with_options(&lower, true));
    /// ```
    pub fn shadows_with_options(&self, other: &Pattern, case_insensitive: bool) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(mine, theirs)| match (mine, theirs) {
                    (Segment::Param(_), _) => true,
                    (Segment::Literal(a), Segment::Literal(b)) if case_insensitive => {
                        a.eq_ignore_ascii_case(b)
                    }
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Literal(_), Segment::Param(_)) => false,
                })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        assert_eq!(
            classify_segment("speakers"),
            Segment::Literal("speakers".to_string())
        );
    }

    #[test]
    fn test_classify_param() {
        let seg = classify_segment(":speech_name");
        assert_eq!(seg, Segment::Param("speech_name".to_string()));
        assert!(seg.is_param());
    }

    #[test]
    fn test_parse_rejects_duplicate_param() {
        let err = Pattern::parse("/:a/:a").unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(Pattern::parse("/speech//42").is_err());
        assert!(Pattern::parse("").is_err());
    }

    #[test]
    fn test_root_matches_only_root() {
        let root = Pattern::parse("/").unwrap();
        assert_eq!(root.matches("/", false), Some(Params::new()));
        assert!(root.matches("/speeches", false).is_none());
    }

    #[test]
    fn test_param_value_is_decoded() {
        let pattern = Pattern::parse("/:speech_name").unwrap();
        let params = pattern.matches("/gettysburg%20address", false).unwrap();
        assert_eq!(params["speech_name"], "gettysburg address");
    }

    #[test]
    fn test_build_encodes_reserved_characters() {
        let pattern = Pattern::parse("/:speech_name").unwrap();
        let mut params = Params::new();
        params.insert("speech_name".to_string(), "a/b c".to_string());

        let url = pattern.build("single-speech", &params).unwrap();
        assert_eq!(url, "/a%2Fb%20c");
        assert_eq!(pattern.matches(&url, false), Some(params));
    }

    #[test]
    fn test_build_rejects_empty_value() {
        let pattern = Pattern::parse("/speech/:paragraph_id").unwrap();
        let mut params = Params::new();
        params.insert("paragraph_id".to_string(), String::new());

        let err = pattern.build("single-paragraph", &params).unwrap_err();
        assert_eq!(
            err,
            RouterError::MissingParam {
                route: "single-paragraph".to_string(),
                param: "paragraph_id".to_string(),
            }
        );
    }

    #[test]
    fn test_shadows_requires_same_depth() {
        let wildcard = Pattern::parse("/:speech_name").unwrap();
        let speaker = Pattern::parse("/speaker/:name").unwrap();
        assert!(!wildcard.shadows(&speaker));
        assert!(wildcard.shadows(&wildcard));
    }
}
