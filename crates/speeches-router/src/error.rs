/// Errors produced while building a route table or resolving paths
///
/// `NoMatch` is an expected, user-visible outcome (render a not-found page).
/// `UnknownRoute` and `MissingParam` point at a caller asking for a route
/// that was never declared or forgetting one of its parameters.
/// `InvalidPattern` and `DuplicateName` are raised once, at table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("no route matches path `{path}`")]
    NoMatch { path: String },

    #[error("unknown route `{name}`")]
    UnknownRoute { name: String },

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route name `{name}` is declared more than once")]
    DuplicateName { name: String },
}

impl RouterError {
    pub(crate) fn no_match(path: impl Into<String>) -> Self {
        RouterError::NoMatch { path: path.into() }
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the not-found outcome of a lookup
    pub fn is_no_match(&self) -> bool {
        matches!(self, RouterError::NoMatch { .. })
    }
}

pub type Result<T, E = RouterError> = std::result::Result<T, E>;
