//! # Speeches Router
//!
//! A small client-side routing library:
//! - Static routes (`/speeches`)
//! - Single-segment parameters (`/speaker/:name`)
//! - First-match-wins resolution in declaration order
//! - Named routes and path generation
//! - A deployment base path (`/archive/...`)
//! - A history backend and a navigator that keeps the latest resolution
//!
//! ## Matching Rules
//!
//! - Segment counts must agree exactly; there is no prefix matching
//! - Literal segments compare case-sensitively unless configured otherwise
//! - A parameter segment captures any one non-empty segment (percent-decoded)
//! - Trailing slashes, doubled slashes and backslashes are normalized away
//!
//! ## Example
//!
//! ```
//! use maud::{html, Markup};
//! use speeches_router::{Params, RouteDefinition, RouteTable, Router, ViewComponent};
//!
//! struct SpeakerView;
//!
//! impl ViewComponent for SpeakerView {
//!     fn name(&self) -> &'static str {
//!         "SpeakerView"
//!     }
//!
//!     fn render(&self, params: &Params) -> Markup {
//!         html! { h1 { (params["name"]) } }
//!     }
//! }
//!
//! let table = RouteTable::new(vec![
//!     RouteDefinition::new("/speaker/:name", "single-speaker", SpeakerView).unwrap(),
//! ])
//! .unwrap();
//! let router = Router::new(table);
//!
//! let route_match = router.resolve("/speaker/lincoln?tab=bio").unwrap();
//! assert_eq!(route_match.name(), "single-speaker");
//! assert_eq!(route_match.params.get("name"), Some(&"lincoln".to_string()));
//! assert_eq!(route_match.render().into_string(), "<h1>lincoln</h1>");
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod history;
pub mod navigator;
pub mod path;
pub mod route;
pub mod table;
pub mod view;

pub use error::RouterError;
pub use history::{History, MemoryHistory};
pub use navigator::{Navigation, Navigator};
pub use path::{is_valid_path, normalize_path, strip_query, BasePath};
pub use route::{Pattern, RouteDefinition, Segment};
pub use table::{ResolvedRoute, RouteMatch, RouteTable};
pub use view::{ViewComponent, ViewRef};

/// Parameter name → captured value
pub type Params = HashMap<String, String>;

// ============================================================================
// Router Implementation
// ============================================================================

/// Route table plus the deployment settings needed to resolve full URLs
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    base: BasePath,
    case_insensitive: bool,
}

impl Router {
    /// Creates a router at the root base with case-sensitive matching
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            base: BasePath::root(),
            case_insensitive: false,
        }
    }

    /// Sets the deployment base path
    ///
    /// # Examples
    ///
    /// ```
    /// use speeches_router::{RouteTable, Router};
    ///
    /// let router = Router::new(RouteTable::new(Vec::new()).unwrap())
    ///     .with_base("/archive/");
    /// assert_eq!(router.base().as_str(), "/archive");
    /// ```
    pub fn with_base(mut self, base: impl Into<BasePath>) -> Self {
        self.base = base.into();
        self
    }

    /// Configures case sensitivity of literal segments
    ///
    /// Switching to case-insensitive matching can make more routes
    /// unreachable (`/About` declared before `/about`); those are logged again.
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        if case_insensitive {
            let known = self.table.shadowed_routes();
            let added: Vec<(String, String)> = self
                .table
                .shadowed_routes_with_options(true)
                .into_iter()
                .filter(|pair| !known.contains(pair))
                .collect();
            table::warn_shadowed(&added);
        }
        self
    }

    /// Unreachable `(shadowing, shadowed)` route pairs under this router's
    /// case setting
    pub fn shadowed_routes(&self) -> Vec<(String, String)> {
        self.table.shadowed_routes_with_options(self.case_insensitive)
    }

    /// Resolves a full URL as seen by the history backend
    ///
    /// Strips the base, then any query string or fragment, then matches.
    /// A URL outside the base resolves to `NoMatch`.
    pub fn resolve(&self, url: &str) -> error::Result<RouteMatch<'_>> {
        let stripped = self
            .base
            .strip(url)
            .ok_or_else(|| RouterError::NoMatch {
                path: url.to_string(),
            })?;

        self.table
            .match_path_with_options(strip_query(&stripped), self.case_insensitive)
    }

    /// Builds the full URL (base included) of a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use maud::{html, Markup};
    /// use speeches_router::{Params, RouteDefinition, RouteTable, Router, ViewComponent};
    ///
    /// struct Page;
    /// impl ViewComponent for Page {
    ///     fn name(&self) -> &'static str { "Page" }
    ///     fn render(&self, _: &Params) -> Markup { html! {} }
    /// }
    ///
    /// let table = RouteTable::new(vec![
    ///     RouteDefinition::new("/speech/:paragraph_id", "single-paragraph", Page).unwrap(),
    /// ])
    /// .unwrap();
    /// let router = Router::new(table).with_base("/archive");
    ///
    /// let mut params = Params::new();
    /// params.insert("paragraph_id".to_string(), "42".to_string());
    /// assert_eq!(router.href("single-paragraph", &params).unwrap(), "/archive/speech/42");
    /// ```
    pub fn href(&self, name: &str, params: &Params) -> error::Result<String> {
        let path = self.table.resolve_by_name(name, params)?;
        Ok(self.base.join(&path))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}
