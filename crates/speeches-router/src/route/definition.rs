/// A single navigable route: template, unique name and view

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::route::pattern::Pattern;
use crate::view::{ViewComponent, ViewRef};

/// Represents one entry of a route table
#[derive(Clone)]
pub struct RouteDefinition {
    /// Parsed template like `/speaker/:name`
    pub pattern: Pattern,
    /// Unique name used for navigation by name
    pub name: String,
    /// View rendered while this route is active
    pub view: ViewRef,
    /// Arbitrary metadata (page title, analytics tags, ...)
    pub meta: HashMap<String, String>,
}

impl RouteDefinition {
    /// Creates a route from a template string
    ///
    /// # Examples
    ///
    /// ```
    /// use maud::{html, Markup};
    /// use speeches_router::{Params, RouteDefinition, ViewComponent};
    ///
    /// struct SpeakerView;
    ///
    /// impl ViewComponent for SpeakerView {
    ///     fn name(&self) -> &'static str { "SpeakerView" }
    ///     fn render(&self, params: &Params) -> Markup {
    ///         html! { h1 { (params["name"]) } }
    ///     }
    /// }
    ///
    /// let route = RouteDefinition::new("/speaker/:name", "single-speaker", SpeakerView).unwrap();
    /// assert_eq!(route.pattern.as_str(), "/speaker/:name");
    /// assert_eq!(route.name, "single-speaker");
    /// ```
    pub fn new(
        pattern: &str,
        name: impl Into<String>,
        view: impl ViewComponent + 'static,
    ) -> Result<Self> {
        Self::with_view_ref(pattern, name, Arc::new(view))
    }

    /// Creates a route that shares an existing view handle
    pub fn with_view_ref(pattern: &str, name: impl Into<String>, view: ViewRef) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: name.into(),
            view,
            meta: HashMap::new(),
        })
    }

    /// Sets a metadata key-value pair
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Gets a metadata value by key
    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("pattern", &self.pattern.as_str())
            .field("name", &self.name)
            .field("view", &self.view.name())
            .field("meta", &self.meta)
            .finish()
    }
}
