/// View-component capability
///
/// The router never renders anything itself: each route holds a shared
/// reference to a view, and the resolved parameters are handed to it.

use std::sync::Arc;

use maud::Markup;

use crate::Params;

/// A renderable page-level unit
///
/// # Examples
///
/// ```
/// use maud::{html, Markup};
/// use speeches_router::{Params, ViewComponent};
///
/// struct About;
///
/// impl ViewComponent for About {
///     fn name(&self) -> &'static str {
///         "AboutView"
///     }
///
///     fn render(&self, _params: &Params) -> Markup {
///         html! { h1 { "About" } }
///     }
/// }
///
/// assert_eq!(About.render(&Params::new()).into_string(), "<h1>About</h1>");
/// ```
pub trait ViewComponent: Send + Sync {
    /// Component name, used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Renders the view for the captured route parameters
    fn render(&self, params: &Params) -> Markup;
}

/// Shared handle to a view. The route table only holds an association.
pub type ViewRef = Arc<dyn ViewComponent>;
