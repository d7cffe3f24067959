/// Navigation driver
///
/// Connects a `Router` to a `History` backend. Every location change is
/// resolved immediately and stamped with an increasing id. Only the newest
/// navigation is current; a renderer holding an older id should drop its
/// work.

use tracing::debug;

use crate::error::Result;
use crate::history::{History, MemoryHistory};
use crate::table::ResolvedRoute;
use crate::Router;

/// A resolved location change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Monotonic id; larger is newer
    pub id: u64,
    /// URL as registered with the history backend (base included)
    pub url: String,
    pub route: ResolvedRoute,
}

/// Drives a history backend through a router
///
/// # Examples
///
/// ```
/// use maud::{html, Markup};
/// use speeches_router::{MemoryHistory, Navigator, Params, RouteDefinition, RouteTable, Router, ViewComponent};
///
/// struct Page;
/// impl ViewComponent for Page {
///     fn name(&self) -> &'static str { "Page" }
///     fn render(&self, _: &Params) -> Markup { html! {} }
/// }
///
/// let table = RouteTable::new(vec![
///     RouteDefinition::new("/", "home", Page).unwrap(),
///     RouteDefinition::new("/speeches", "speeches", Page).unwrap(),
/// ])
/// .unwrap();
/// let router = Router::new(table).with_base("/archive");
///
/// let mut nav = Navigator::new(router, MemoryHistory::new("/archive"));
/// let first = nav.navigate("/speeches").unwrap().id;
/// assert_eq!(nav.current().unwrap().url, "/archive/speeches");
///
/// let back = nav.back().unwrap().unwrap();
/// assert_eq!(back.route.name, "home");
/// assert!(!nav.is_current(first));
/// ```
#[derive(Debug)]
pub struct Navigator<H: History = MemoryHistory> {
    router: Router,
    history: H,
    current: Option<Navigation>,
    last_id: u64,
}

impl<H: History> Navigator<H> {
    /// Wraps a history backend and resolves its current location
    ///
    /// An initial location that matches no route leaves `current()` empty.
    pub fn new(router: Router, history: H) -> Self {
        let mut navigator = Self {
            router,
            history,
            current: None,
            last_id: 0,
        };
        let initial = navigator.history.location().to_string();
        // Not-found at start-up is reported through `current()` being empty.
        let _ = navigator.settle(initial);
        navigator
    }

    /// Pushes an application path (without base) and resolves it
    ///
    /// The location is recorded even when no route matches, like a browser
    /// that lands on a not-found page.
    pub fn navigate(&mut self, path: &str) -> Result<&Navigation> {
        let url = self.router.base().join(path);
        self.history.push(url.clone());
        self.settle(url)
    }

    /// Navigates to a named route
    pub fn navigate_to(&mut self, name: &str, params: &crate::Params) -> Result<&Navigation> {
        let path = self.router.table().resolve_by_name(name, params)?;
        self.navigate(&path)
    }

    /// Replaces the current entry instead of pushing a new one
    pub fn redirect(&mut self, path: &str) -> Result<&Navigation> {
        let url = self.router.base().join(path);
        self.history.replace(url.clone());
        self.settle(url)
    }

    /// Goes one entry back. `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<Result<&Navigation>> {
        let url = self.history.back()?.to_string();
        Some(self.settle(url))
    }

    /// Goes one entry forward. `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<Result<&Navigation>> {
        let url = self.history.forward()?.to_string();
        Some(self.settle(url))
    }

    /// The last successfully resolved navigation, if the current location matched
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Whether a navigation id is still the one being displayed
    pub fn is_current(&self, id: u64) -> bool {
        self.current.as_ref().is_some_and(|nav| nav.id == id)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn settle(&mut self, url: String) -> Result<&Navigation> {
        self.last_id += 1;
        let id = self.last_id;

        match self.router.resolve(&url) {
            Ok(route_match) => {
                let route = route_match.to_resolved();
                debug!(id, url = %url, route = %route.name, "navigation resolved");
                Ok(self.current.insert(Navigation { id, url, route }))
            }
            Err(err) => {
                debug!(id, url = %url, error = %err, "navigation did not resolve");
                self.current = None;
                Err(err)
            }
        }
    }
}
