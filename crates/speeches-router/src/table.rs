/// Ordered, immutable route table
///
/// Routes are tried strictly in declaration order and the first full match
/// wins. There is no priority sorting: a single-segment wildcard declared
/// before a literal route of the same depth will hide it. Construction logs a
/// warning for every such unreachable route but keeps the declared order.

use std::collections::{HashMap, HashSet};

use maud::Markup;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, RouterError};
use crate::path::normalize_path;
use crate::route::RouteDefinition;
use crate::Params;

/// Result of matching a path against the table
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The matched route
    pub route: &'a RouteDefinition,
    /// Extracted parameters from the path
    pub params: Params,
}

impl<'a> RouteMatch<'a> {
    /// Name of the matched route
    pub fn name(&self) -> &'a str {
        &self.route.name
    }

    /// Hands the captured parameters to the route's view
    pub fn render(&self) -> Markup {
        self.route.view.render(&self.params)
    }

    /// Owned `(name, params)` pair for handing across to the rendering side
    pub fn to_resolved(&self) -> ResolvedRoute {
        ResolvedRoute {
            name: self.route.name.clone(),
            params: self.params.clone(),
        }
    }
}

/// Owned summary of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub name: String,
    pub params: Params,
}

/// The application's route declarations, fixed at start-up
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    by_name: HashMap<String, usize>,
    shadowed: Vec<(String, String)>,
}

impl RouteTable {
    /// Builds a table, keeping declaration order
    ///
    /// Fails with `DuplicateName` when two routes share a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use maud::{html, Markup};
    /// use speeches_router::{Params, RouteDefinition, RouteTable, ViewComponent};
    ///
    /// struct Page;
    /// impl ViewComponent for Page {
    ///     fn name(&self) -> &'static str { "Page" }
    ///     fn render(&self, _: &Params) -> Markup { html! {} }
    /// }
    ///
    /// let table = RouteTable::new(vec![
    ///     RouteDefinition::new("/", "home", Page).unwrap(),
    ///     RouteDefinition::new("/:slug", "page", Page).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.match_path("/about").unwrap().name(), "page");
    /// ```
    pub fn new<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        let routes: Vec<RouteDefinition> = routes.into_iter().collect();

        let mut by_name = HashMap::with_capacity(routes.len());
        for (idx, route) in routes.iter().enumerate() {
            if by_name.insert(route.name.clone(), idx).is_some() {
                return Err(RouterError::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        let shadowed = find_shadowed(&routes, false);
        warn_shadowed(&shadowed);

        debug!(routes = routes.len(), "route table built");

        Ok(Self {
            routes,
            by_name,
            shadowed,
        })
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// The path is normalized first, so `/speeches/` matches `/speeches`.
    /// Query strings are not stripped here; see `Router::resolve`.
    pub fn match_path(&self, path: &str) -> Result<RouteMatch<'_>> {
        self.match_path_with_options(path, false)
    }

    /// Matches a path with optional case-insensitive literal comparison
    pub fn match_path_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Result<RouteMatch<'_>> {
        let normalized = normalize_path(path);

        let found = self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(&normalized, case_insensitive)
                .map(|params| RouteMatch { route, params })
        });

        match found {
            Some(route_match) => {
                debug!(
                    path = %normalized,
                    route = %route_match.route.name,
                    view = route_match.route.view.name(),
                    "route matched"
                );
                Ok(route_match)
            }
            None => {
                debug!(path = %normalized, "no route matched");
                Err(RouterError::no_match(normalized))
            }
        }
    }

    /// Builds the path of a named route
    ///
    /// Parameters the template does not use are ignored. The built path is
    /// not guaranteed to match `name` again: a wildcard value that spells an
    /// earlier literal route (`/:speech_name` with `speeches`) resolves to that
    /// route instead. This is reported as a debug event, not an error.
    pub fn resolve_by_name(&self, name: &str, params: &Params) -> Result<String> {
        let route = self.get(name).ok_or_else(|| RouterError::UnknownRoute {
            name: name.to_string(),
        })?;

        let used: HashSet<&str> = route.pattern.params().collect();
        let unused: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|key| !used.contains(key))
            .collect();
        if !unused.is_empty() {
            debug!(route = name, ?unused, "ignoring parameters not in route pattern");
        }

        let path = route.pattern.build(&route.name, params)?;

        if let Ok(found) = self.match_path(&path) {
            if found.route.name != route.name {
                debug!(
                    route = name,
                    path = %path,
                    resolves_to = %found.route.name,
                    "built path is captured by an earlier route"
                );
            }
        }

        Ok(path)
    }

    /// Same as `resolve_by_name` with parameters given as pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use maud::{html, Markup};
    /// use speeches_router::{Params, RouteDefinition, RouteTable, ViewComponent};
    ///
    /// struct Page;
    /// impl ViewComponent for Page {
    ///     fn name(&self) -> &'static str { "Page" }
    ///     fn render(&self, _: &Params) -> Markup { html! {} }
    /// }
    ///
    /// let table = RouteTable::new(vec![
    ///     RouteDefinition::new("/speaker/:name", "single-speaker", Page).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let path = table.resolve_by_name_params("single-speaker", &[("name", "lincoln")]).unwrap();
    /// assert_eq!(path, "/speaker/lincoln");
    /// ```
    pub fn resolve_by_name_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.resolve_by_name(name, &params)
    }

    /// Looks up a route by name
    pub fn get(&self, name: &str) -> Option<&RouteDefinition> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Routes in declaration order
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `(shadowing, shadowed)` name pairs for routes that can never match
    /// under case-sensitive matching
    pub fn shadowed_routes(&self) -> &[(String, String)] {
        &self.shadowed
    }

    /// Same as `shadowed_routes` for the given literal comparison
    pub fn shadowed_routes_with_options(&self, case_insensitive: bool) -> Vec<(String, String)> {
        if case_insensitive {
            find_shadowed(&self.routes, true)
        } else {
            self.shadowed.clone()
        }
    }
}

fn find_shadowed(routes: &[RouteDefinition], case_insensitive: bool) -> Vec<(String, String)> {
    routes
        .iter()
        .enumerate()
        .filter_map(|(idx, later)| {
            routes[..idx]
                .iter()
                .find(|earlier| {
                    earlier
                        .pattern
                        .shadows_with_options(&later.pattern, case_insensitive)
                })
                .map(|earlier| (earlier.name.clone(), later.name.clone()))
        })
        .collect()
}

pub(crate) fn warn_shadowed(shadowed: &[(String, String)]) {
    for (earlier, later) in shadowed {
        warn!(
            shadowing = %earlier,
            shadowed = %later,
            "route `{}` can never match: `{}` is declared first and matches every path it does",
            later,
            earlier
        );
    }
}
