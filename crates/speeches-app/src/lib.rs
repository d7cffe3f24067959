//! # Speeches App
//!
//! Routing for the speeches web application: the six page routes, their
//! views, and the deployment configuration that decides the base path.
//!
//! ```
//! use speeches_app::{App, Config};
//!
//! let app = App::new(&Config::default()).unwrap();
//! let route_match = app.router().resolve("/speaker/lincoln").unwrap();
//! assert_eq!(route_match.name(), "single-speaker");
//! ```

pub mod config;
pub mod routes;
pub mod views;

pub use config::{Config, RouterConfig};
pub use routes::route_table;

use anyhow::{Context, Result};
use speeches_router::{MemoryHistory, Navigator, Router};
use tracing::info;

/// Route table and deployment settings, built once at start-up
#[derive(Debug, Clone)]
pub struct App {
    router: Router,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let table = route_table().context("Failed to build route table")?;
        let router = Router::new(table)
            .with_base(config.router.base_path.as_str())
            .with_case_sensitivity(config.router.case_insensitive);

        info!(
            routes = router.table().len(),
            base = %router.base(),
            "speeches router ready"
        );

        Ok(Self { router })
    }

    /// Builds the app from ./speeches.toml and `BASE_URL`
    pub fn from_env() -> Result<Self> {
        let config = Config::load_default()?;
        Self::new(&config)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Starts an in-memory session at the base URL
    pub fn navigator(&self) -> Navigator<MemoryHistory> {
        let start = self.router.base().join("/");
        Navigator::new(self.router.clone(), MemoryHistory::new(start))
    }
}
