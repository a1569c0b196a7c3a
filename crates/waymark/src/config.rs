// File: src/config.rs
// Purpose: Configuration parsing from waymark.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use waymark_router::{
    DefaultRoute, RoutePattern, RouteTarget, Router, DEFAULT_ACTION, DEFAULT_CONTROLLER,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    /// Explicit routes, tried in file order
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Controller used when a path names none (default: "Index")
    #[serde(default = "default_controller")]
    pub default_controller: String,

    /// Action used when a path names none (default: "index")
    #[serde(default = "default_action")]
    pub default_action: String,

    /// Whether resolved params are merged into the query store (default: true)
    #[serde(default = "default_true")]
    pub merge_params: bool,
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    pub name: String,
    pub pattern: String,

    /// `controller`, `action` and `[routes.params]`, all optional
    #[serde(flatten)]
    pub target: RouteTarget,
}

// Default values
fn default_name() -> String {
    "waymark-app".to_string()
}

fn default_controller() -> String {
    DEFAULT_CONTROLLER.to_string()
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_controller: default_controller(),
            default_action: default_action(),
            merge_params: true,
        }
    }
}

impl Config {
    /// Load configuration from waymark.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./waymark.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("waymark.toml")
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// The fallback convention configured by `[routing]`
    pub fn default_route(&self) -> DefaultRoute {
        DefaultRoute::new(
            &self.routing.default_controller,
            &self.routing.default_action,
        )
    }

    /// Compiles `[[routes]]` into a router, in file order
    ///
    /// A bad template or a reused name fails the whole table.
    pub fn build_router(&self) -> Result<Router> {
        let mut router = Router::with_default_route(self.default_route());

        for route in &self.routes {
            let pattern = RoutePattern::compile(&route.pattern)
                .with_context(|| format!("Invalid pattern for route '{}'", route.name))?;
            router
                .add_route(route.name.clone(), pattern, route.target.clone())
                .with_context(|| format!("Failed to register route '{}'", route.name))?;
        }

        tracing::info!(routes = router.len(), app = %self.app.name, "route table built");
        Ok(router)
    }
}
