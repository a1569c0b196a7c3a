//! # Waymark Router
//!
//! Maps request paths to a controller, an action and a set of params:
//! - Explicit routes (`blog/:id`) tried in registration order, first match wins
//! - Named variables captured by position (`:id`)
//! - A positional fallback convention (`controller/action/key/value/...`)
//!   for every path no explicit route claims
//!
//! Resolution is total: every path, the empty one included, resolves to
//! something. Only building the route table can fail.
//!
//! ## Example
//!
//! ```
//! use waymark_router::{RoutePattern, RouteTarget, Router};
//!
//! let mut router = Router::new();
//! router
//!     .add_route(
//!         "article",
//!         RoutePattern::compile("articles/:slug").unwrap(),
//!         RouteTarget::new().controller("Blog").action("view"),
//!     )
//!     .unwrap();
//!
//! let request = router.resolve("/articles/hello-world");
//! assert_eq!(request.controller, "Blog");
//! assert_eq!(request.action, "view");
//! assert_eq!(request.params.get("slug"), Some(&"hello-world".to_string()));
//!
//! // Anything else falls back to the positional convention
//! let request = router.resolve("/users/edit/id/5");
//! assert_eq!(request.controller, "Users");
//! assert_eq!(request.action, "edit");
//! assert_eq!(request.params.get("id"), Some(&"5".to_string()));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod naming;
mod params;
pub mod path;
pub mod route;

pub use error::{PatternError, RouterError};
pub use params::QueryParams;
pub use route::default::{DefaultRoute, DEFAULT_ACTION, DEFAULT_CONTROLLER};
pub use route::pattern::{classify_segment, RoutePattern, Segment};

/// Captured or declared request parameters
pub type Params = HashMap<String, String>;

// ============================================================================
// Core Types
// ============================================================================

/// What a route resolves to when it matches
///
/// Missing names fall back to the router's defaults. Static params are
/// overridden by variables captured from the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTarget {
    pub controller: Option<String>,
    pub action: Option<String>,
    pub params: Params,
}

impl RouteTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Adds a static param delivered with every match
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A named pattern and the target it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: String,
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// Which explicit route matched a path, with the variables it captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub captured: Params,
}

/// The outcome of routing one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    pub controller: String,
    pub action: String,
    pub params: Params,
}

impl ResolvedRequest {
    /// Merges this request's params into a query store, route values winning
    pub fn merge_into(&self, query: &mut QueryParams) {
        query.merge_route_params(&self.params);
    }
}

// ============================================================================
// Router
// ============================================================================

/// Ordered route table with a positional fallback
///
/// Routes are registered once at startup through `&mut self` and only read
/// afterwards, so a built router can be shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Router {
    entries: Vec<RouteEntry>,
    fallback: DefaultRoute,
}

impl Router {
    /// Creates an empty router using the `Index`/`index` defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty router with a custom fallback
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{DefaultRoute, Router};
    ///
    /// let router = Router::with_default_route(DefaultRoute::new("Home", "show"));
    /// let request = router.resolve("/");
    /// assert_eq!(request.controller, "Home");
    /// assert_eq!(request.action, "show");
    /// ```
    pub fn with_default_route(fallback: DefaultRoute) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Registers a route after every route added before it
    ///
    /// # Errors
    ///
    /// [`RouterError::DuplicateRoute`] if `name` is taken; the table is left unchanged.
    pub fn add_route(
        &mut self,
        name: impl Into<String>,
        pattern: RoutePattern,
        target: RouteTarget,
    ) -> Result<(), RouterError> {
        let name = name.into();
        if self.get_route(&name).is_some() {
            return Err(RouterError::DuplicateRoute { name });
        }

        tracing::trace!(route = %name, pattern = %pattern, "registered route");
        self.entries.push(RouteEntry {
            name,
            pattern,
            target,
        });
        Ok(())
    }

    /// Compiles `template` and registers it (builder form)
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{RouteTarget, Router};
    ///
    /// let router = Router::new()
    ///     .with_route("home", "welcome", RouteTarget::new().controller("Home"))?
    ///     .with_route("post", "post/:id", RouteTarget::new().controller("Blog"))?;
    ///
    /// assert_eq!(router.len(), 2);
    /// # Ok::<(), waymark_router::RouterError>(())
    /// ```
    pub fn with_route(
        mut self,
        name: impl Into<String>,
        template: &str,
        target: RouteTarget,
    ) -> Result<Self, RouterError> {
        let pattern = RoutePattern::compile(template)?;
        self.add_route(name, pattern, target)?;
        Ok(self)
    }

    /// Finds the first registered route matching `path`
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.entries.iter().find_map(|entry| {
            let captured = entry.pattern.matches(path);
            if captured.is_none() {
                tracing::trace!(route = %entry.name, path, "route did not match");
            }
            captured.map(|captured| RouteMatch { entry, captured })
        })
    }

    /// Resolves a path to controller, action and params
    ///
    /// The first matching route wins; its target names (or the defaults) are
    /// used verbatim and captured variables overwrite same-named static params.
    /// With no match the fallback convention decides.
    pub fn resolve(&self, path: &str) -> ResolvedRequest {
        self.resolve_with_route(path).1
    }

    /// Like [`Router::resolve`], also returning the route that matched
    ///
    /// The entry is `None` when the fallback convention handled the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{RouteTarget, Router};
    ///
    /// let router = Router::new()
    ///     .with_route("post", "post/:id", RouteTarget::new().controller("Blog"))?;
    ///
    /// let (entry, request) = router.resolve_with_route("post/3");
    /// assert_eq!(entry.map(|e| e.name.as_str()), Some("post"));
    /// assert_eq!(request.params["id"], "3");
    ///
    /// let (entry, _) = router.resolve_with_route("users/list");
    /// assert!(entry.is_none());
    /// # Ok::<(), waymark_router::RouterError>(())
    /// ```
    pub fn resolve_with_route(&self, path: &str) -> (Option<&RouteEntry>, ResolvedRequest) {
        match self.match_route(path) {
            Some(RouteMatch { entry, captured }) => {
                tracing::debug!(route = %entry.name, path, "matched route");
                let target = &entry.target;

                let mut params = target.params.clone();
                params.extend(captured);

                let request = ResolvedRequest {
                    controller: target
                        .controller
                        .clone()
                        .unwrap_or_else(|| self.fallback.default_controller().to_string()),
                    action: target
                        .action
                        .clone()
                        .unwrap_or_else(|| self.fallback.default_action().to_string()),
                    params,
                };
                (Some(entry), request)
            }
            None => {
                tracing::debug!(path, "no route matched, using default route");
                (None, self.fallback.parse(path))
            }
        }
    }

    /// Looks up a route by name
    pub fn get_route(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Registered routes in match order
    pub fn routes(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn default_route(&self) -> &DefaultRoute {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
