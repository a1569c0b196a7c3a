// File: src/dispatcher.rs
// Purpose: Route a request path and run the controller action it names

use std::collections::HashMap;

use thiserror::Error;
use waymark_router::naming::normalize_controller;
use waymark_router::path::strip_query;
use waymark_router::{QueryParams, Router};

use crate::config::Config;
use crate::context::RequestContext;
use crate::controller::{Controller, Response};

/// Why a request could not be dispatched
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no controller named '{controller}'")]
    ControllerNotFound { controller: String },

    #[error("controller '{controller}' has no action '{action}'")]
    ActionNotFound { controller: String, action: String },

    /// The action or its controller's init hook failed
    #[error("{controller}::{action} failed")]
    Action {
        controller: String,
        action: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Connects a router to registered controllers
///
/// # Examples
///
/// ```
/// use waymark::{Controller, Dispatcher, Response};
/// use waymark_router::{QueryParams, Router};
///
/// let mut dispatcher = Dispatcher::new(Router::new());
/// dispatcher.register(
///     Controller::new("blog").action("view", |ctx| {
///         Ok(Response::content(format!("post {}", ctx.param("id").unwrap_or("?"))))
///     }),
/// );
///
/// let response = dispatcher.dispatch("/blog/view/id/7", QueryParams::default()).unwrap();
/// assert_eq!(response, Response::content("post 7"));
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    router: Router,
    controllers: HashMap<String, Controller>,
    merge_params: bool,
}

impl Dispatcher {
    /// Creates a dispatcher that merges route params into the query store
    pub fn new(router: Router) -> Self {
        Self {
            router,
            controllers: HashMap::new(),
            merge_params: true,
        }
    }

    /// Builds the route table from config and applies `[routing]` options
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let router = config.build_router()?;
        Ok(Self::new(router).with_merge_params(config.routing.merge_params))
    }

    pub fn with_merge_params(mut self, merge_params: bool) -> Self {
        self.merge_params = merge_params;
        self
    }

    /// Registers a controller, replacing any with the same name
    pub fn register(&mut self, controller: Controller) -> &mut Self {
        tracing::debug!(controller = controller.name(), actions = ?controller.actions(), "registered controller");
        self.controllers
            .insert(controller.name().to_string(), controller);
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn controller(&self, name: &str) -> Option<&Controller> {
        self.controllers.get(&normalize_controller(name))
    }

    /// Resolves `uri` and prepares the context an action would receive
    ///
    /// Anything after `?` or `#` in `uri` is ignored for routing.
    pub fn prepare(&self, uri: &str, mut query: QueryParams) -> RequestContext {
        let path = strip_query(uri);
        let request = self.router.resolve(path);

        if self.merge_params && !request.params.is_empty() {
            request.merge_into(&mut query);
        }

        RequestContext::new(path, request, query)
    }

    /// Routes `uri` and runs the resulting action
    ///
    /// Controller names from explicit routes are looked up case-insensitively
    /// in the same normalized form the fallback convention produces.
    pub fn dispatch(&self, uri: &str, query: QueryParams) -> Result<Response, DispatchError> {
        let mut ctx = self.prepare(uri, query);
        let controller_name = ctx.controller().to_string();
        let action_name = ctx.action().to_string();

        let controller = self.controller(&controller_name).ok_or_else(|| {
            tracing::warn!(controller = %controller_name, path = %ctx.path, "controller not found");
            DispatchError::ControllerNotFound {
                controller: controller_name.clone(),
            }
        })?;

        let action = controller.get_action(&action_name).ok_or_else(|| {
            tracing::warn!(controller = %controller_name, action = %action_name, "action not found");
            DispatchError::ActionNotFound {
                controller: controller_name.clone(),
                action: action_name.clone(),
            }
        })?;

        let failed = |source: anyhow::Error| DispatchError::Action {
            controller: controller_name.clone(),
            action: action_name.clone(),
            source,
        };

        if let Some(init) = controller.init_hook() {
            init(&mut ctx).map_err(failed)?;
        }

        tracing::debug!(controller = %controller_name, action = %action_name, "dispatching");
        action(&mut ctx).map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_router::RouteTarget;

    fn dispatcher() -> Dispatcher {
        let router = Router::new()
            .with_route(
                "post",
                "post/:id",
                RouteTarget::new().controller("Blog").action("view"),
            )
            .unwrap();
        let mut dispatcher = Dispatcher::new(router);
        dispatcher.register(
            Controller::new("blog")
                .action("view", |ctx| {
                    Ok(Response::content(format!(
                        "post {} page {}",
                        ctx.param("id").unwrap_or("-"),
                        ctx.param("page").unwrap_or("-")
                    )))
                })
                .action("fail", |_| Err(anyhow::anyhow!("boom"))),
        );
        dispatcher
    }

    #[test]
    fn test_prepare_merges_params() {
        let ctx = dispatcher().prepare("/post/5?ignored=1", QueryParams::from_query_string("id=1"));
        assert_eq!(ctx.path, "/post/5");
        assert_eq!(ctx.query.get("id"), Some(&"5".to_string()));
    }

    #[test]
    fn test_prepare_without_merge() {
        let dispatcher = dispatcher().with_merge_params(false);
        let ctx = dispatcher.prepare("/post/5", QueryParams::from_query_string("id=1"));
        assert_eq!(ctx.query.get("id"), Some(&"1".to_string()));
        assert_eq!(ctx.request.params.get("id"), Some(&"5".to_string()));
    }

    #[test]
    fn test_dispatch_explicit_route() {
        let response = dispatcher()
            .dispatch("/post/5", QueryParams::from_query_string("page=3"))
            .unwrap();
        assert_eq!(response, Response::content("post 5 page 3"));
    }

    #[test]
    fn test_dispatch_controller_not_found() {
        let err = dispatcher()
            .dispatch("/shop", QueryParams::default())
            .unwrap_err();
        assert!(matches!(err, DispatchError::ControllerNotFound { ref controller } if controller == "Shop"));
    }

    #[test]
    fn test_dispatch_action_not_found() {
        let err = dispatcher()
            .dispatch("/blog/delete", QueryParams::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "controller 'Blog' has no action 'delete'");
    }

    #[test]
    fn test_dispatch_action_error_keeps_source() {
        let err = dispatcher()
            .dispatch("/blog/fail", QueryParams::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Blog::fail failed");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("boom"));
    }
}
