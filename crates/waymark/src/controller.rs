// File: src/controller.rs
// Purpose: Controllers as named tables of action handlers

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use waymark_router::naming::{normalize_action, normalize_controller};

use crate::context::RequestContext;

/// Result of running an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Rendered body
    Content(String),
    /// Redirect to another location
    Redirect { location: String, status: u16 },
}

impl Response {
    pub fn content(body: impl Into<String>) -> Self {
        Response::Content(body.into())
    }

    /// Temporary redirect (302)
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::redirect_with_status(location, 302)
    }

    /// Redirect with an explicit status, kept as given
    pub fn redirect_with_status(location: impl Into<String>, status: u16) -> Self {
        let location = location.into();
        if !(300..400).contains(&status) {
            tracing::warn!(%location, status, "redirect with a non-3xx status");
        }
        Response::Redirect { location, status }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Response::Redirect { .. })
    }
}

/// Handler for one action
pub type ActionFn = Arc<dyn Fn(&mut RequestContext) -> Result<Response> + Send + Sync>;

/// Hook run before every action of a controller
pub type InitFn = Arc<dyn Fn(&mut RequestContext) -> Result<()> + Send + Sync>;

/// A named set of actions
///
/// Names are normalized the same way routing normalizes the fallback
/// convention: `blog` registers as `Blog`, `View` as `view`.
///
/// # Examples
///
/// ```
/// use waymark::{Controller, Response};
///
/// let blog = Controller::new("blog")
///     .action("index", |_ctx| Ok(Response::content("all posts")))
///     .action("view", |ctx| {
///         let id = ctx.param("id").unwrap_or("0").to_string();
///         Ok(Response::content(format!("post {}", id)))
///     });
///
/// assert_eq!(blog.name(), "Blog");
/// assert_eq!(blog.actions(), vec!["index", "view"]);
/// ```
#[derive(Clone)]
pub struct Controller {
    name: String,
    actions: HashMap<String, ActionFn>,
    init: Option<InitFn>,
}

impl Controller {
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_controller(name),
            actions: HashMap::new(),
            init: None,
        }
    }

    /// Registers an action, replacing any with the same name
    pub fn action<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&mut RequestContext) -> Result<Response> + Send + Sync + 'static,
    {
        self.actions.insert(normalize_action(name), Arc::new(handler));
        self
    }

    /// Sets the hook run before each action
    pub fn on_init<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut RequestContext) -> Result<()> + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(hook));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Action names, sorted
    pub fn actions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(&normalize_action(name))
    }

    pub(crate) fn get_action(&self, name: &str) -> Option<&ActionFn> {
        self.actions.get(&normalize_action(name))
    }

    pub(crate) fn init_hook(&self) -> Option<&InitFn> {
        self.init.as_ref()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("actions", &self.actions())
            .field("init", &self.init.is_some())
            .finish()
    }
}
