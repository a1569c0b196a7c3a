// Waymark - controller/action dispatch
// Routes request paths with waymark-router and runs the matching controller action

pub mod config;
pub mod context;
pub mod controller;
pub mod dispatcher;

// Re-export framework types
pub use config::{AppConfig, Config, RouteConfig, RoutingConfig};
pub use context::RequestContext;
pub use controller::{ActionFn, Controller, InitFn, Response};
pub use dispatcher::{DispatchError, Dispatcher};

// Re-export the routing core
pub use waymark_router as router;
pub use waymark_router::{QueryParams, ResolvedRequest, RouteTarget, Router};
