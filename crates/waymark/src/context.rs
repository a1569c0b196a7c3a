// File: src/context.rs
// Purpose: Per-request state handed to controller actions

use waymark_router::{QueryParams, ResolvedRequest};

/// Request context passed to actions
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request path, query string removed
    pub path: String,

    /// Routing outcome for `path`
    pub request: ResolvedRequest,

    /// Query parameters, with route params merged in when enabled
    pub query: QueryParams,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(path: impl Into<String>, request: ResolvedRequest, query: QueryParams) -> Self {
        Self {
            path: path.into(),
            request,
            query,
        }
    }

    pub fn controller(&self) -> &str {
        &self.request.controller
    }

    pub fn action(&self) -> &str {
        &self.request.action
    }

    /// Looks a parameter up in the query store, then in the route params
    ///
    /// With merging enabled both agree; without it route params are only
    /// reachable through this fallback.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .or_else(|| self.request.params.get(name))
            .map(String::as_str)
    }

    /// Get a parameter as a specific type
    pub fn param_as<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.param(name)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_router::Params;

    fn context() -> RequestContext {
        let request = ResolvedRequest {
            controller: "Blog".to_string(),
            action: "view".to_string(),
            params: Params::from([
                ("id".to_string(), "42".to_string()),
                ("slug".to_string(), "hello".to_string()),
            ]),
        };
        RequestContext::new(
            "/blog/42",
            request,
            QueryParams::from_query_string("id=7&page=2"),
        )
    }

    #[test]
    fn test_param_prefers_query_store() {
        let ctx = context();
        assert_eq!(ctx.param("id"), Some("7"));
        assert_eq!(ctx.param("slug"), Some("hello"));
        assert_eq!(ctx.param("page"), Some("2"));
        assert_eq!(ctx.param("missing"), None);
    }

    #[test]
    fn test_param_as() {
        let ctx = context();
        assert_eq!(ctx.param_as::<u32>("page"), Some(2));
        assert_eq!(ctx.param_as::<u32>("slug"), None);
    }

    #[test]
    fn test_accessors() {
        let ctx = context();
        assert_eq!(ctx.controller(), "Blog");
        assert_eq!(ctx.action(), "view");
        assert_eq!(ctx.path, "/blog/42");
    }
}
