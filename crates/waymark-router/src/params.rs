//! Query-parameter store
//!
//! Handlers read route params and query-string params from one place. Routing
//! itself never touches this store; merging resolved params into it is an
//! explicit step ([`QueryParams::merge_route_params`]).

use std::borrow::Cow;

use serde::Serialize;

use crate::Params;

/// Key/value store for request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
    params: Params,
}

impl QueryParams {
    /// Create from HashMap
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Parses a query string like `page=2&sort=date`
    ///
    /// A leading `?` is ignored, `+` decodes to a space and keys without `=`
    /// get an empty value. Later duplicates overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::QueryParams;
    ///
    /// let query = QueryParams::from_query_string("?q=hello+world&page=2&flag");
    /// assert_eq!(query.get("q"), Some(&"hello world".to_string()));
    /// assert_eq!(query.get_as::<u32>("page"), Some(2));
    /// assert!(query.has("flag"));
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let params = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { params }
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter as a specific type
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.params.get(key)?.parse().ok()
    }

    /// Check if a parameter exists
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Store a value, returning the one it replaced
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Get all parameter names
    pub fn keys(&self) -> Vec<&String> {
        self.params.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get as HashMap
    pub fn as_map(&self) -> &Params {
        &self.params
    }

    /// Merges params produced by routing into this store
    ///
    /// Route values overwrite existing entries with the same name; entries the
    /// route did not produce are left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_router::{Params, QueryParams};
    ///
    /// let mut query = QueryParams::from_query_string("id=1&page=2");
    /// query.merge_route_params(&Params::from([("id".to_string(), "42".to_string())]));
    ///
    /// assert_eq!(query.get("id"), Some(&"42".to_string()));
    /// assert_eq!(query.get("page"), Some(&"2".to_string()));
    /// ```
    pub fn merge_route_params(&mut self, route_params: &Params) {
        self.params.extend(
            route_params
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
}

impl From<Params> for QueryParams {
    fn from(params: Params) -> Self {
        Self::new(params)
    }
}

/// Percent-decodes one query component, keeping the raw text if it is not UTF-8
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or(spaced)
}
