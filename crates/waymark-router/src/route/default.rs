//! Positional fallback routing
//!
//! When no explicit pattern matches, a path is read by convention:
//!
//! | parts | controller | action   | params                       |
//! |-------|------------|----------|------------------------------|
//! | 0     | default    | default  | -                            |
//! | 1     | `parts[0]` | default  | -                            |
//! | 2     | `parts[0]` | `parts[1]` | -                          |
//! | 3     | `parts[0]` | default  | `parts[1] = parts[2]`        |
//! | 4+    | `parts[0]` | `parts[1]` when the part count is even, else default | remaining pairs |

use crate::naming::{normalize_action, normalize_controller};
use crate::path::split_path;
use crate::{Params, ResolvedRequest};

/// Controller used when a path names none
pub const DEFAULT_CONTROLLER: &str = "Index";

/// Action used when a path names none
pub const DEFAULT_ACTION: &str = "index";

/// Convention-based parser for paths that match no explicit route
///
/// # Examples
///
/// ```
/// use waymark_router::DefaultRoute;
///
/// let request = DefaultRoute::default().parse("/blog/id/5");
/// assert_eq!(request.controller, "Blog");
/// assert_eq!(request.action, "index");
/// assert_eq!(request.params.get("id"), Some(&"5".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRoute {
    controller: String,
    action: String,
}

impl DefaultRoute {
    /// Creates a parser with custom default names
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn default_controller(&self) -> &str {
        &self.controller
    }

    pub fn default_action(&self) -> &str {
        &self.action
    }

    /// Parses a path into controller, action and params
    ///
    /// Never fails: every input, the empty string included, produces a request.
    /// The controller is capitalized, the action lowercased; params are verbatim.
    pub fn parse(&self, path: &str) -> ResolvedRequest {
        let parts = split_path(path);

        let (controller, action, params) = match parts.as_slice() {
            [] => (self.controller.as_str(), self.action.as_str(), Params::new()),
            [controller] => (*controller, self.action.as_str(), Params::new()),
            [controller, action] => (*controller, *action, Params::new()),
            [controller, key, value] => (
                *controller,
                self.action.as_str(),
                Params::from([(key.to_string(), value.to_string())]),
            ),
            [controller, rest @ ..] => {
                let (action, rest) = match rest {
                    [action, tail @ ..] if parts.len() % 2 == 0 => (*action, tail),
                    _ => (self.action.as_str(), rest),
                };
                (*controller, action, pair_params(rest))
            }
        };

        ResolvedRequest {
            controller: normalize_controller(controller),
            action: normalize_action(action),
            params,
        }
    }
}

impl Default for DefaultRoute {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLLER, DEFAULT_ACTION)
    }
}

/// Folds parts into `key = value` pairs, left to right
///
/// An odd part out at the end becomes both key and value.
fn pair_params(parts: &[&str]) -> Params {
    parts
        .chunks(2)
        .map(|pair| (pair[0].to_string(), pair[pair.len() - 1].to_string()))
        .collect()
}
