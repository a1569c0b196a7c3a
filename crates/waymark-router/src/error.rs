//! Route table construction errors
//!
//! Both errors describe a broken route table and surface at startup. A path
//! that no pattern matches is not an error: matching returns `None` and
//! resolution falls back to the default route.

use thiserror::Error;

/// Error compiling a route template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Template has no segments once `/` and whitespace are trimmed
    #[error("route template {template:?} is empty; a pattern needs at least one segment")]
    Empty { template: String },
}

/// Error registering a route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A route with this name is already registered
    #[error("route already exists with name '{name}'")]
    DuplicateRoute { name: String },
}
