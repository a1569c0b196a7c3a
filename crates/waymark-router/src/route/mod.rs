//! Route module
//!
//! - [`pattern`]: explicit templates like `blog/:id`, compiled once and matched by position
//! - [`default`]: the positional controller/action convention used when nothing matches
//!
//! Both are pure: same input, same output, no shared state.

pub mod default;
pub mod pattern;

// Re-export commonly used types
pub use default::{DefaultRoute, DEFAULT_ACTION, DEFAULT_CONTROLLER};
pub use pattern::{classify_segment, RoutePattern, Segment};
