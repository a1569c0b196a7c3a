//! Pattern compilation and matching for explicit routes
//!
//! A template like `blog/:id` compiles into positional segments: literal text
//! that must match exactly, or named variables that capture one path component.
//! Compilation happens once at startup; matching is a **pure** walk over tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::path::{path_tokens, trim_path};
use crate::Params;

/// One `/`-delimited component of a route template
///
/// # Examples
///
/// ```
/// use waymark_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("blog"), Segment::Literal("blog".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Variable("id".to_string()));
///
/// // A doubled colon is not a variable; the token is kept verbatim
/// assert_eq!(classify_segment("::id"), Segment::Literal("::id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed text, compared case-sensitively
    Literal(String),
    /// Named capture slot
    Variable(String),
}

impl Segment {
    /// Returns the variable name if this segment captures
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Variable(name) => write!(f, ":{}", name),
        }
    }
}

/// Classifies a template token (pure function)
///
/// A token starting with exactly one `:` is a variable named by the rest of
/// the token. Everything else, `::name` included, is literal.
pub fn classify_segment(token: &str) -> Segment {
    match token.strip_prefix(':') {
        Some(name) if !name.starts_with(':') => Segment::Variable(name.to_string()),
        _ => Segment::Literal(token.to_string()),
    }
}

/// A compiled route template
///
/// # Examples
///
/// ```
/// use waymark_router::RoutePattern;
///
/// let pattern = RoutePattern::compile("/blog/:id").unwrap();
///
/// let params = pattern.matches("/blog/42").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
///
/// assert!(pattern.matches("/Blog/42").is_none());
/// assert!(pattern.matches("/blog/42/extra").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compiles a template into segments
    ///
    /// Leading/trailing `/` and whitespace are trimmed before splitting.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] if nothing remains after trimming.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let trimmed = trim_path(template);
        if trimmed.is_empty() {
            return Err(PatternError::Empty {
                template: template.to_string(),
            });
        }

        let segments = trimmed.split('/').map(classify_segment).collect();

        Ok(Self {
            template: trimmed.to_string(),
            segments,
        })
    }

    /// The trimmed template this pattern was compiled from
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Variable names in positional order (duplicates included)
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::variable_name)
    }

    /// Matches a path against this pattern
    ///
    /// Walks the path tokens by index against the segment at the same index.
    /// Returns `None` as soon as a path token has no segment or a literal
    /// differs. A path shorter than the pattern still matches once all of its
    /// tokens have been checked; trailing pattern segments are left unused.
    ///
    /// Repeated variable names keep the value captured last.
    pub fn matches(&self, path: &str) -> Option<Params> {
        path_tokens(path)
            .into_iter()
            .enumerate()
            .try_fold(Params::new(), |mut captured, (pos, token)| {
                match self.segments.get(pos)? {
                    Segment::Literal(text) if text != token => None,
                    Segment::Literal(_) => Some(captured),
                    Segment::Variable(name) => {
                        captured.insert(name.clone(), token.to_string());
                        Some(captured)
                    }
                }
            })
    }
}

impl FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Self::compile(template)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
