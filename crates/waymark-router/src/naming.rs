//! Controller and action name normalization

/// Capitalizes the first character and lowercases the rest
///
/// # Examples
///
/// ```
/// use waymark_router::naming::normalize_controller;
///
/// assert_eq!(normalize_controller("blog"), "Blog");
/// assert_eq!(normalize_controller("BLOG"), "Blog");
/// assert_eq!(normalize_controller("blogPost"), "Blogpost");
/// ```
pub fn normalize_controller(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases an action name
pub fn normalize_action(name: &str) -> String {
    name.to_lowercase()
}
