// src/utils.rs
use gloo_utils::window;

const PAGES_BASE: &str = "/map-feature-tooltip";

/// Get the base URL for the application
/// This handles both local development and GitHub Pages deployment
pub fn get_base_url() -> String {
    if let Ok(location) = window().location().pathname() {
        if location.starts_with(&format!("{}/", PAGES_BASE)) {
            return PAGES_BASE.to_string();
        }
    }
    // Local development - no base path needed
    String::new()
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    join_base(&get_base_url(), path)
}

pub fn join_base(base: &str, path: &str) -> String {
    let clean_path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), clean_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base_local() {
        assert_eq!(join_base("", "/public/tooltip.json"), "/public/tooltip.json");
        assert_eq!(join_base("", "public/tooltip.json"), "/public/tooltip.json");
    }

    #[test]
    fn test_join_base_pages() {
        assert_eq!(
            join_base(PAGES_BASE, "public/features/parks/7.json"),
            "/map-feature-tooltip/public/features/parks/7.json"
        );
        assert_eq!(join_base("/base/", "/x"), "/base/x");
    }
}
