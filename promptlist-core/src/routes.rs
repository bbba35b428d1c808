//! Route-prefix matching for the injection loop.

/// True when `path` starts with any of the recognized prefixes. The
/// prefixes are a host-page contract carried in [`crate::Settings`], not
/// something this crate fixes.
pub fn route_matches(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| path.starts_with(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        vec!["/chat/".into(), "/c/".into(), "/project/".into()]
    }

    #[test]
    fn test_matches_known_prefixes() {
        assert!(route_matches("/chat/abc-123", &prefixes()));
        assert!(route_matches("/c/xyz", &prefixes()));
        assert!(route_matches("/project/9/file", &prefixes()));
    }

    #[test]
    fn test_rejects_other_paths() {
        assert!(!route_matches("/", &prefixes()));
        assert!(!route_matches("/settings", &prefixes()));
        assert!(!route_matches("/chat", &prefixes())); // no trailing slash
    }

    #[test]
    fn test_empty_prefix_set_matches_nothing() {
        assert!(!route_matches("/chat/abc", &[]));
    }
}
