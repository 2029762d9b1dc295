//! Base endpoint configuration.

/// Default development endpoint when no override is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Resolve the backend base URL.
///
/// Reads the compile-time `API_URL` environment variable, falling back to the
/// local development endpoint. A trailing slash is stripped so path joins stay
/// predictable.
pub fn base_url() -> String {
    option_env!("API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
        assert!(base_url().starts_with("http"));
    }
}
