use std::path::Path;

/// Load environment variables from `.env` files
///
/// Precedence (later overrides earlier):
/// 1. `.env` (base defaults)
/// 2. `.env.local` (local overrides, not committed)
/// 3. Actual system environment variables (highest priority)
pub fn load_dotenv(project_root: &Path) {
    // Load in REVERSE order of precedence because dotenvy doesn't overwrite
    // existing vars, so the most specific file has to go first.
    let _ = dotenvy::from_path(project_root.join(".env.local"));
    let _ = dotenvy::from_path(project_root.join(".env"));
}

/// Get an environment variable with a default value
///
/// # Example
/// ```
/// use homepage::config::env;
///
/// let port: u16 = env("SERVER_PORT", 8000);
/// let host = env("SERVER_HOST", "127.0.0.1".to_string());
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get an optional environment variable
///
/// # Example
/// ```
/// use homepage::config::env_optional;
///
/// let width: Option<u32> = env_optional("VIEWPORT_WIDTH");
/// ```
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_returns_default_when_unset() {
        let port: u16 = env("HOMEPAGE_TEST_UNSET_PORT", 8123);
        assert_eq!(port, 8123);
    }

    #[test]
    fn test_env_parses_set_value() {
        std::env::set_var("HOMEPAGE_TEST_SET_WIDTH", "640");
        let width: u32 = env("HOMEPAGE_TEST_SET_WIDTH", 1280);
        assert_eq!(width, 640);
        std::env::remove_var("HOMEPAGE_TEST_SET_WIDTH");
    }

    #[test]
    fn test_env_optional_absent() {
        let missing: Option<u32> = env_optional("HOMEPAGE_TEST_NEVER_SET");
        assert_eq!(missing, None);
    }
}
