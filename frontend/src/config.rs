//! Runtime configuration.
//!
//! The backend origin can be baked in at compile time via the
//! `CANCERGUARD_API_URL` environment variable; otherwise the local
//! development default applies. All routes live under `/api/v1`.

use cancerguard_shared::API_PREFIX;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Versioned API base, e.g. `http://localhost:8000/api/v1`.
pub fn api_base_url() -> String {
    let origin = option_env!("CANCERGUARD_API_URL").unwrap_or(DEFAULT_API_URL);
    format!("{}{}", origin.trim_end_matches('/'), API_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_versioned() {
        assert!(api_base_url().ends_with("/api/v1"));
    }

    #[test]
    fn test_base_url_has_no_double_slash() {
        assert!(!api_base_url().contains("//api"));
    }
}
