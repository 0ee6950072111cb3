//! API Configuration
//!
//! The backend URL is fixed at build time (`DM_API_URL=... trunk build`).

/// Used when `DM_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { base_url: base_url.to_string() }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("DM_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Absolute URL for an API path such as `/api/dm/generate`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.endpoint("/api/dm/generate"), "https://api.example.com/api/dm/generate");
        assert_eq!(config.endpoint("api/dm/generate/stream"), "https://api.example.com/api/dm/generate/stream");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url, DEFAULT_API_URL);
    }
}
