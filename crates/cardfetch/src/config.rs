use crate::prelude::*;
use cardfetch_core::query::{Endpoints, DEFAULT_BASE_URL};

/// Upstream configuration from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Uses SCRYFALL_BASE_URL with the public API as fallback.
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            std::env::var("SCRYFALL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(f!(
                "base URL must start with http:// or https://, got {base_url:?}"
            )));
        }
        Ok(Self { base_url })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(self, base_url: Option<String>) -> Result<Self, Error> {
        match base_url {
            Some(url) => Self::new(url),
            None => Ok(self),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::from_base(&self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_url() {
        let result = Config::new("ftp://example.com");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_with_overrides_replaces_base_url() {
        let config = Config::default()
            .with_overrides(Some("http://127.0.0.1:9999".to_string()))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(
            config.endpoints().search,
            "http://127.0.0.1:9999/cards/search"
        );
    }

    #[test]
    fn test_with_overrides_none_keeps_config() {
        let config = Config::default().with_overrides(None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_overrides_validates() {
        let result = Config::default().with_overrides(Some("localhost".to_string()));
        assert!(result.is_err());
    }
}
