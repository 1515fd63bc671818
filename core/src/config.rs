//! Client configuration, injected at construction.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url));
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(ClientConfig::new("http://localhost:5000").is_ok());
        assert!(ClientConfig::new("https://todos.example.com/api").is_ok());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let config = ClientConfig::new("  http://localhost:5000 \n").unwrap();
        assert_eq!(config.base_url(), "http://localhost:5000");
    }

    #[test]
    fn rejects_empty_and_other_schemes() {
        assert_eq!(ClientConfig::new("  "), Err(ConfigError::EmptyBaseUrl));
        assert!(matches!(
            ClientConfig::new("localhost:5000"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://host"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
