use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub agent_timeout_seconds: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    /// Empty means any origin is accepted.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            agent_timeout_seconds: env::var("AGENT_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        }
    }

    /// Checks that the agent backend can actually be reached with this configuration.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY not found in environment variables".to_string(),
            ));
        }

        if self.agent_timeout_seconds == 0 {
            return Err(AppError::ValidationError(
                "AGENT_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            openai_model: "test-model".to_string(),
            agent_timeout_seconds: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            max_upload_bytes: 1024 * 1024,
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.openai_api_base.is_empty());
        assert!(!config.openai_model.is_empty());
        assert!(config.max_upload_bytes > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.openai_model, "test-model");
        assert_eq!(config.agent_timeout_seconds, 5);
        assert!(config.validate_for_production().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = Config {
            openai_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        let err = config.validate_for_production().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_parse_origins_skips_wildcard_and_blanks() {
        let origins = parse_origins("http://localhost:3000, ,*,https://cramplan.app");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://cramplan.app"]
        );
    }
}
