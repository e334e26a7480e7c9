use crate::errors::AppError;
use crate::llm_client;

/// Runtime configuration loaded from environment variables.
/// The credential check happens here, before any client is built or any
/// stage runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub model: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            AppError::MissingCredential(
                "ANTHROPIC_API_KEY is not set. Export it or add it to a .env file.".to_string(),
            )
        })?;

        Ok(Config {
            anthropic_api_key,
            model: std::env::var("CLAUDE_MODEL")
                .unwrap_or_else(|_| llm_client::DEFAULT_MODEL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_missing_api_key_is_a_credential_error() {
        std::env::remove_var("ANTHROPIC_API_KEY");
        let result = Config::from_env();
        assert!(matches!(result, Err(AppError::MissingCredential(_))));
    }

    #[test]
    #[serial]
    fn test_model_falls_back_to_default() {
        std::env::set_var("ANTHROPIC_API_KEY", "test-key");
        std::env::remove_var("CLAUDE_MODEL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.model, llm_client::DEFAULT_MODEL);
        std::env::remove_var("ANTHROPIC_API_KEY");
    }
}
