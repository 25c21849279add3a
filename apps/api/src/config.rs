use anyhow::{Context, Result};

const DEFAULT_DATABASE_NAME: &str = "personality_assessment";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub mistral_api_key: String,
    pub host: String,
    pub port: u16,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            mistral_api_key: require("MISTRAL_API_KEY")?,
            host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("SERVER_PORT must be a valid port number")?,
            llm_timeout_secs: lookup("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost:5432"),
            ("MISTRAL_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.database_name, "personality_assessment");
        assert_eq!(config.port, 8000);
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_api_key_is_error() {
        let err = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost:5432",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("MISTRAL_API_KEY"));
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost:5432"),
            ("MISTRAL_API_KEY", "secret"),
            ("SERVER_PORT", "eighty"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db:5432"),
            ("DATABASE_NAME", "survey"),
            ("MISTRAL_API_KEY", "secret"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9100"),
        ]))
        .unwrap();
        assert_eq!(config.database_name, "survey");
        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    }
}
