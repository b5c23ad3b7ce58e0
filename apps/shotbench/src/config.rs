use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_LABEL_MAX_TOKENS: u32 = 6;
pub const DEFAULT_SHOWCASE_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_CALL_DELAY_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;
pub const DEFAULT_CHART_PATH: &str = "shot_comparison.svg";

/// Runtime configuration loaded from environment variables.
/// Fails before any API call if the credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub label_max_tokens: u32,
    pub showcase_max_tokens: u32,
    pub call_delay: Duration,
    pub request_timeout: Duration,
    /// Attempts per external call, including the first one. 1 = no retry.
    pub max_attempts: u32,
    pub chart_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_api_key = lookup("GROQ_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Config("Required environment variable 'GROQ_API_KEY' is not set".into())
            })?;

        let config = Config {
            groq_api_key,
            base_url: lookup("GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: lookup("SHOTBENCH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: parse_or(&lookup, "SHOTBENCH_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            label_max_tokens: parse_or(
                &lookup,
                "SHOTBENCH_LABEL_MAX_TOKENS",
                DEFAULT_LABEL_MAX_TOKENS,
            )?,
            showcase_max_tokens: parse_or(
                &lookup,
                "SHOTBENCH_SHOWCASE_MAX_TOKENS",
                DEFAULT_SHOWCASE_MAX_TOKENS,
            )?,
            call_delay: Duration::from_millis(parse_or(
                &lookup,
                "SHOTBENCH_CALL_DELAY_MS",
                DEFAULT_CALL_DELAY_MS,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SHOTBENCH_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            max_attempts: parse_or(&lookup, "SHOTBENCH_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            chart_path: lookup("SHOTBENCH_CHART_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_PATH)),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks ranges that parsing alone cannot express. Re-run after CLI overrides.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_attempts == 0 {
            return Err(AppError::Config("SHOTBENCH_MAX_ATTEMPTS must be at least 1".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::Config("SHOTBENCH_TIMEOUT_SECS must be at least 1".into()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Config("model name must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::Config(format!("Environment variable '{key}' has invalid value '{raw}'"))
        }),
        None => Ok(default),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("GROQ_API_KEY")));
    }

    #[test]
    fn test_blank_api_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.groq_api_key, "gsk_test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.label_max_tokens, 6);
        assert_eq!(config.showcase_max_tokens, 1000);
        assert_eq!(config.call_delay, Duration::from_millis(300));
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.chart_path, PathBuf::from(DEFAULT_CHART_PATH));
    }

    #[test]
    fn test_overrides_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "k"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1/"),
            ("SHOTBENCH_MODEL", "llama-3.3-70b-versatile"),
            ("SHOTBENCH_TEMPERATURE", "0"),
            ("SHOTBENCH_CALL_DELAY_MS", "0"),
            ("SHOTBENCH_MAX_ATTEMPTS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.temperature, 0.0);
        assert!(config.call_delay.is_zero());
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_invalid_number_names_variable() {
        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "k"),
            ("SHOTBENCH_CALL_DELAY_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("SHOTBENCH_CALL_DELAY_MS")));
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "k"),
            ("SHOTBENCH_TEMPERATURE", "3.5"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "k"),
            ("SHOTBENCH_MAX_ATTEMPTS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
