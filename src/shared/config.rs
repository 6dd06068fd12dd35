//! Application configuration. Model credentials, endpoint, weather context.

use crate::adapters::ai::gemini_adapter::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::domain::WeatherData;
use serde::Deserialize;

/// Default per-request timeout for the model service.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Model service
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from IXORA_AI_API_KEY (or GEMINI_API_KEY).
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// API root. Defaults to the public Generative Language endpoint. Read from IXORA_AI_API_BASE.
    #[serde(default)]
    pub ai_api_base: Option<String>,

    /// Model name. Defaults to "gemini-2.5-flash". Read from IXORA_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Per-request timeout in seconds (default 60). Read from IXORA_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Weather context for the daily outfit
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub weather_location: Option<String>,

    /// Degrees Celsius.
    #[serde(default)]
    pub weather_temp: Option<f64>,

    #[serde(default)]
    pub weather_condition: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("IXORA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("IXORA").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the API key from config, or GEMINI_API_KEY. Blank keys count as unset.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn ai_api_base_or_default(&self) -> String {
        self.ai_api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns true if the model service is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Weather used for the daily outfit. Falls back to a mild New York day.
    pub fn weather(&self) -> WeatherData {
        WeatherData {
            temp: self.weather_temp.unwrap_or(18.0),
            condition: self
                .weather_condition
                .clone()
                .unwrap_or_else(|| "Partly Cloudy".to_string()),
            location: self
                .weather_location
                .clone()
                .unwrap_or_else(|| "New York".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ai_model_or_default(), "gemini-2.5-flash");
        assert_eq!(
            cfg.ai_api_base_or_default(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(cfg.request_timeout_secs_or_default(), 60);

        let weather = cfg.weather();
        assert_eq!(weather.location, "New York");
        assert_eq!(weather.condition, "Partly Cloudy");
    }

    #[test]
    fn test_blank_key_is_unset() {
        let cfg = AppConfig {
            ai_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(cfg.ai_api_key().is_none());
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let cfg = AppConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.request_timeout_secs_or_default(), 60);
    }

    #[test]
    fn test_deserializes_from_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("ai_model", "gemini-2.5-pro")
            .unwrap()
            .set_override("weather_temp", 7.5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.ai_model_or_default(), "gemini-2.5-pro");
        assert_eq!(cfg.weather().temp, 7.5);
    }
}
