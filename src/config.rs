use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const UI_LANGUAGES: &[&str] = &["en", "tr"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: u32,
    #[serde(default = "default_quote_api_url")]
    pub quote_api_url: String,
    #[serde(default = "default_quote_batch_size")]
    pub quote_batch_size: usize,
    #[serde(default = "default_quote_min_length")]
    pub quote_min_length: u32,
    #[serde(default = "default_quote_max_length")]
    pub quote_max_length: u32,
    #[serde(default = "default_review_check_secs")]
    pub review_check_secs: u64,
    #[serde(default = "default_speech_enabled")]
    pub speech_enabled: bool,
    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_language() -> String {
    "tr".to_string()
}
fn default_monthly_goal() -> u32 {
    50
}
fn default_quote_api_url() -> String {
    "https://api.quotable.io".to_string()
}
fn default_quote_batch_size() -> usize {
    10
}
fn default_quote_min_length() -> u32 {
    30
}
fn default_quote_max_length() -> u32 {
    120
}
fn default_review_check_secs() -> u64 {
    10
}
fn default_speech_enabled() -> bool {
    true
}
fn default_speech_rate() -> f32 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            monthly_goal: default_monthly_goal(),
            quote_api_url: default_quote_api_url(),
            quote_batch_size: default_quote_batch_size(),
            quote_min_length: default_quote_min_length(),
            quote_max_length: default_quote_max_length(),
            review_check_secs: default_review_check_secs(),
            speech_enabled: default_speech_enabled(),
            speech_rate: default_speech_rate(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kelime")
            .join("config.toml")
    }

    /// Clamp hand-edited values into workable ranges. Call after load so a
    /// stale or mistyped config never wedges the session.
    pub fn validate(&mut self) {
        if !UI_LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }
        self.monthly_goal = self.monthly_goal.clamp(1, 1000);
        self.quote_batch_size = self.quote_batch_size.clamp(1, 50);
        if self.quote_min_length > self.quote_max_length {
            self.quote_min_length = default_quote_min_length();
            self.quote_max_length = default_quote_max_length();
        }
        self.review_check_secs = self.review_check_secs.clamp(1, 3600);
        self.speech_rate = self.speech_rate.clamp(0.2, 2.0);
        if self.quote_api_url.is_empty() {
            self.quote_api_url = default_quote_api_url();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        // Simulates loading an old config file with no fields at all
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.monthly_goal, 50);
        assert_eq!(config.quote_batch_size, 10);
        assert_eq!(config.review_check_secs, 10);
        assert!(config.speech_enabled);
    }

    #[test]
    fn test_config_serde_defaults_from_partial() {
        let toml_str = r#"
theme = "terminal-default"
monthly_goal = 80
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.monthly_goal, 80);
        // Missing fields fall back to defaults
        assert_eq!(config.language, "tr");
        assert_eq!(config.quote_min_length, 30);
        assert_eq!(config.quote_max_length, 120);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.quote_api_url, deserialized.quote_api_url);
        assert_eq!(config.monthly_goal, deserialized.monthly_goal);
        assert_eq!(config.review_check_secs, deserialized.review_check_secs);
    }

    #[test]
    fn test_validate_clamps_values() {
        let mut config = Config::default();
        config.monthly_goal = 0;
        config.quote_batch_size = 500;
        config.review_check_secs = 0;
        config.speech_rate = 9.0;
        config.validate();
        assert_eq!(config.monthly_goal, 1);
        assert_eq!(config.quote_batch_size, 50);
        assert_eq!(config.review_check_secs, 1);
        assert_eq!(config.speech_rate, 2.0);
    }

    #[test]
    fn test_validate_resets_unknown_language() {
        let mut config = Config::default();
        config.language = "de".to_string();
        config.validate();
        assert_eq!(config.language, "tr");
    }

    #[test]
    fn test_validate_fixes_inverted_length_bounds() {
        let mut config = Config::default();
        config.quote_min_length = 200;
        config.quote_max_length = 100;
        config.validate();
        assert_eq!(config.quote_min_length, 30);
        assert_eq!(config.quote_max_length, 120);
    }
}
