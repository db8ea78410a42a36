//! Configuration for the enrichment pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the enrichment pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Skip notes processed within this many days; unset processes everything
    #[serde(default)]
    pub skip_recent_days: Option<i64>,

    /// Maximum number of body characters embedded in the prompt
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
}

fn default_max_content_chars() -> usize {
    1500
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            skip_recent_days: None,
            max_content_chars: default_max_content_chars(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        if let Some(days) = self.skip_recent_days {
            if days <= 0 {
                return Err("skip_recent_days must be greater than 0".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_content_chars, 1500);
        assert_eq!(config.skip_recent_days, None);
    }

    #[test]
    fn test_invalid_max_content_chars() {
        let mut config = ExtractorConfig::default();
        config.max_content_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_skip_window() {
        let mut config = ExtractorConfig::default();
        config.skip_recent_days = Some(0);
        assert!(config.validate().is_err());
        config.skip_recent_days = Some(-3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ExtractorConfig::default();
        config.skip_recent_days = Some(7);

        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.skip_recent_days, parsed.skip_recent_days);
        assert_eq!(config.max_content_chars, parsed.max_content_chars);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("skip_recent_days = 3\n").unwrap();
        assert_eq!(parsed.skip_recent_days, Some(3));
        assert_eq!(parsed.max_content_chars, 1500);
    }
}
