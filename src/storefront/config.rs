use crate::error::{Result, StoreError};
use crate::pipeline::filter::DEFAULT_PRICE_MAX;
use crate::pipeline::paginate::{BROWSE_PAGE_SIZE, SEARCH_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Storefront settings, stored in `<home>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Simulated round-trip delay for catalog and auth calls, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,

    #[serde(default = "default_browse_page_size")]
    pub browse_page_size: usize,

    #[serde(default = "default_search_page_size")]
    pub search_page_size: usize,

    /// Upper price bound used when none (or garbage) is given.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: u64,

    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Shorter queries produce no suggestions.
    #[serde(default = "default_suggestion_min_chars")]
    pub suggestion_min_chars: usize,

    #[serde(default = "default_new_arrivals")]
    pub new_arrivals: usize,
}

fn default_browse_page_size() -> usize {
    BROWSE_PAGE_SIZE
}

fn default_search_page_size() -> usize {
    SEARCH_PAGE_SIZE
}

fn default_price_ceiling() -> u64 {
    DEFAULT_PRICE_MAX
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_suggestion_min_chars() -> usize {
    2
}

fn default_new_arrivals() -> usize {
    8
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            browse_page_size: default_browse_page_size(),
            search_page_size: default_search_page_size(),
            price_ceiling: default_price_ceiling(),
            suggestion_limit: default_suggestion_limit(),
            suggestion_min_chars: default_suggestion_min_chars(),
            new_arrivals: default_new_arrivals(),
        }
    }
}

impl StorefrontConfig {
    pub const KEYS: [&'static str; 7] = [
        "latency-ms",
        "browse-page-size",
        "search-page-size",
        "price-ceiling",
        "suggestion-limit",
        "suggestion-min-chars",
        "new-arrivals",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StorefrontConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "latency-ms" => self.latency_ms.to_string(),
            "browse-page-size" => self.browse_page_size.to_string(),
            "search-page-size" => self.search_page_size.to_string(),
            "price-ceiling" => self.price_ceiling.to_string(),
            "suggestion-limit" => self.suggestion_limit.to_string(),
            "suggestion-min-chars" => self.suggestion_min_chars.to_string(),
            "new-arrivals" => self.new_arrivals.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a key from its textual value. Page sizes must be at least 1.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let number = |min: u64| -> Result<u64> {
            value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|n| *n >= min)
                .ok_or_else(|| StoreError::Config(format!("Invalid value for {}: {}", key, value)))
        };
        match key {
            "latency-ms" => self.latency_ms = number(0)?,
            "browse-page-size" => self.browse_page_size = number(1)? as usize,
            "search-page-size" => self.search_page_size = number(1)? as usize,
            "price-ceiling" => self.price_ceiling = number(0)?,
            "suggestion-limit" => self.suggestion_limit = number(0)? as usize,
            "suggestion-min-chars" => self.suggestion_min_chars = number(0)? as usize,
            "new-arrivals" => self.new_arrivals = number(0)? as usize,
            other => return Err(StoreError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.browse_page_size, 12);
        assert_eq!(config.search_page_size, 20);
        assert_eq!(config.price_ceiling, 1_000_000);
        assert_eq!(config.latency(), Duration::ZERO);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig::load(temp_dir.path().join("nothing-here")).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = StorefrontConfig::default();
        config.set("latency-ms", "800").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = StorefrontConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.latency_ms, 800);
        assert_eq!(loaded.latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"search_page_size": 10}"#).unwrap();
        let loaded = StorefrontConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.search_page_size, 10);
        assert_eq!(loaded.browse_page_size, 12);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StorefrontConfig::default();
        assert!(config.set("browse-page-size", "0").is_err());
        assert!(config.set("browse-page-size", "ten").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let config = StorefrontConfig::default();
        for key in StorefrontConfig::KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("search-page-size").as_deref(), Some("20"));
    }
}
