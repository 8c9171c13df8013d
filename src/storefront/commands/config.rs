//! Reading and changing storefront settings.
//!
//! Keys are the kebab-case names in [`StorefrontConfig::KEYS`]. A change is
//! saved to `<home>/config.json` and the reply says what the shopper will
//! notice on the next run.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::StorefrontConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Every setting with its current value.
    List,
    Get(String),
    Set { key: String, value: String },
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config = StorefrontConfig::load(dir)?;
    match action {
        ConfigAction::List => Ok(CmdResult::default().with_config(config)),
        ConfigAction::Get(key) => Ok(get(&config, &key)),
        ConfigAction::Set { key, value } => set(dir, config, &key, &value),
    }
}

fn get(config: &StorefrontConfig, key: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match config.get(key) {
        Some(value) => result.add_message(CmdMessage::info(value)),
        None => result.add_message(unknown_key(key)),
    }
    result
}

fn set(dir: &Path, mut config: StorefrontConfig, key: &str, value: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !StorefrontConfig::KEYS.contains(&key) {
        result.add_message(unknown_key(key));
        return Ok(result);
    }

    let before = config.get(key);
    if let Err(e) = config.set(key, value) {
        result.add_message(CmdMessage::error(e.to_string()));
        return Ok(result);
    }
    let after = config.get(key);
    if before == after {
        result.add_message(CmdMessage::info(format!(
            "{} is already {}",
            key,
            after.unwrap_or_default()
        )));
        return Ok(result.with_config(config));
    }

    config.save(dir)?;
    tracing::info!(key, value = after.as_deref().unwrap_or_default(), "setting changed");
    result.add_message(CmdMessage::success(format!(
        "{} set to {}",
        key,
        after.unwrap_or_default()
    )));
    if let Some(effect) = effect(&config, key) {
        result.add_message(CmdMessage::info(effect));
    }
    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown setting: {} (known: {})",
        key,
        StorefrontConfig::KEYS.join(", ")
    ))
}

/// What a changed setting means for browsing and search.
fn effect(config: &StorefrontConfig, key: &str) -> Option<String> {
    let text = match key {
        "latency-ms" if config.latency_ms == 0 => {
            "Catalog and sign-in calls answer immediately.".to_string()
        }
        "latency-ms" => format!(
            "Catalog and sign-in calls now wait {} ms.",
            config.latency_ms
        ),
        "browse-page-size" => format!(
            "Category pages load {} more products at a time.",
            config.browse_page_size
        ),
        "search-page-size" => format!(
            "Search shows {} products per page.",
            config.search_page_size
        ),
        "price-ceiling" => format!(
            "Price filters without an upper bound stop at {}.",
            config.price_ceiling
        ),
        "suggestion-limit" | "suggestion-min-chars" => format!(
            "Up to {} suggestions once {} characters are typed.",
            config.suggestion_limit, config.suggestion_min_chars
        ),
        "new-arrivals" => format!("The home page picks {} new arrivals.", config.new_arrivals),
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn set_action(key: &str, value: &str) -> ConfigAction {
        ConfigAction::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn set_persists_and_get_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), set_action("search-page-size", " 10")).unwrap();
        assert_eq!(res.messages[0].content, "search-page-size set to 10");
        assert_eq!(res.messages[1].content, "Search shows 10 products per page.");

        let res = run(dir.path(), ConfigAction::Get("search-page-size".into())).unwrap();
        assert_eq!(res.messages[0].content, "10");

        let res = run(dir.path(), ConfigAction::List).unwrap();
        assert_eq!(res.config.unwrap().search_page_size, 10);
    }

    #[test]
    fn bad_input_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), set_action("browse-page-size", "0")).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_keys_list_the_known_ones() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), ConfigAction::Get("colour".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(res.messages[0].content.contains("browse-page-size"));

        let res = run(dir.path(), set_action("colour", "red")).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(res.config.is_none());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unchanged_value_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), set_action("browse-page-size", "12")).unwrap();
        assert_eq!(res.messages[0].content, "browse-page-size is already 12");
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn latency_effect_mentions_delay() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), set_action("latency-ms", "800")).unwrap();
        assert_eq!(res.messages[1].content, "Catalog and sign-in calls now wait 800 ms.");

        let res = run(dir.path(), set_action("latency-ms", "0")).unwrap();
        assert_eq!(res.messages[1].content, "Catalog and sign-in calls answer immediately.");
    }
}
