//! App Configuration
//!
//! Storage key, log level and the UI selectors.

use log::LevelFilter;

/// Local storage key holding the item list
pub const DEFAULT_STORAGE_KEY: &str = "items";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
    pub selectors: Selectors,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            selectors: Selectors::default(),
        }
    }
}

/// Logical UI regions mapped to DOM query strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub item_list: String,
    pub add_btn: String,
    pub update_btn: String,
    pub delete_btn: String,
    pub back_btn: String,
    pub clear_btn: String,
    pub item_name_input: String,
    pub item_calories_input: String,
    pub total_calories: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item_list: "#item-list".to_string(),
            add_btn: ".add-btn".to_string(),
            update_btn: ".update-btn".to_string(),
            delete_btn: ".delete-btn".to_string(),
            back_btn: ".back-btn".to_string(),
            clear_btn: ".clear-btn".to_string(),
            item_name_input: "#item-name".to_string(),
            item_calories_input: "#item-calories".to_string(),
            total_calories: ".total-calories".to_string(),
        }
    }
}

/// Bare id or class name of a simple `#id` / `.class` selector
pub fn selector_name(selector: &str) -> &str {
    selector
        .strip_prefix('#')
        .or_else(|| selector.strip_prefix('.'))
        .unwrap_or(selector)
}
