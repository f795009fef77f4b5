//! Application Configuration
//!
//! Static settings for the todo page. Everything is compiled in; there is
//! no config file.

use log::LevelFilter;
use todo_store::{StoreConfig, VisibilityFilter};

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Page heading
    pub title: &'static str,
    /// Shown under the input box after a blank add/save
    pub warning_message: &'static str,
    /// Filter selected on load
    pub initial_filter: VisibilityFilter,
    /// Max level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Todo List Components",
            warning_message: "Please enter a valid todo.",
            initial_filter: VisibilityFilter::All,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            initial_filter: self.initial_filter,
            ..StoreConfig::default()
        }
    }
}
