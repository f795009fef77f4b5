//! Global Application State Store
//!
//! Wraps [`TodoState`] in a Leptos `reactive_stores::Store` so components
//! re-render when it changes.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{TodoAction, TodoError, TodoId, TodoState};

use crate::config::AppConfig;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, filter, edit target and input box
    pub todos: TodoState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            todos: TodoState::with_config(config.store_config()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Create the store and provide it (and the config) to all children
pub fn provide_app_store(config: AppConfig) -> AppStore {
    let store = Store::new(AppState::new(&config));
    provide_context(store);
    provide_context(config);
    store
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Get the app config from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an action to the todo state
pub fn store_dispatch(store: &AppStore, action: TodoAction) -> Result<Option<TodoId>, TodoError> {
    store.todos().write().dispatch(action)
}
