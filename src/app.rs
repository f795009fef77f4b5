//! Todo List Frontend App
//!
//! Single-column page: input box, filter radios, the list.

use leptos::prelude::*;

use crate::components::{FilterBar, TodoInput, TodoList};
use crate::config::AppConfig;
use crate::store::{provide_app_store, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let title = config.title;
    let store = provide_app_store(config);
    log::info!("[APP] mounted");

    view! {
        <div class="todo-app">
            <h1>{title}</h1>

            <TodoInput />

            <FilterBar />

            <TodoList />

            <p class="item-count">
                {move || store.todos().with(|todos| {
                    format!("{} items, {} completed", todos.len(), todos.completed_count())
                })}
            </p>
        </div>
    }
}
