//! Todo Input Component
//!
//! Text box with the Add / Save button and the blank-text warning.

use leptos::prelude::*;
use todo_store::TodoAction;

use crate::store::{store_dispatch, use_app_config, use_app_store, AppStateStoreFields};

/// Input row. Adds a new item, or saves the item under edit.
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_app_store();
    let config = use_app_config();
    let warning_message = config.warning_message;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = store_dispatch(&store, TodoAction::Submit) {
            log::debug!("[INPUT] submit rejected: {}", e);
        }
    };

    view! {
        <form class="input-container" on:submit=on_submit>
            <input
                type="text"
                prop:value=move || store.todos().with(|todos| todos.input().draft.clone())
                on:input=move |ev| {
                    let _ = store_dispatch(&store, TodoAction::SetDraft { text: event_target_value(&ev) });
                }
            />
            <button type="submit">{move || store.todos().with(|todos| todos.submit_label())}</button>
        </form>
        <Show when=move || store.todos().with(|todos| todos.input().warning)>
            <p class="warning-message">{warning_message}</p>
        </Show>
    }
}
