//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;
use todo_store::{RowActions, TodoItem};

use crate::store::{store_dispatch, use_app_store};

/// A single item row. The row being edited shows no buttons.
#[component]
pub fn TodoRow(item: TodoItem, actions: RowActions) -> impl IntoView {
    let store = use_app_store();

    let text_class = if item.completed { "task-text completed" } else { "task-text" };

    let buttons = actions
        .labels()
        .zip(actions.toggle_action(&item))
        .zip(actions.secondary_action(&item))
        .map(move |(((toggle_label, secondary_label), toggle), secondary)| {
            view! {
                <button on:click=move |_| {
                    let _ = store_dispatch(&store, toggle.clone());
                }>
                    {toggle_label}
                </button>
                <button on:click=move |_| {
                    let _ = store_dispatch(&store, secondary.clone());
                }>
                    {secondary_label}
                </button>
            }
        });

    view! {
        <li>
            <span class=text_class>{item.text}</span>
            <div class="edit-buttons">{buttons}</div>
        </li>
    }
}
