//! Todo List Component
//!
//! Renders the items passing the current filter.

use leptos::prelude::*;
use todo_store::RowActions;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store.todos().with(|todos| {
            todos
                .visible_items()
                .map(|item| (item.clone(), RowActions::for_item(item, todos.editing())))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <ul class="todo-list">
            <For
                each=rows
                key=|(item, actions)| {
                    // Every mutable field, so edits and toggles re-render the row
                    (item.id, item.text.clone(), item.completed, *actions)
                }
                children=move |(item, actions)| view! { <TodoRow item=item actions=actions /> }
            />
        </ul>
    }
}
