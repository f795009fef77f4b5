//! Filter Bar Component
//!
//! Radio group selecting the visibility filter.

use leptos::prelude::*;
use todo_store::{TodoAction, VisibilityFilter};

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-container">
            {VisibilityFilter::ALL.into_iter().map(move |filter| {
                let is_checked = move || store.todos().with(|todos| todos.filter() == filter);
                view! {
                    <label>
                        <input
                            type="radio"
                            name="filter"
                            value=filter.as_str()
                            prop:checked=is_checked
                            on:change=move |_| {
                                let _ = store_dispatch(&store, TodoAction::SetFilter { filter });
                            }
                        />
                        {filter.label()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
