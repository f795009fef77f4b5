//! UI Components
//!
//! Leptos components bound to the todo store.

mod filter_bar;
mod todo_input;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
