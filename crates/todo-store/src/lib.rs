//! Todo Store
//!
//! In-memory state for a single-page todo list: items, visibility filter,
//! the item under edit and the input box. All changes go through
//! [`TodoState::dispatch`].

mod action;
mod editing;
mod error;
mod filter;
mod item;
mod state;

pub use action::TodoAction;
pub use editing::EditingState;
pub use error::TodoError;
pub use filter::{ParseFilterError, VisibilityFilter};
pub use item::{IdGenerator, RowActions, TodoId, TodoItem};
pub use state::{reduce, InputState, StoreConfig, TodoState};
