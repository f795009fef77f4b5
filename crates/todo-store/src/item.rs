//! Todo Item
//!
//! A single task record and the counter that hands out its ids.

use serde::{Deserialize, Serialize};

use crate::action::TodoAction;
use crate::editing::EditingState;

/// Item identifier
pub type TodoId = u32;

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Task text, never blank
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Monotonic id source. Ids are never reused, even after deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: TodoId,
}

impl IdGenerator {
    pub fn starting_at(first: TodoId) -> Self {
        Self { next: first }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> TodoId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Id the next call to [`IdGenerator::next_id`] returns
    pub fn peek(&self) -> TodoId {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Buttons shown on a row of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowActions {
    /// The row is being edited; its buttons are hidden
    Hidden,
    /// Completed row: "Undo" and "Delete"
    UndoDelete,
    /// Active row: "Done" and "Edit"
    DoneEdit,
}

impl RowActions {
    pub fn for_item(item: &TodoItem, editing: EditingState) -> Self {
        if editing.is_editing(item.id) {
            RowActions::Hidden
        } else if item.completed {
            RowActions::UndoDelete
        } else {
            RowActions::DoneEdit
        }
    }

    /// Button labels as (toggle, secondary)
    pub fn labels(&self) -> Option<(&'static str, &'static str)> {
        match self {
            RowActions::Hidden => None,
            RowActions::UndoDelete => Some(("Undo", "Delete")),
            RowActions::DoneEdit => Some(("Done", "Edit")),
        }
    }

    /// Action behind the toggle button
    pub fn toggle_action(&self, item: &TodoItem) -> Option<TodoAction> {
        match self {
            RowActions::Hidden => None,
            _ => Some(TodoAction::ToggleCompleted { id: item.id }),
        }
    }

    /// Action behind the second button: delete a completed row, edit an active one
    pub fn secondary_action(&self, item: &TodoItem) -> Option<TodoAction> {
        match self {
            RowActions::Hidden => None,
            RowActions::UndoDelete => Some(TodoAction::Delete { id: item.id }),
            RowActions::DoneEdit => Some(TodoAction::StartEdit {
                id: item.id,
                current_text: item.text.clone(),
            }),
        }
    }
}
