//! Todo Actions
//!
//! Every state transition the presentation layer can request.

use serde::{Deserialize, Serialize};

use crate::filter::VisibilityFilter;
use crate::item::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TodoAction {
    /// Append a new item
    Add { text: String },
    /// Flip an item's completed flag
    ToggleCompleted { id: TodoId },
    /// Remove an item
    Delete { id: TodoId },
    /// Change the visibility filter
    SetFilter { filter: VisibilityFilter },
    /// Begin editing an item, seeding the input box with its text
    StartEdit { id: TodoId, current_text: String },
    /// Save the edit in progress, or add when idle
    CommitEdit { text: String },
    /// Mirror the input box contents
    SetDraft { text: String },
    /// Commit the current draft (the Add / Save button)
    Submit,
    /// Replace an item's text without touching the edit state
    UpdateText { id: TodoId, text: String },
    /// Leave edit mode without changing any item
    FinishEditing,
}
