//! Editing State
//!
//! Which item, if any, is being text-edited. Only one at a time.

use serde::{Deserialize, Serialize};

use crate::item::TodoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "id")]
pub enum EditingState {
    #[default]
    Idle,
    Editing(TodoId),
}

impl EditingState {
    /// Id of the item under edit
    pub fn target(&self) -> Option<TodoId> {
        match self {
            EditingState::Idle => None,
            EditingState::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.target() == Some(id)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditingState::Idle)
    }
}
