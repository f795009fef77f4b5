//! Todo State
//!
//! The store proper. Owns the items, the visibility filter, the edit target
//! and the input box, and applies [`TodoAction`]s to them.
//!
//! Invariant: when `editing` is `Editing(id)`, an item with `id` exists.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::action::TodoAction;
use crate::editing::EditingState;
use crate::error::TodoError;
use crate::filter::VisibilityFilter;
use crate::item::{IdGenerator, TodoId, TodoItem};

/// Startup settings for a [`TodoState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Filter selected when the list first renders
    pub initial_filter: VisibilityFilter,
    /// Id given to the first item
    pub first_id: TodoId,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_filter: VisibilityFilter::All,
            first_id: 1,
        }
    }
}

/// Contents of the text box and its validation flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputState {
    /// Current text in the box
    pub draft: String,
    /// Set when the last add/commit was rejected as blank
    pub warning: bool,
}

impl InputState {
    fn clear(&mut self) {
        self.draft.clear();
        self.warning = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoState {
    items: Vec<TodoItem>,
    filter: VisibilityFilter,
    editing: EditingState,
    input: InputState,
    ids: IdGenerator,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl TodoState {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            filter: config.initial_filter,
            editing: EditingState::Idle,
            input: InputState::default(),
            ids: IdGenerator::starting_at(config.first_id),
        }
    }

    // ========================
    // Dispatch
    // ========================

    /// Apply one action. Returns the id of a newly created item, if any.
    pub fn dispatch(&mut self, action: TodoAction) -> Result<Option<TodoId>, TodoError> {
        debug!("[STORE] dispatch {:?}", action);
        match action {
            TodoAction::Add { text } => self.add(text).map(Some),
            TodoAction::ToggleCompleted { id } => {
                self.toggle_completed(id);
                Ok(None)
            }
            TodoAction::Delete { id } => {
                self.delete(id);
                Ok(None)
            }
            TodoAction::SetFilter { filter } => {
                self.set_filter(filter);
                Ok(None)
            }
            TodoAction::StartEdit { id, current_text } => {
                self.start_edit(id, current_text);
                Ok(None)
            }
            TodoAction::CommitEdit { text } => self.commit_edit(text),
            TodoAction::SetDraft { text } => {
                self.set_draft(text);
                Ok(None)
            }
            TodoAction::Submit => self.submit(),
            TodoAction::UpdateText { id, text } => self.update_text(id, text).map(|_| None),
            TodoAction::FinishEditing => {
                self.finish_editing();
                Ok(None)
            }
        }
    }

    // ========================
    // Operations
    // ========================

    /// Append a new item. Blank text raises the input warning instead.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TodoId, TodoError> {
        let text = text.into();
        if is_blank(&text) {
            return Err(self.reject("add"));
        }
        let id = self.ids.next_id();
        self.items.push(TodoItem::new(id, text));
        self.input.clear();
        debug!("[STORE] added #{} ({} items)", id, self.items.len());
        Ok(id)
    }

    /// Flip an item's completed flag. Completing the item under edit ends the edit.
    pub fn toggle_completed(&mut self, id: TodoId) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("[STORE] toggle: no item #{}", id);
            return;
        };
        item.completed = !item.completed;
        if item.completed && self.editing.is_editing(id) {
            self.editing = EditingState::Idle;
        }
        debug!("[STORE] toggled #{} -> completed={}", id, item.completed);
    }

    /// Remove an item. Deleting the item under edit ends the edit.
    pub fn delete(&mut self, id: TodoId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("[STORE] delete: no item #{}", id);
            return;
        }
        if self.editing.is_editing(id) {
            self.editing = EditingState::Idle;
        }
        debug!("[STORE] deleted #{} ({} items)", id, self.items.len());
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.filter = filter;
    }

    /// Make `id` the edit target and seed the input box with `current_text`.
    /// Switches directly if another item is already being edited.
    pub fn start_edit(&mut self, id: TodoId, current_text: impl Into<String>) {
        if self.get(id).is_none() {
            debug!("[STORE] start_edit: no item #{}", id);
            return;
        }
        self.editing = EditingState::Editing(id);
        self.input.draft = current_text.into();
    }

    /// Save the edit in progress. With no edit active this is [`TodoState::add`].
    pub fn commit_edit(&mut self, text: impl Into<String>) -> Result<Option<TodoId>, TodoError> {
        let EditingState::Editing(id) = self.editing else {
            return self.add(text).map(Some);
        };
        let text = text.into();
        if is_blank(&text) {
            return Err(self.reject("commit"));
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.text = text;
        }
        self.editing = EditingState::Idle;
        self.input.clear();
        debug!("[STORE] committed edit of #{}", id);
        Ok(None)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input.draft = text.into();
    }

    /// Commit whatever is in the input box
    pub fn submit(&mut self) -> Result<Option<TodoId>, TodoError> {
        let text = self.input.draft.clone();
        self.commit_edit(text)
    }

    /// Replace an item's text without leaving edit mode
    pub fn update_text(&mut self, id: TodoId, text: impl Into<String>) -> Result<(), TodoError> {
        let text = text.into();
        if is_blank(&text) {
            return Err(self.reject("update"));
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.text = text;
        }
        Ok(())
    }

    /// Leave edit mode without saving
    pub fn finish_editing(&mut self) {
        if self.editing.is_idle() {
            return;
        }
        self.editing = EditingState::Idle;
        self.input.clear();
    }

    fn reject(&mut self, op: &str) -> TodoError {
        warn!("[STORE] {}: rejected blank text", op);
        self.input.warning = true;
        TodoError::EmptyText
    }

    // ========================
    // Views
    // ========================

    /// Items passing the current filter, in insertion order
    pub fn visible_items(&self) -> impl Iterator<Item = &TodoItem> + '_ {
        let filter = self.filter;
        self.items.iter().filter(move |item| filter.matches(item))
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    pub fn editing(&self) -> EditingState {
        self.editing
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.editing.target()
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.is_editing(id)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Label of the Add / Save button
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_idle() {
            "Add Todo"
        } else {
            "Save Todo"
        }
    }
}

/// Pure form of [`TodoState::dispatch`]: `(state, action) -> state`.
/// Validation failures show up as `input().warning`.
pub fn reduce(mut state: TodoState, action: TodoAction) -> TodoState {
    let _ = state.dispatch(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(state: &TodoState) -> Vec<&str> {
        state.visible_items().map(|item| item.text.as_str()).collect()
    }

    fn seeded(texts: &[&str]) -> (TodoState, Vec<TodoId>) {
        let mut state = TodoState::new();
        let ids = texts.iter().map(|t| state.add(*t).unwrap()).collect();
        (state, ids)
    }

    #[test]
    fn test_add_blank_raises_warning() {
        let mut state = TodoState::new();
        assert_eq!(state.add(""), Err(TodoError::EmptyText));
        assert_eq!(state.add("   "), Err(TodoError::EmptyText));
        assert!(state.is_empty());
        assert!(state.input().warning);

        state.add("Buy milk").unwrap();
        assert!(!state.input().warning);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let (mut state, ids) = seeded(&["a", "b"]);
        assert_eq!(ids, vec![1, 2]);
        state.delete(2);
        // Deleted ids are never handed out again
        assert_eq!(state.add("c").unwrap(), 3);
        assert!(state.items().iter().all(|item| !item.completed));
    }

    #[test]
    fn test_filter_completed() {
        let (mut state, ids) = seeded(&["Buy milk"]);
        state.toggle_completed(ids[0]);

        state.set_filter(VisibilityFilter::Completed);
        assert_eq!(texts(&state), vec!["Buy milk"]);

        state.set_filter(VisibilityFilter::NotCompleted);
        assert!(texts(&state).is_empty());
    }

    #[test]
    fn test_filter_all_keeps_insertion_order() {
        let (mut state, ids) = seeded(&["one", "two", "three"]);
        state.toggle_completed(ids[1]);
        state.set_filter(VisibilityFilter::All);
        assert_eq!(texts(&state), vec!["one", "two", "three"]);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.active_count(), 2);

        state.set_filter(VisibilityFilter::NotCompleted);
        assert_eq!(texts(&state), vec!["one", "three"]);
    }

    #[test]
    fn test_edit_then_commit() {
        let (mut state, ids) = seeded(&["X"]);
        state.start_edit(ids[0], "X");
        assert_eq!(state.editing(), EditingState::Editing(ids[0]));
        assert_eq!(state.input().draft, "X");
        assert_eq!(state.submit_label(), "Save Todo");

        assert_eq!(state.commit_edit("Y"), Ok(None));
        assert_eq!(state.get(ids[0]).unwrap().text, "Y");
        assert_eq!(state.editing(), EditingState::Idle);
        assert_eq!(state.input().draft, "");
        assert_eq!(state.submit_label(), "Add Todo");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_commit_blank_keeps_edit() {
        let (mut state, ids) = seeded(&["X"]);
        state.start_edit(ids[0], "X");
        assert_eq!(state.commit_edit("  "), Err(TodoError::EmptyText));
        assert!(state.is_editing(ids[0]));
        assert!(state.input().warning);
        assert_eq!(state.get(ids[0]).unwrap().text, "X");
    }

    #[test]
    fn test_commit_without_edit_adds() {
        let mut state = TodoState::new();
        assert_eq!(state.commit_edit("new"), Ok(Some(1)));
        assert_eq!(texts(&state), vec!["new"]);
    }

    #[test]
    fn test_start_edit_switches_target() {
        let (mut state, ids) = seeded(&["a", "b"]);
        state.start_edit(ids[0], "a");
        state.start_edit(ids[1], "b");
        assert_eq!(state.editing_id(), Some(ids[1]));
        assert_eq!(state.input().draft, "b");
    }

    #[test]
    fn test_start_edit_unknown_id_is_noop() {
        let (mut state, _) = seeded(&["a"]);
        state.start_edit(42, "ghost");
        assert!(state.editing().is_idle());
        assert_eq!(state.input().draft, "");
    }

    #[test]
    fn test_complete_cancels_edit() {
        let (mut state, ids) = seeded(&["a"]);
        state.start_edit(ids[0], "a");
        state.toggle_completed(ids[0]);
        assert!(state.get(ids[0]).unwrap().completed);
        assert!(state.editing().is_idle());
    }

    #[test]
    fn test_uncomplete_keeps_edit() {
        let (mut state, ids) = seeded(&["a"]);
        state.toggle_completed(ids[0]);
        state.start_edit(ids[0], "a");
        state.toggle_completed(ids[0]);
        assert!(!state.get(ids[0]).unwrap().completed);
        assert!(state.is_editing(ids[0]));
    }

    #[test]
    fn test_delete_cancels_edit() {
        let (mut state, ids) = seeded(&["a", "b"]);
        state.start_edit(ids[0], "a");
        state.delete(ids[0]);
        assert!(state.editing().is_idle());
        for filter in VisibilityFilter::ALL {
            state.set_filter(filter);
            assert!(state.visible_items().all(|item| item.id != ids[0]));
        }
    }

    #[test]
    fn test_delete_other_keeps_edit() {
        let (mut state, ids) = seeded(&["a", "b"]);
        state.start_edit(ids[0], "a");
        state.delete(ids[1]);
        state.delete(99);
        assert!(state.is_editing(ids[0]));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_finish_editing() {
        let (mut state, ids) = seeded(&["a"]);
        state.start_edit(ids[0], "a");
        state.set_draft("a changed");
        state.finish_editing();
        assert!(state.editing().is_idle());
        assert_eq!(state.get(ids[0]).unwrap().text, "a");
        assert_eq!(state.input().draft, "");
    }

    #[test]
    fn test_update_text() {
        let (mut state, ids) = seeded(&["a"]);
        state.start_edit(ids[0], "a");
        state.update_text(ids[0], "b").unwrap();
        assert_eq!(state.get(ids[0]).unwrap().text, "b");
        assert!(state.is_editing(ids[0]));
        assert_eq!(state.update_text(ids[0], ""), Err(TodoError::EmptyText));
        assert_eq!(state.get(ids[0]).unwrap().text, "b");
    }

    #[test]
    fn test_dispatch_submit_flow() {
        let mut state = TodoState::new();
        state.dispatch(TodoAction::SetDraft { text: " ".to_string() }).unwrap();
        assert_eq!(state.dispatch(TodoAction::Submit), Err(TodoError::EmptyText));
        assert!(state.input().warning);

        state.dispatch(TodoAction::SetDraft { text: "Walk dog".to_string() }).unwrap();
        let id = state.dispatch(TodoAction::Submit).unwrap().unwrap();
        assert_eq!(texts(&state), vec!["Walk dog"]);
        assert_eq!(state.input(), &InputState::default());

        state
            .dispatch(TodoAction::StartEdit { id, current_text: "Walk dog".to_string() })
            .unwrap();
        state.dispatch(TodoAction::SetDraft { text: "Walk cat".to_string() }).unwrap();
        assert_eq!(state.dispatch(TodoAction::Submit), Ok(None));
        assert_eq!(texts(&state), vec!["Walk cat"]);
        assert!(state.editing().is_idle());
    }

    #[test]
    fn test_reduce_is_pure_transition() {
        let state = TodoState::new();
        let state = reduce(state, TodoAction::Add { text: "a".to_string() });
        let state = reduce(state, TodoAction::ToggleCompleted { id: 1 });
        let state = reduce(state, TodoAction::SetFilter { filter: VisibilityFilter::Completed });
        assert_eq!(texts(&state), vec!["a"]);

        let state = reduce(state, TodoAction::Add { text: String::new() });
        assert!(state.input().warning);
        assert_eq!(state.len(), 1);

        let state = reduce(state, TodoAction::Delete { id: 1 });
        assert!(state.is_empty());
    }

    #[test]
    fn test_with_config() {
        let state = TodoState::with_config(StoreConfig {
            initial_filter: VisibilityFilter::NotCompleted,
            first_id: 10,
        });
        assert_eq!(state.filter(), VisibilityFilter::NotCompleted);
        let state = reduce(state, TodoAction::Add { text: "a".to_string() });
        assert_eq!(state.items()[0].id, 10);
    }

    #[test]
    fn test_action_wire_format() {
        let action = TodoAction::SetFilter { filter: VisibilityFilter::NotCompleted };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"set_filter","filter":"not-completed"}"#);
        let back: TodoAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
