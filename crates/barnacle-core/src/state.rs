//! AppState — the single source of truth for the todo list.
//!
//! Owns the pending input text, the ordered item list, and which item (if
//! any) is being edited. Every transition is synchronous and atomic; on
//! `Err` nothing changed, except that [`AppState::confirm_edit`] abandons
//! the edit when the edited item has meanwhile been deleted.

use tracing::{debug, warn};

use crate::error::StateError;
use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    input_value: String,
    items: Vec<Item>,
    editing_id: Option<String>,
}

impl AppState {
    /// Empty list, empty input, no edit in progress.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ──

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Items in display order, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    // ── Transitions ──

    /// Replace the pending input text. Called on every keystroke.
    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    /// Turn the pending input text into a new item at the head of the list
    /// and clear the input. Rejects empty (after trimming) text, leaving
    /// the pending text in place.
    pub fn commit_input(&mut self) -> Result<&Item, StateError> {
        if self.input_value.trim().is_empty() {
            return Err(StateError::EmptyValue);
        }
        let item = Item::new(std::mem::take(&mut self.input_value));
        debug!("added item {}", item.id);
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Mark the item with `id` as being edited. The dialog is shown exactly
    /// while an edit is in progress.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), StateError> {
        if !self.items.iter().any(|item| item.id == id) {
            return Err(StateError::UnknownItem(id.to_string()));
        }
        self.editing_id = Some(id.to_string());
        Ok(())
    }

    /// Replace the edited item's value and finish the edit.
    ///
    /// An empty `new_value` is rejected and the edit stays in progress. If
    /// the edited item no longer exists the edit is abandoned: the edit is
    /// cleared, no item is touched, and `UnknownItem` is returned.
    pub fn confirm_edit(&mut self, new_value: &str) -> Result<(), StateError> {
        let id = self.editing_id.clone().ok_or(StateError::NoActiveEdit)?;
        if new_value.trim().is_empty() {
            return Err(StateError::EmptyValue);
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.value = new_value.to_string();
                self.editing_id = None;
                debug!("changed item {}", id);
                Ok(())
            }
            None => {
                warn!("edited item {} no longer exists, abandoning edit", id);
                self.editing_id = None;
                Err(StateError::UnknownItem(id))
            }
        }
    }

    /// Finish the edit without touching any item.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Remove exactly the item with `id`, preserving the order of the rest.
    /// Does not touch an edit in progress; a dangling edit is handled at
    /// confirm time.
    pub fn delete_item(&mut self, id: &str) -> Result<(), StateError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(StateError::UnknownItem(id.to_string()));
        }
        debug!("deleted item {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn add(state: &mut AppState, value: &str) -> String {
        state.set_input_value(value);
        state.commit_input().unwrap().id.clone()
    }

    fn assert_invariants(state: &AppState) {
        let mut seen = HashSet::new();
        for item in state.items() {
            assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
            assert!(!item.value.trim().is_empty(), "empty value in list");
        }
    }

    #[test]
    fn test_commit_adds_item_at_head() {
        let mut state = AppState::new();
        state.set_input_value("Buy milk");
        state.commit_input().unwrap();

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].value, "Buy milk");
        assert_eq!(state.input_value(), "");
    }

    #[test]
    fn test_commit_empty_is_rejected() {
        let mut state = AppState::new();
        assert_eq!(state.commit_input(), Err(StateError::EmptyValue));
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_commit_whitespace_is_rejected() {
        let mut state = AppState::new();
        state.set_input_value("   ");
        assert_eq!(state.commit_input(), Err(StateError::EmptyValue));
        assert!(state.items().is_empty());
        // The rejected text stays pending
        assert_eq!(state.input_value(), "   ");
    }

    #[test]
    fn test_newest_item_first() {
        let mut state = AppState::new();
        add(&mut state, "A");
        add(&mut state, "B");

        let values: Vec<&str> = state.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["B", "A"]);
    }

    #[test]
    fn test_delete_removes_only_that_item() {
        let mut state = AppState::new();
        add(&mut state, "A");
        let id_b = add(&mut state, "B");
        add(&mut state, "C");

        state.delete_item(&id_b).unwrap();

        let values: Vec<&str> = state.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["C", "A"]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut state = AppState::new();
        add(&mut state, "A");
        assert_eq!(
            state.delete_item("missing"),
            Err(StateError::UnknownItem("missing".into()))
        );
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_confirm_edit_updates_only_edited_item() {
        let mut state = AppState::new();
        let id_a = add(&mut state, "A");
        add(&mut state, "B");

        state.begin_edit(&id_a).unwrap();
        assert_eq!(state.editing_id(), Some(id_a.as_str()));

        state.confirm_edit("Updated").unwrap();

        assert_eq!(state.editing_id(), None);
        let values: Vec<&str> = state.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["B", "Updated"]);
    }

    #[test]
    fn test_cancel_edit_changes_nothing() {
        let mut state = AppState::new();
        let id = add(&mut state, "A");

        state.begin_edit(&id).unwrap();
        state.cancel_edit();

        assert_eq!(state.editing_id(), None);
        assert_eq!(state.items()[0].value, "A");
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut state = AppState::new();
        assert_eq!(
            state.begin_edit("missing"),
            Err(StateError::UnknownItem("missing".into()))
        );
        assert_eq!(state.editing_id(), None);
    }

    #[test]
    fn test_confirm_edit_empty_keeps_edit_open() {
        let mut state = AppState::new();
        let id = add(&mut state, "A");
        state.begin_edit(&id).unwrap();

        assert_eq!(state.confirm_edit(""), Err(StateError::EmptyValue));

        // Edit still in progress, item untouched
        assert_eq!(state.editing_id(), Some(id.as_str()));
        assert_eq!(state.items()[0].value, "A");
    }

    #[test]
    fn test_confirm_edit_without_edit() {
        let mut state = AppState::new();
        assert_eq!(state.confirm_edit("X"), Err(StateError::NoActiveEdit));
    }

    #[test]
    fn test_confirm_after_delete_abandons_edit() {
        let mut state = AppState::new();
        let id = add(&mut state, "A");
        add(&mut state, "B");

        state.begin_edit(&id).unwrap();
        state.delete_item(&id).unwrap();

        assert_eq!(
            state.confirm_edit("Updated"),
            Err(StateError::UnknownItem(id))
        );
        assert_eq!(state.editing_id(), None);
        // The surviving item was not touched
        assert_eq!(state.items()[0].value, "B");
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_mixed_sequence_keeps_invariants() {
        let mut state = AppState::new();
        let id_a = add(&mut state, "A");
        let id_b = add(&mut state, "B");
        add(&mut state, "C");
        assert_invariants(&state);

        state.begin_edit(&id_b).unwrap();
        state.confirm_edit("B2").unwrap();
        assert_invariants(&state);

        state.delete_item(&id_a).unwrap();
        assert_invariants(&state);

        let id_d = add(&mut state, "D");
        state.begin_edit(&id_d).unwrap();
        state.cancel_edit();
        assert_invariants(&state);

        let values: Vec<&str> = state.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["D", "C", "B2"]);
    }
}
