//! Error types for state transitions.

use thiserror::Error;

/// Why a state transition was rejected. On `Err` the state is unchanged,
/// except for the abandoned-edit case documented on
/// [`crate::state::AppState::confirm_edit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Submitted text was empty (after trimming).
    #[error("cannot commit an empty value")]
    EmptyValue,

    /// No item with the given id is in the list.
    #[error("no item with id {0}")]
    UnknownItem(String),

    /// A dialog confirm arrived while no edit was in progress.
    #[error("no edit in progress")]
    NoActiveEdit,
}
