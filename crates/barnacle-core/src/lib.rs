//! barnacle-core — Pure todo-list state, no UI.
//!
//! This crate contains the item model, id generation, and the application
//! state container with all of its transitions. It is completely UI-agnostic —
//! the web frontend drives [`state::AppState`] and re-renders from its
//! accessors.

pub mod config;
pub mod error;
pub mod id;
pub mod item;
pub mod state;
