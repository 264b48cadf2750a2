//! Dioxus components for the todo UI.

pub mod edit_dialog;
pub mod input_field;
pub mod item_list;
pub mod item_row;
