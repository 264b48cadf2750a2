//! Barnacle WASM frontend — Dioxus app root.
//!
//! The root owns the one [`AppState`] signal; input events flow up from the
//! components as callbacks and state flows back down as props. The edit
//! dialog is mounted exactly while an edit is in progress.

mod components;

use barnacle_core::config::UiConfig;
use barnacle_core::state::AppState;
use dioxus::prelude::*;
use tracing::warn;

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    let mut state = use_signal(AppState::new);
    let config = use_hook(UiConfig::default);

    let input_value = state.read().input_value().to_string();
    let items = state.read().items().to_vec();
    let editing = state.read().editing_id().is_some();

    rsx! {
        div { class: "container",
            h1 { class: "title", "Hello!" }

            components::input_field::InputField {
                value: input_value,
                on_change: move |text: String| state.write().set_input_value(text),
                on_commit: move |_| {
                    if let Err(e) = state.write().commit_input() {
                        warn!("add rejected: {}", e);
                    }
                },
            }

            components::item_list::ItemList {
                items: items,
                language: config.language.clone(),
                on_change: move |id: String| {
                    if let Err(e) = state.write().begin_edit(&id) {
                        warn!("change rejected: {}", e);
                    }
                },
                on_delete: move |id: String| {
                    if let Err(e) = state.write().delete_item(&id) {
                        warn!("delete rejected: {}", e);
                    }
                },
            }

            if editing {
                components::edit_dialog::EditDialog {
                    on_confirm: move |text: String| {
                        if let Err(e) = state.write().confirm_edit(&text) {
                            warn!("change rejected: {}", e);
                        }
                    },
                    on_close: move |_| state.write().cancel_edit(),
                }
            }
        }
    }
}
