//! Modal dialog for changing an item's text.
//!
//! Mounted by the application root exactly while an edit is in progress.
//! Renders as a fixed overlay above the rest of the document and listens
//! for Escape on the window; the listener is attached on mount and removed
//! again on unmount.

use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, PartialEq, Props)]
pub struct EditDialogProps {
    on_confirm: EventHandler<String>,
    on_close: EventHandler<()>,
}

pub fn EditDialog(props: EditDialogProps) -> Element {
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| false);

    // Escape closes the dialog from anywhere on the page
    let escape_listener = use_hook({
        let on_close = props.on_close.clone();
        move || {
            let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.call(());
                        draft.set(String::new());
                        error.set(false);
                    }
                },
            );
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
            Rc::new(listener)
        }
    });
    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                (*escape_listener).as_ref().unchecked_ref(),
            );
        }
    });

    rsx! {
        div { class: "dialog-bg",
            div { class: "dialog",
                h3 { class: "dialog-title", "Enter a new todo" }
                input {
                    class: if error() { "dialog-input input-error" } else { "dialog-input" },
                    r#type: "text",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeypress: {
                        let on_confirm = props.on_confirm.clone();
                        move |e| {
                            if e.key() == Key::Enter {
                                let value = draft();
                                if value.trim().is_empty() {
                                    error.set(true);
                                } else {
                                    on_confirm.call(value);
                                    draft.set(String::new());
                                    error.set(false);
                                }
                            }
                        }
                    },
                }
                div { class: "dialog-controls",
                    button {
                        class: "dialog-confirm-btn",
                        onclick: {
                            let on_confirm = props.on_confirm.clone();
                            move |_| {
                                let value = draft();
                                if value.trim().is_empty() {
                                    error.set(true);
                                } else {
                                    on_confirm.call(value);
                                    draft.set(String::new());
                                    error.set(false);
                                }
                            }
                        },
                        "Confirm"
                    }
                    button {
                        class: "dialog-close-btn",
                        onclick: {
                            let on_close = props.on_close.clone();
                            move |_| {
                                on_close.call(());
                                draft.set(String::new());
                                error.set(false);
                            }
                        },
                        "Close"
                    }
                }
            }
        }
    }
}
