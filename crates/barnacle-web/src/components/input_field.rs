//! Main text input — commits a new todo on Enter.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct InputFieldProps {
    value: String,
    on_change: EventHandler<String>,
    on_commit: EventHandler<()>,
}

pub fn InputField(props: InputFieldProps) -> Element {
    let mut error = use_signal(|| false);
    let on_change = props.on_change;
    let on_commit = props.on_commit;
    let typed = props.value.clone();

    rsx! {
        input {
            class: if error() { "user-input input-error" } else { "user-input" },
            r#type: "text",
            value: "{props.value}",
            oninput: move |e| on_change.call(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    if typed.trim().is_empty() {
                        // Error styling only; typing is never blocked
                        error.set(true);
                    } else {
                        error.set(false);
                        on_commit.call(());
                    }
                }
            },
        }
    }
}
