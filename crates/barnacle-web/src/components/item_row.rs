//! One todo row — item text plus change/delete controls.

use barnacle_core::item::Item;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ItemRowProps {
    item: Item,
    on_change: EventHandler<String>,
    on_delete: EventHandler<String>,
}

pub fn ItemRow(props: ItemRowProps) -> Element {
    rsx! {
        div { class: "item-row",
            span { class: "item-row-name", "{props.item.value}" }
            div { class: "item-row-controls",
                button {
                    class: "item-row-control",
                    onclick: {
                        let id = props.item.id.clone();
                        let on_change = props.on_change.clone();
                        move |_| on_change.call(id.clone())
                    },
                    "Change"
                }
                button {
                    class: "item-row-control",
                    onclick: {
                        let id = props.item.id.clone();
                        let on_delete = props.on_delete.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}
