//! Ordered projection of the item list into rows.

use barnacle_core::item::Item;
use dioxus::prelude::*;

use crate::components::item_row::ItemRow;

#[derive(Clone, PartialEq, Props)]
pub struct ItemListProps {
    items: Vec<Item>,
    language: String,
    on_change: EventHandler<String>,
    on_delete: EventHandler<String>,
}

pub fn ItemList(props: ItemListProps) -> Element {
    rsx! {
        div { class: "items", lang: "{props.language}",
            for item in &props.items {
                ItemRow {
                    key: "{item.id}",
                    item: item.clone(),
                    on_change: {
                        let on_change = props.on_change.clone();
                        move |id: String| on_change.call(id)
                    },
                    on_delete: {
                        let on_delete = props.on_delete.clone();
                        move |id: String| on_delete.call(id)
                    },
                }
            }
        }
    }
}
