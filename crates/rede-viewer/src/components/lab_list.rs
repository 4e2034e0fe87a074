//! Sidebar list of the visible labs.

use dioxus::prelude::*;

use rede_directory::ListEntry;

use crate::state::{list_item_id, ViewerState};

/// Lab list synchronized with the map.
#[component]
pub fn LabList(state: Signal<ViewerState>) -> Element {
    let state_read = state.read();
    let list = state_read.controller.list().backend();

    rsx! {
        aside {
            class: "lab-list",
            id: "lab-list",

            if list.entries().is_empty() {
                div {
                    class: "lab-list-empty",
                    "Nenhum lab encontrado."
                }
            }

            for (position, entry) in list.entries().iter().enumerate() {
                LabItem {
                    key: "{entry.id}",
                    position,
                    entry: entry.clone(),
                    is_selected: list.is_highlighted(position),
                    state,
                }
            }
        }
    }
}

/// A single lab card.
#[component]
fn LabItem(position: usize, entry: ListEntry, is_selected: bool, state: Signal<ViewerState>) -> Element {
    let mut state_write = state;

    rsx! {
        div {
            id: "{list_item_id(position)}",
            class: if is_selected { "lab-item animate-in selected" } else { "lab-item animate-in" },
            onclick: move |_| {
                state_write.write().controller.click_list_entry(position);
            },

            div { class: "lab-name", "{entry.name}" }
            div { class: "lab-location", "📍 {entry.location}" }
            div { class: "lab-description", "{entry.description}" }
        }
    }
}
