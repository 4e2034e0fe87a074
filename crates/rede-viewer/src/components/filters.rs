//! Search box and region filter buttons.

use dioxus::prelude::*;

use rede_directory::RegionFilter;

use crate::state::ViewerState;

/// Free-text search over name, location and description.
#[component]
pub fn SearchBar(state: Signal<ViewerState>) -> Element {
    let mut state_write = state;

    rsx! {
        div {
            class: "search-form",
            input {
                id: "search-input",
                r#type: "search",
                placeholder: "Buscar por nome, cidade ou descrição...",
                oninput: move |evt| {
                    state_write.write().controller.set_search_term(&evt.value());
                },
            }
        }
    }
}

/// One button per region plus "Todos".
#[component]
pub fn RegionFilters(state: Signal<ViewerState>) -> Element {
    let state_read = state.read();
    let active = state_read.controller.filter().active_region.clone();

    rsx! {
        div {
            class: "filters-container",
            for filter in RegionFilter::buttons() {
                RegionButton {
                    key: "{filter.identifier()}",
                    is_active: filter == active,
                    filter: filter.clone(),
                    state,
                }
            }
        }
    }
}

#[component]
fn RegionButton(filter: RegionFilter, is_active: bool, state: Signal<ViewerState>) -> Element {
    let mut state_write = state;
    let label = filter.to_string();
    let identifier = filter.identifier().to_string();

    rsx! {
        button {
            class: if is_active { "filter-btn active" } else { "filter-btn" },
            "data-region": "{identifier}",
            onclick: move |_| {
                state_write.write().controller.set_region(filter.clone());
            },
            "{label}"
        }
    }
}
