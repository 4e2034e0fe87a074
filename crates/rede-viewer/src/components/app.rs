//! Root application component for the lab directory viewer.

use dioxus::prelude::*;

use crate::state::ViewerState;
use crate::theme::ThemedRoot;

use super::{Header, LabList, MapPanel, RegionFilters, SearchBar, ToastStack};

/// Root application component.
#[component]
pub fn App(state: Signal<ViewerState>) -> Element {
    let state_read = state.read();
    let theme = state_read.theme();
    let menu_open = state_read.menu.is_open();
    let visible = state_read.controller.list().len();
    let total = state_read.controller.store().len();

    rsx! {
        ThemedRoot {
            theme,
            menu_open,

            div {
                class: "rede-viewer",

                Header { state }

                main {
                    class: "labs-section",
                    id: "labs",

                    div {
                        class: "section-header",
                        h2 { "Rede de Fab Labs" }
                        span {
                            class: "section-count",
                            "{visible} de {total} labs"
                        }
                    }

                    div {
                        class: "directory-controls",
                        SearchBar { state }
                        RegionFilters { state }
                    }

                    // List on the left, map on the right
                    div {
                        class: "directory-body",
                        LabList { state }
                        MapPanel { state }
                    }
                }

                ToastStack { state }
            }
        }
    }
}
