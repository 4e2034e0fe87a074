//! Map container and region legend.

use dioxus::prelude::*;

use rede_directory::Region;

use crate::bridge::MAP_CONTAINER_ID;
use crate::state::ViewerState;

/// Hosts the Leaflet map. The map is created once the container exists.
#[component]
pub fn MapPanel(state: Signal<ViewerState>) -> Element {
    let mut state_write = state;

    rsx! {
        section {
            class: "map-panel",
            id: "mapa",

            div {
                id: MAP_CONTAINER_ID,
                class: "lab-map",
                onmounted: move |_| {
                    state_write.write().controller.start();
                },
            }

            div {
                class: "map-legend",
                for region in Region::known() {
                    div {
                        key: "{region}",
                        class: "legend-item",
                        span {
                            class: "legend-dot",
                            style: "background-color: {region.marker_color()}",
                        }
                        "{region}"
                    }
                }
            }
        }
    }
}
