//! Header with navigation, theme toggle and language selector.

use dioxus::prelude::*;

use rede_directory::Language;

use crate::state::ViewerState;

use super::notify;

/// Navigation targets as (anchor, label).
const NAV_LINKS: &[(&str, &str)] = &[
    ("#labs", "Labs"),
    ("#mapa", "Mapa"),
    ("#sobre", "Sobre"),
    ("#contato", "Contato"),
];

/// Page header.
#[component]
pub fn Header(state: Signal<ViewerState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();

    let menu_open = state_read.menu.is_open();
    let theme = state_read.theme();
    let current_language = state_read.prefs.language;

    rsx! {
        header {
            class: "header",

            div {
                class: "header-left",
                h1 {
                    class: "header-title",
                    "Rede Fab Lab"
                }
            }

            nav {
                class: if menu_open { "menu active" } else { "menu" },
                for (href, label) in NAV_LINKS.iter().copied() {
                    a {
                        key: "{href}",
                        href: "{href}",
                        onclick: move |_| state_write.write().follow_menu_link(),
                        "{label}"
                    }
                }
            }

            div {
                class: "header-right",

                div {
                    class: "lang-selector",
                    for language in Language::all().iter().copied() {
                        button {
                            key: "{language.code()}",
                            class: if language == current_language { "lang-btn active" } else { "lang-btn" },
                            "data-lang": "{language.code()}",
                            onclick: move |_| {
                                let message = state_write.write().set_language(language);
                                notify(state_write, message);
                            },
                            "{language.code().to_uppercase()}"
                        }
                    }
                }

                button {
                    class: "theme-toggle",
                    title: "Alternar tema",
                    onclick: move |_| {
                        state_write.write().toggle_theme();
                    },
                    "{theme.toggle_icon()}"
                }

                button {
                    class: if menu_open { "btn-menu active" } else { "btn-menu" },
                    "aria-expanded": "{menu_open}",
                    "aria-label": "Menu",
                    onclick: move |_| {
                        state_write.write().menu.toggle();
                    },
                    "☰"
                }
            }
        }
    }
}
