//! Theme root for the lab directory viewer.

use dioxus::prelude::*;

use rede_directory::Theme;

/// Root wrapper that applies the theme and the menu scroll lock.
#[component]
pub fn ThemedRoot(theme: Theme, menu_open: bool, children: Element) -> Element {
    let class = if menu_open {
        "themed-root menu-open"
    } else {
        "themed-root"
    };

    rsx! {
        div {
            class: "{class}",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
