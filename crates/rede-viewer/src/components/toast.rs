//! Transient notifications.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::{ViewerState, TOAST_EXIT_MS};

/// Shows `message` and schedules its dismissal.
pub fn notify(mut state: Signal<ViewerState>, message: String) {
    let (id, visible_ms) = {
        let mut state_write = state.write();
        (state_write.push_toast(message), state_write.config.notification_ms)
    };

    spawn(async move {
        tokio::time::sleep(Duration::from_millis(visible_ms)).await;
        state.write().mark_toast_leaving(id);
        tokio::time::sleep(Duration::from_millis(TOAST_EXIT_MS)).await;
        state.write().remove_toast(id);
    });
}

/// Stack of visible notifications in the top-right corner.
#[component]
pub fn ToastStack(state: Signal<ViewerState>) -> Element {
    let state_read = state.read();

    rsx! {
        div {
            class: "toast-stack",
            for toast in state_read.toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: if toast.leaving { "toast toast-leaving" } else { "toast" },
                    "{toast.message}"
                }
            }
        }
    }
}
