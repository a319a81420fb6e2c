//! Toast host: stacks transient notifications in the corner.

use dioxus::prelude::*;
use sactifi_ui::CloseButton;

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div { class: "toast-host", role: "status", "aria-live": "polite",
            for toast in toasts.items() {
                div { key: "{toast.id}", class: "{toast.kind.class()}",
                    span { class: "toast-message", "{toast.message}" }
                    CloseButton { onclick: move |_| toasts.dismiss(toast.id) }
                }
            }
        }
    }
}
