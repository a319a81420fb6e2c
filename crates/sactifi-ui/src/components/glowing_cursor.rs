//! Glowing cursor: a soft 200px glow that trails the pointer across the
//! whole window. Pointer events are captured by the page root and passed
//! in as a [`CursorGlow`].

use dioxus::prelude::*;
use sactifi_core::CursorGlow;

#[component]
pub fn GlowingCursor(glow: CursorGlow) -> Element {
    let style = glow.css();

    rsx! {
        div {
            class: "glowing-cursor",
            "aria-hidden": "true",
            style: "{style}",
        }
    }
}
