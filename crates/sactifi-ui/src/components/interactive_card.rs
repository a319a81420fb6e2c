//! Interactive Card
//!
//! A card that tilts toward the pointer in 3D and carries a glare
//! highlight centred under it. Each card owns its own
//! [`PointerTracker`]; cards never share pointer state.

use dioxus::prelude::*;
use sactifi_core::{Glare, PointerTracker, Tilt};

use crate::pointer_region::use_pointer_region;

/// Glare gradient radius in pixels.
const GLARE_RADIUS_PX: u32 = 600;

/// Card that tilts and glares under the pointer
///
/// The card's box is re-measured on every pointer-move, so tilt stays
/// correct while the page scrolls under a resting pointer.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     InteractiveCard { class: "sector-card".to_string(),
///         h3 { "Smart Cities" }
///     }
/// }
/// ```
#[component]
pub fn InteractiveCard(
    children: Element,
    #[props(default)] class: Option<String>,
    #[props(default = Tilt::CARD_MAX_DEG)] max_tilt: f64,
    #[props(default = true)] glare: bool,
) -> Element {
    let pointer = use_pointer_region();

    let state = pointer.tracker();
    let style = card_style(&state, max_tilt);
    let glare_style = Glare::from_sample(state.sample()).css(GLARE_RADIUS_PX);
    let full_class = super::button::join_classes("interactive-card", class.as_deref());

    rsx! {
        div {
            class: "{full_class}",
            style: "{style}",
            onmounted: move |e| pointer.mounted(e),
            onmouseenter: move |_| pointer.enter(),
            onmousemove: move |e| pointer.moved(e.client_coordinates()),
            onmouseleave: move |_| pointer.leave(),
            div { class: "card-content", {children} }
            if glare && state.is_hovering() {
                div { class: "card-glare", style: "{glare_style}" }
            }
        }
    }
}

/// Tilt transform plus a transition that is snappy while tracking and
/// eases back after a leave.
fn card_style(tracker: &PointerTracker, max_tilt: f64) -> String {
    let tilt = Tilt::from_sample(tracker.sample(), max_tilt);
    let settle = if tracker.is_hovering() { "0.1s" } else { "0.5s" };
    format!("{} transition: transform {settle} ease-out;", tilt.css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sactifi_core::{Point, Rect};

    #[test]
    fn resting_card_is_flat_and_slow() {
        let style = card_style(&PointerTracker::new(), Tilt::CARD_MAX_DEG);
        assert!(style.contains("rotateX(0.00deg)"));
        assert!(style.contains("rotateY(0.00deg)"));
        assert!(style.ends_with("transition: transform 0.5s ease-out;"));
    }

    #[test]
    fn hovered_corner_tilts_fully() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 200.0, 100.0));
        let style = card_style(&tracker, 8.0);
        assert!(style.contains("rotateX(8.00deg)"));
        assert!(style.contains("rotateY(-8.00deg)"));
        assert!(style.contains("0.1s"));
    }
}
