//! Magnetic wrapper: content drifts toward the pointer while hovered
//! and springs back on leave.

use dioxus::prelude::*;
use sactifi_core::{MagneticPull, PointerTracker, Rect};

use crate::pointer_region::use_pointer_region;

#[component]
pub fn Magnetic(
    children: Element,
    #[props(default = MagneticPull::DEFAULT_STRENGTH)] strength: f64,
    #[props(default)] class: Option<String>,
) -> Element {
    let pointer = use_pointer_region();

    let style = magnetic_style(&pointer.tracker(), pointer.region(), strength);
    let full_class = super::button::join_classes("magnetic", class.as_deref());

    rsx! {
        div {
            class: "{full_class}",
            style: "{style}",
            onmounted: move |e| pointer.mounted(e),
            onmouseenter: move |_| pointer.enter(),
            onmousemove: move |e| pointer.moved(e.client_coordinates()),
            onmouseleave: move |_| pointer.leave(),
            {children}
        }
    }
}

fn magnetic_style(tracker: &PointerTracker, region: Option<Rect>, strength: f64) -> String {
    let pull = match region {
        Some(rect) if tracker.is_hovering() => {
            MagneticPull::from_sample(tracker.sample(), rect.size, strength)
        }
        _ => MagneticPull::default(),
    };
    format!("{} transition: transform 0.2s ease-out;", pull.css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sactifi_core::Point;

    #[test]
    fn idle_wrapper_does_not_move() {
        let style = magnetic_style(&PointerTracker::new(), None, 0.3);
        assert!(style.starts_with("transform: translate(0.00px, 0.00px);"));
    }

    #[test]
    fn pull_follows_pointer_offset() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let mut tracker = PointerTracker::new();
        tracker.move_to(Point::new(200.0, 100.0), rect);
        let style = magnetic_style(&tracker, Some(rect), 0.3);
        assert!(style.starts_with("transform: translate(30.00px, 15.00px);"));

        tracker.leave();
        let style = magnetic_style(&tracker, Some(rect), 0.3);
        assert!(style.starts_with("transform: translate(0.00px, 0.00px);"));
    }
}
