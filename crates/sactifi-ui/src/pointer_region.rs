//! Pointer tracking against a live element box.
//!
//! The hovered element is re-measured on every pointer-move, so a card
//! that scrolls or reflows under a resting pointer is sampled against
//! where it is now rather than where it was on enter.
//!
//! ```ignore
//! let pointer = use_pointer_region();
//! rsx! {
//!     div {
//!         onmounted: move |e| pointer.mounted(e),
//!         onmouseenter: move |_| pointer.enter(),
//!         onmousemove: move |e| pointer.moved(e.client_coordinates()),
//!         onmouseleave: move |_| pointer.leave(),
//!     }
//! }
//! ```

use std::rc::Rc;

use dioxus::html::geometry::ClientPoint;
use dioxus::prelude::*;
use sactifi_core::{Point, PointerTracker, Rect};

use crate::viewport::to_rect;

/// Per-element pointer state. All fields are signals, so the handle is
/// `Copy` and moves into event handlers freely.
#[derive(Clone, Copy)]
pub struct PointerRegion {
    tracker: Signal<PointerTracker>,
    region: Signal<Option<Rect>>,
    handle: Signal<Option<Rc<MountedData>>>,
    inside: Signal<bool>,
}

pub fn use_pointer_region() -> PointerRegion {
    PointerRegion {
        tracker: use_signal(PointerTracker::new),
        region: use_signal(|| None),
        handle: use_signal(|| None),
        inside: use_signal(|| false),
    }
}

impl PointerRegion {
    /// Current tracker state. Subscribes the caller.
    pub fn tracker(&self) -> PointerTracker {
        *self.tracker.read()
    }

    /// Box from the latest measurement. Subscribes the caller.
    pub fn region(&self) -> Option<Rect> {
        *self.region.read()
    }

    pub fn mounted(mut self, event: MountedEvent) {
        self.handle.set(Some(event.data()));
    }

    pub fn enter(mut self) {
        self.inside.set(true);
    }

    /// Measure the element, then sample `pointer` against that box.
    /// A measurement that lands after the pointer left is dropped.
    pub fn moved(mut self, pointer: ClientPoint) {
        let Some(node) = self.handle.peek().clone() else {
            return;
        };
        let pointer = Point::new(pointer.x, pointer.y);
        spawn(async move {
            let rect = match node.get_client_rect().await {
                Ok(rect) => to_rect(rect),
                Err(e) => {
                    tracing::debug!(error = ?e, "pointer region not measurable");
                    return;
                }
            };
            let inside = *self.inside.peek();
            if !inside {
                return;
            }
            if *self.region.peek() != Some(rect) {
                self.region.set(Some(rect));
            }
            if let Some(next) = track_against(*self.tracker.peek(), inside, pointer, rect) {
                self.tracker.set(next);
            }
        });
    }

    pub fn leave(mut self) {
        self.inside.set(false);
        self.tracker.write().leave();
    }
}

/// The tracker after sampling `pointer` against a fresh `rect`, or
/// `None` when nothing changed or the pointer has already left.
fn track_against(
    mut tracker: PointerTracker,
    inside: bool,
    pointer: Point,
    rect: Rect,
) -> Option<PointerTracker> {
    if !inside {
        return None;
    }
    tracker.move_to(pointer, rect).then_some(tracker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_card_is_sampled_where_it_is_now() {
        let on_enter = Rect::new(0.0, 0.0, 200.0, 100.0);
        let after_scroll = Rect::new(0.0, 300.0, 200.0, 100.0);
        let pointer = Point::new(150.0, 325.0);

        assert!(track_against(PointerTracker::new(), true, pointer, on_enter).is_none());

        let tracker = track_against(PointerTracker::new(), true, pointer, after_scroll).unwrap();
        assert!(tracker.is_hovering());
        assert_eq!(tracker.sample().x, 0.25);
        assert_eq!(tracker.sample().y, -0.25);
    }

    #[test]
    fn late_measurement_after_leave_is_dropped() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let pointer = Point::new(10.0, 10.0);
        assert!(track_against(PointerTracker::new(), false, pointer, rect).is_none());
    }

    #[test]
    fn unchanged_sample_is_not_rewritten() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let pointer = Point::new(50.0, 50.0);
        let tracker = track_against(PointerTracker::new(), true, pointer, rect).unwrap();
        assert!(track_against(tracker, true, pointer, rect).is_none());
    }
}
