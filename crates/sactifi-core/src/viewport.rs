//! Viewport observation with one-shot visibility latches.
//!
//! Each tracked page region flips from "not yet seen" to "seen" the
//! first time its bounding box intersects the (optionally inset)
//! viewport, and never flips back. Scrolling a region out and in again
//! must not replay its entrance animation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Pixel margin applied to the viewport before testing intersection.
///
/// Negative values shrink the viewport so an element latches slightly
/// after its edge first appears; positive values latch early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMargin(pub f64);

impl ViewportMargin {
    /// Margin used for whole page sections.
    pub const SECTION: ViewportMargin = ViewportMargin(-100.0);
    /// Margin used for staggered child containers.
    pub const STAGGER: ViewportMargin = ViewportMargin(-50.0);
    /// No inset at all.
    pub const NONE: ViewportMargin = ViewportMargin(0.0);
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self::SECTION
    }
}

/// A page region being watched for its first viewport entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedElement {
    pub key: String,
    pub margin: ViewportMargin,
    /// Monotonic: false → true, never back.
    pub visible: bool,
}

impl TrackedElement {
    fn new(key: String, margin: ViewportMargin) -> Self {
        Self {
            key,
            margin,
            visible: false,
        }
    }
}

/// Tracks many regions by key, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    elements: HashMap<String, TrackedElement>,
    order: Vec<String>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Re-tracking an existing key keeps its latch.
    pub fn track(&mut self, key: impl Into<String>, margin: ViewportMargin) -> &TrackedElement {
        let key = key.into();
        if !self.elements.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.elements
            .entry(key.clone())
            .or_insert_with(|| TrackedElement::new(key, margin))
    }

    /// Stop watching `key` (its region unmounted).
    pub fn untrack(&mut self, key: &str) -> Option<TrackedElement> {
        self.order.retain(|k| k != key);
        self.elements.remove(key)
    }

    /// Feed a fresh layout measurement for `key`.
    ///
    /// `rect` is `None` when the region could not be measured; that is
    /// treated as not visible. Returns `true` only on the call that
    /// flips the latch.
    pub fn observe(&mut self, key: &str, rect: Option<Rect>, viewport: Rect) -> bool {
        if !self.would_latch(key, rect, viewport) {
            return false;
        }
        let Some(element) = self.elements.get_mut(key) else {
            return false;
        };
        element.visible = true;
        tracing::debug!(key = %element.key, "region entered viewport");
        true
    }

    /// Whether [`observe`](Self::observe) with the same arguments would
    /// flip the latch. Does not mutate.
    pub fn would_latch(&self, key: &str, rect: Option<Rect>, viewport: Rect) -> bool {
        let Some(element) = self.elements.get(key) else {
            return false;
        };
        if element.visible || !viewport.is_measurable() {
            return false;
        }
        rect.filter(Rect::is_measurable)
            .is_some_and(|rect| intersects_with_margin(&rect, &viewport, element.margin))
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.elements.get(key).is_some_and(|e| e.visible)
    }

    pub fn is_tracked(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Keys that have not latched yet, in registration order.
    pub fn pending(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|k| !self.is_visible(k))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Whether `rect` overlaps `viewport` after insetting it by `margin`.
///
/// A zero-height region still counts when its line falls strictly
/// inside the inset viewport, so collapsed placeholders can latch.
pub fn intersects_with_margin(rect: &Rect, viewport: &Rect, margin: ViewportMargin) -> bool {
    let area = viewport.inset(margin.0);
    if rect.size.width == 0.0 || rect.size.height == 0.0 {
        return rect.left() <= area.right()
            && rect.right() >= area.left()
            && rect.top() > area.top()
            && rect.bottom() < area.bottom();
    }
    rect.intersects(&area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn below_fold_is_not_visible() {
        let mut obs = ViewportObserver::new();
        obs.track("about", ViewportMargin::SECTION);
        let flipped = obs.observe("about", Some(Rect::new(0.0, 900.0, 1280.0, 600.0)), viewport());
        assert!(!flipped);
        assert!(!obs.is_visible("about"));
    }

    #[test]
    fn margin_delays_latch() {
        let mut obs = ViewportObserver::new();
        obs.track("about", ViewportMargin::SECTION);
        // Top edge 50px above the bottom: inside the raw viewport but
        // not inside the 100px-inset one.
        let peeking = Rect::new(0.0, 750.0, 1280.0, 600.0);
        assert!(!obs.observe("about", Some(peeking), viewport()));

        let entered = Rect::new(0.0, 600.0, 1280.0, 600.0);
        assert!(obs.observe("about", Some(entered), viewport()));
        assert!(obs.is_visible("about"));
    }

    #[test]
    fn latch_never_reverts() {
        let mut obs = ViewportObserver::new();
        obs.track("team", ViewportMargin::NONE);
        assert!(obs.observe("team", Some(Rect::new(0.0, 100.0, 100.0, 100.0)), viewport()));
        // Scrolled far away, then unmeasurable.
        assert!(!obs.observe("team", Some(Rect::new(0.0, 5000.0, 100.0, 100.0)), viewport()));
        assert!(!obs.observe("team", None, viewport()));
        assert!(obs.is_visible("team"));
    }

    #[test]
    fn would_latch_is_a_dry_run() {
        let mut obs = ViewportObserver::new();
        obs.track("projects", ViewportMargin::STAGGER);
        let inside = Some(Rect::new(0.0, 200.0, 1280.0, 400.0));
        assert!(obs.would_latch("projects", inside, viewport()));
        assert!(!obs.is_visible("projects"));
        assert!(obs.observe("projects", inside, viewport()));
        assert!(!obs.would_latch("projects", inside, viewport()));
    }

    #[test]
    fn unmeasured_region_is_not_visible() {
        let mut obs = ViewportObserver::new();
        obs.track("contact", ViewportMargin::NONE);
        assert!(!obs.observe("contact", None, viewport()));
        let garbage = Rect::new(f64::NAN, f64::NAN, 0.0, 0.0);
        assert!(!obs.observe("contact", Some(garbage), viewport()));
        assert!(!obs.is_visible("contact"));
    }

    #[test]
    fn untracked_key_is_ignored() {
        let mut obs = ViewportObserver::new();
        assert!(!obs.observe("ghost", Some(viewport()), viewport()));
        assert!(!obs.is_visible("ghost"));
    }

    #[test]
    fn retrack_keeps_latch_and_order() {
        let mut obs = ViewportObserver::new();
        obs.track("a", ViewportMargin::NONE);
        obs.track("b", ViewportMargin::NONE);
        obs.observe("a", Some(Rect::new(0.0, 0.0, 10.0, 10.0)), viewport());
        obs.track("a", ViewportMargin::SECTION);
        assert!(obs.is_visible("a"));
        assert_eq!(obs.pending(), vec!["b".to_string()]);
        assert_eq!(obs.len(), 2);
    }

    #[test]
    fn untrack_removes_element() {
        let mut obs = ViewportObserver::new();
        obs.track("footer", ViewportMargin::NONE);
        assert!(obs.untrack("footer").is_some());
        assert!(!obs.is_tracked("footer"));
        assert!(obs.pending().is_empty());
        assert!(obs.is_empty());
    }
}
