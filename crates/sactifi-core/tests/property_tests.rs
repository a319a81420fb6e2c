//! Property-based tests for the interaction state machines
//!
//! Uses proptest to verify the stagger, latch, pointer and selection
//! invariants over arbitrary inputs.

use std::time::Duration;

use proptest::prelude::*;
use sactifi_core::content;
use sactifi_core::{
    Glare, Point, PointerSample, PointerTracker, Rect, RevealPreset, RevealSequencer,
    SelectionPanel, StaggerGroup, Tilt, ViewportMargin, ViewportObserver,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// A region with a strictly positive, reasonably sized box
fn region_strategy() -> impl Strategy<Value = Rect> {
    (-2000.0..2000.0f64, -2000.0..2000.0f64, 1.0..1500.0f64, 1.0..1500.0f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// A region plus a pointer guaranteed to lie inside it
fn region_and_inside_point() -> impl Strategy<Value = (Rect, Point)> {
    (region_strategy(), 0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(r, fx, fy)| {
        let p = Point::new(r.left() + fx * r.size.width, r.top() + fy * r.size.height);
        (r, p)
    })
}

/// Scroll steps: vertical position of a 300px tall region
fn scroll_sequence() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-3000.0..3000.0f64, 1..40)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Delays equal base + i*interval exactly and never decrease
    #[test]
    fn stagger_delays_are_exact_and_monotone(
        base in 0u64..5_000,
        interval in 0u64..1_000,
        n in 0usize..64,
    ) {
        let mut group =
            StaggerGroup::new(Duration::from_millis(base), Duration::from_millis(interval));
        for i in 0..n {
            group.push(format!("child-{i}"));
        }
        let delays = group.delays();
        prop_assert_eq!(delays.len(), n);
        for (i, d) in delays.iter().enumerate() {
            prop_assert_eq!(*d, Duration::from_millis(base + i as u64 * interval));
        }
        for pair in delays.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    /// The sequencer's schedule agrees with a stagger group of the same shape
    #[test]
    fn sequencer_matches_group(interval in 0u64..500, n in 0usize..32) {
        let interval = Duration::from_millis(interval);
        let seq = RevealSequencer::new(RevealPreset::Card, interval);
        let mut group = StaggerGroup::new(Duration::ZERO, interval);
        for i in 0..n {
            group.push(i.to_string());
        }
        let delays: Vec<_> = seq.schedule(n).iter().map(|t| t.delay).collect();
        prop_assert_eq!(delays, group.delays());
    }

    /// Once latched, no scroll sequence un-latches an element
    #[test]
    fn visibility_latch_is_monotone(steps in scroll_sequence()) {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let mut obs = ViewportObserver::new();
        obs.track("section", ViewportMargin::SECTION);

        let mut seen = false;
        for y in steps {
            obs.observe("section", Some(Rect::new(0.0, y, 1280.0, 300.0)), viewport);
            let visible = obs.is_visible("section");
            prop_assert!(!(seen && !visible), "latch reverted at y={}", y);
            seen |= visible;
        }
    }

    /// Samples stay within [-0.5, 0.5] for any pointer inside the region
    #[test]
    fn samples_stay_in_bounds((region, pointer) in region_and_inside_point()) {
        let mut tracker = PointerTracker::new();
        tracker.move_to(pointer, region);
        let s = tracker.sample();
        prop_assert!((-0.5 - 1e-9..=0.5 + 1e-9).contains(&s.x));
        prop_assert!((-0.5 - 1e-9..=0.5 + 1e-9).contains(&s.y));

        let (px, py) = s.percent();
        prop_assert!((-1e-7..=100.0 + 1e-7).contains(&px));
        prop_assert!((-1e-7..=100.0 + 1e-7).contains(&py));

        tracker.leave();
        prop_assert_eq!(tracker.sample(), PointerSample::NEUTRAL);
    }

    /// Tilt and glare are continuous: a small pointer step gives a small change
    #[test]
    fn derivations_are_continuous(
        x in -0.5..0.5f64,
        y in -0.5..0.5f64,
        dx in -1e-3..1e-3f64,
        dy in -1e-3..1e-3f64,
    ) {
        let a = PointerSample { x, y };
        let b = PointerSample { x: x + dx, y: y + dy };
        let (ta, tb) = (Tilt::from_sample(a, 8.0), Tilt::from_sample(b, 8.0));
        prop_assert!((ta.rotate_x - tb.rotate_x).abs() <= 16.0 * 1e-3 + 1e-9);
        prop_assert!((ta.rotate_y - tb.rotate_y).abs() <= 16.0 * 1e-3 + 1e-9);
        let (ga, gb) = (Glare::from_sample(a), Glare::from_sample(b));
        prop_assert!((ga.pct_x - gb.pct_x).abs() <= 0.1 + 1e-9);
        prop_assert!((ga.pct_y - gb.pct_y).abs() <= 0.1 + 1e-9);
    }

    /// Selecting an id outside the project set never changes the active project
    #[test]
    fn unknown_selection_is_a_no_op(known in 1u32..=4, unknown in 5u32..10_000) {
        let mut panel = SelectionPanel::new(content::projects()).unwrap();
        panel.select(&known);
        prop_assert!(!panel.select(&unknown));
        prop_assert_eq!(panel.active_id(), known);
    }
}

/// Fixed scenario: 200x100 region, corner, centre, leave
#[test]
fn pointer_corner_centre_leave() {
    let region = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut tracker = PointerTracker::new();

    tracker.move_to(Point::new(0.0, 0.0), region);
    assert_eq!(tracker.sample(), PointerSample { x: -0.5, y: -0.5 });

    tracker.move_to(Point::new(100.0, 50.0), region);
    assert_eq!(tracker.sample(), PointerSample::NEUTRAL);

    tracker.leave();
    assert_eq!(tracker.sample(), PointerSample::NEUTRAL);
}

/// Fixed scenario: four projects, out-of-range id
#[test]
fn four_projects_out_of_range_id() {
    let mut panel = SelectionPanel::new(content::projects()).unwrap();
    assert_eq!(panel.len(), 4);
    assert!(panel.select(&2));
    assert!(!panel.select(&5));
    assert_eq!(panel.active_id(), 2);
    assert_eq!(panel.current().title, "Smart Agricultural Traceability");
}
