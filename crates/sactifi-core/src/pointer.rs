//! Pointer tracking and the visual values derived from it.
//!
//! A [`PointerTracker`] turns raw pointer positions into a normalized
//! sample in `[-0.5, 0.5]²` relative to its region. Tilt, glare and
//! magnetic pull are pure functions of that sample. One tracker per
//! interactive card; trackers share nothing.

use crate::geometry::{Point, Rect, Size};

/// Pointer position relative to a region, centre = `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    /// Centre of the region; the rest position after a leave.
    pub const NEUTRAL: PointerSample = PointerSample { x: 0.0, y: 0.0 };

    /// Sample for `pointer` inside `region`, or `None` when the region
    /// cannot be measured, has no area, or does not contain the pointer.
    pub fn within(pointer: Point, region: Rect) -> Option<PointerSample> {
        if !region.is_measurable() || region.size.width <= 0.0 || region.size.height <= 0.0 {
            return None;
        }
        if !region.contains(pointer) {
            return None;
        }
        Some(PointerSample {
            x: (pointer.x - region.left()) / region.size.width - 0.5,
            y: (pointer.y - region.top()) / region.size.height - 0.5,
        })
    }

    /// Position as percentages `[0, 100]²` for placing radial effects.
    pub fn percent(&self) -> (f64, f64) {
        ((self.x + 0.5) * 100.0, (self.y + 0.5) * 100.0)
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Tracks the pointer over one region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    sample: PointerSample,
    hovering: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer-move. Positions outside the region are ignored.
    /// Returns whether the sample or the hover flag changed.
    pub fn move_to(&mut self, pointer: Point, region: Rect) -> bool {
        match PointerSample::within(pointer, region) {
            Some(sample) => {
                let changed = sample != self.sample || !self.hovering;
                self.sample = sample;
                self.hovering = true;
                changed
            }
            None => false,
        }
    }

    /// Handle a pointer-leave: snap back to centre.
    pub fn leave(&mut self) {
        self.sample = PointerSample::NEUTRAL;
        self.hovering = false;
    }

    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

/// 3D tilt of a card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt used by interactive cards.
    pub const CARD_MAX_DEG: f64 = 8.0;

    /// Top edge tips toward the viewer; `±0.5` maps to `∓max_deg` on X
    /// and `±max_deg` on Y.
    pub fn from_sample(sample: PointerSample, max_deg: f64) -> Tilt {
        Tilt {
            rotate_x: -sample.y * 2.0 * max_deg,
            rotate_y: sample.x * 2.0 * max_deg,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); \
             transform-style: preserve-3d;",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Centre of the glare gradient that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glare {
    pub pct_x: f64,
    pub pct_y: f64,
}

impl Glare {
    pub fn from_sample(sample: PointerSample) -> Glare {
        let (pct_x, pct_y) = sample.percent();
        Glare { pct_x, pct_y }
    }

    pub fn css(&self, radius_px: u32) -> String {
        format!(
            "background: radial-gradient({radius_px}px circle at {:.1}% {:.1}%, \
             var(--primary-glow), transparent 40%);",
            self.pct_x, self.pct_y
        )
    }
}

/// Translation of an element toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticPull {
    pub dx: f64,
    pub dy: f64,
}

impl MagneticPull {
    pub const DEFAULT_STRENGTH: f64 = 0.3;

    /// The pull is the pointer's offset from centre in pixels, scaled by
    /// `strength`. Zero at the centre and after a leave.
    pub fn from_sample(sample: PointerSample, size: Size, strength: f64) -> MagneticPull {
        MagneticPull {
            dx: sample.x * size.width * strength,
            dy: sample.y * size.height * strength,
        }
    }

    pub fn css(&self) -> String {
        format!("transform: translate({:.2}px, {:.2}px);", self.dx, self.dy)
    }
}

/// Viewport-wide soft glow that follows the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorGlow {
    position: Point,
    visible: bool,
}

impl CursorGlow {
    /// Half the glow's 200px diameter.
    pub const RADIUS: f64 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, pointer: Point) {
        self.position = pointer;
        self.visible = true;
    }

    /// The cursor left the window.
    pub fn leave(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Top-left corner so the glow is centred on the cursor.
    pub fn top_left(&self) -> Point {
        Point::new(self.position.x - Self::RADIUS, self.position.y - Self::RADIUS)
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            0.15
        } else {
            0.0
        }
    }

    pub fn scale(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.8
        }
    }

    pub fn css(&self) -> String {
        let corner = self.top_left();
        format!(
            "left: {}px; top: {}px; opacity: {}; transform: scale({});",
            corner.x,
            corner.y,
            self.opacity(),
            self.scale()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect::new(40.0, 60.0, 200.0, 100.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn corner_center_and_leave() {
        let mut tracker = PointerTracker::new();

        tracker.move_to(Point::new(40.0, 60.0), card());
        let s = tracker.sample();
        assert!(close(s.x, -0.5) && close(s.y, -0.5));

        tracker.move_to(Point::new(140.0, 110.0), card());
        assert!(tracker.sample().is_neutral());
        assert!(tracker.is_hovering());

        tracker.move_to(Point::new(240.0, 160.0), card());
        tracker.leave();
        assert_eq!(tracker.sample(), PointerSample::NEUTRAL);
        assert!(!tracker.is_hovering());
    }

    #[test]
    fn entering_at_centre_starts_hovering() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.move_to(Point::new(140.0, 110.0), card()));
        assert!(tracker.is_hovering());
        assert!(!tracker.move_to(Point::new(140.0, 110.0), card()));
    }

    #[test]
    fn outside_pointer_is_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Point::new(90.0, 85.0), card());
        let before = tracker.sample();
        assert!(!tracker.move_to(Point::new(500.0, 500.0), card()));
        assert_eq!(tracker.sample(), before);
    }

    #[test]
    fn unmeasured_region_leaves_neutral() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.move_to(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 0.0, 0.0)));
        assert!(!tracker.move_to(Point::new(0.0, 0.0), Rect::new(f64::NAN, 0.0, 10.0, 10.0)));
        assert!(tracker.sample().is_neutral());
    }

    #[test]
    fn trackers_are_independent() {
        let mut a = PointerTracker::new();
        let b = PointerTracker::new();
        a.move_to(Point::new(40.0, 60.0), card());
        assert!(!a.sample().is_neutral());
        assert!(b.sample().is_neutral());
    }

    #[test]
    fn tilt_and_glare_ranges() {
        let corner = PointerSample { x: -0.5, y: -0.5 };
        let tilt = Tilt::from_sample(corner, Tilt::CARD_MAX_DEG);
        assert_eq!(tilt.rotate_x, 8.0);
        assert_eq!(tilt.rotate_y, -8.0);
        let glare = Glare::from_sample(corner);
        assert_eq!((glare.pct_x, glare.pct_y), (0.0, 0.0));

        let neutral = Tilt::from_sample(PointerSample::NEUTRAL, Tilt::CARD_MAX_DEG);
        assert_eq!(neutral, Tilt::default());
        assert_eq!(PointerSample::NEUTRAL.percent(), (50.0, 50.0));
    }

    #[test]
    fn magnetic_pull_toward_cursor() {
        let size = Size::new(200.0, 100.0);
        let pull = MagneticPull::from_sample(PointerSample { x: 0.25, y: -0.5 }, size, 0.3);
        assert!(close(pull.dx, 15.0));
        assert!(close(pull.dy, -15.0));
        assert_eq!(
            MagneticPull::from_sample(PointerSample::NEUTRAL, size, 0.3),
            MagneticPull::default()
        );
    }

    #[test]
    fn cursor_glow_centres_on_pointer() {
        let mut glow = CursorGlow::new();
        assert_eq!(glow.opacity(), 0.0);
        glow.move_to(Point::new(300.0, 250.0));
        assert_eq!(glow.top_left(), Point::new(200.0, 150.0));
        assert_eq!(glow.opacity(), 0.15);
        assert_eq!(glow.scale(), 1.0);
        glow.leave();
        assert!(!glow.is_visible());
        assert_eq!(glow.scale(), 0.8);
    }
}
