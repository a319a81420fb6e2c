//! Motion primitives: easing curves, transitions, visual states and
//! scroll-linked interpolation.
//!
//! Durations and easing are configuration. The renderer tweens between
//! the hidden and resting [`VisualState`] using the CSS produced here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A timing function over normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// The curve used by every reveal on the page.
    pub const STANDARD: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Map `t ∈ [0, 1]` to eased progress. Inputs are clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Solve the bezier for x = t by bisection, then evaluate y.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    fn axis(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut s = t;
    for _ in 0..48 {
        let x = axis(x1, x2, s);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    axis(y1, y2, s)
}

/// Timing for a single property change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::STANDARD,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// CSS shorthand for the given properties, e.g.
    /// `opacity 0.8s cubic-bezier(...) 0.2s, transform 0.8s ...`.
    pub fn css(&self, properties: &[&str]) -> String {
        let easing = self.easing.css();
        properties
            .iter()
            .map(|p| {
                format!(
                    "{p} {}s {easing} {}s",
                    fmt_secs(self.duration),
                    fmt_secs(self.delay)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn fmt_secs(d: Duration) -> String {
    let ms = d.as_millis();
    if ms % 1000 == 0 {
        format!("{}", ms / 1000)
    } else {
        let s = format!("{:.3}", d.as_secs_f64());
        s.trim_end_matches('0').to_string()
    }
}

/// Transform + opacity snapshot of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_x: f64,
}

impl VisualState {
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    /// Linear blend, `t = 0` is `self`, `t = 1` is `to`.
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
        }
    }

    /// Inline CSS for `opacity` and `transform`.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotateX({}deg);",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotate_x
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Direction an element travels from while revealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealDirection {
    /// Rises from below.
    #[default]
    Up,
    Down,
    /// Slides in from the right.
    Left,
    Right,
}

impl RevealDirection {
    /// Hidden-state offset `(x, y)` for the given travel distance.
    pub fn offset(&self, distance: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (distance, 0.0),
            RevealDirection::Right => (-distance, 0.0),
        }
    }
}

/// The reveal flavours used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPreset {
    /// Section headers and panels: fade plus a 50px rise.
    Section,
    /// Free-standing scroll reveal: fade plus a 60px slide.
    Slide(RevealDirection),
    /// Stagger children: fade, 40px rise and a slight scale-up.
    Card,
    /// Tech tiles: fade and scale from 0.8.
    Scale,
    /// Individual words of a headline: fade, rise and flip up.
    Word,
    /// Opacity only.
    Fade,
}

impl RevealPreset {
    /// Default duration of this preset.
    pub fn duration(&self) -> Duration {
        match self {
            RevealPreset::Section | RevealPreset::Slide(_) => Duration::from_millis(800),
            RevealPreset::Card => Duration::from_millis(600),
            RevealPreset::Scale => Duration::from_millis(400),
            RevealPreset::Word => Duration::from_millis(500),
            RevealPreset::Fade => Duration::from_millis(1000),
        }
    }

    pub fn easing(&self) -> Easing {
        match self {
            RevealPreset::Fade => Easing::EaseOut,
            _ => Easing::STANDARD,
        }
    }

    /// Where the element starts before its reveal.
    pub fn hidden(&self) -> VisualState {
        let base = VisualState {
            opacity: 0.0,
            ..VisualState::REST
        };
        match self {
            RevealPreset::Section => VisualState {
                translate_y: 50.0,
                ..base
            },
            RevealPreset::Slide(direction) => {
                let (x, y) = direction.offset(60.0);
                VisualState {
                    translate_x: x,
                    translate_y: y,
                    ..base
                }
            }
            RevealPreset::Card => VisualState {
                translate_y: 40.0,
                scale: 0.95,
                ..base
            },
            RevealPreset::Scale => VisualState { scale: 0.8, ..base },
            RevealPreset::Word => VisualState {
                translate_y: 20.0,
                rotate_x: 90.0,
                ..base
            },
            RevealPreset::Fade => base,
        }
    }

    /// Where every preset comes to rest.
    pub fn resting(&self) -> VisualState {
        VisualState::REST
    }
}

/// Scroll position of the page's scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    pub offset: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollProgress {
    /// Fraction of the scrollable distance covered, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.content_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

/// Clamped linear map from `input` onto `output`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Vertical drift of a parallax layer, in pixels.
pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    interpolate(progress, (0.0, 1.0), (0.0, speed * 100.0))
}

/// `(scale, opacity)` of a scale-on-scroll element.
pub fn scale_on_scroll(progress: f64) -> (f64, f64) {
    (
        interpolate(progress, (0.0, 0.5), (0.8, 1.0)),
        interpolate(progress, (0.0, 0.3), (0.6, 1.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::STANDARD] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn standard_curve_is_monotone() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = Easing::STANDARD.apply(i as f64 / 100.0);
            assert!(y + 1e-9 >= prev, "dip at {i}: {y} < {prev}");
            prev = y;
        }
    }

    #[test]
    fn transition_css() {
        let t = Transition::new(Duration::from_millis(800)).with_delay(Duration::from_millis(150));
        assert_eq!(
            t.css(&["opacity"]),
            "opacity 0.8s cubic-bezier(0.25, 0.1, 0.25, 1) 0.15s"
        );
        let t = Transition::new(Duration::from_secs(1)).with_easing(Easing::Linear);
        assert_eq!(
            t.css(&["opacity", "transform"]),
            "opacity 1s linear 0s, transform 1s linear 0s"
        );
    }

    #[test]
    fn slide_offsets_follow_direction() {
        assert_eq!(RevealPreset::Slide(RevealDirection::Up).hidden().translate_y, 60.0);
        assert_eq!(RevealPreset::Slide(RevealDirection::Down).hidden().translate_y, -60.0);
        assert_eq!(RevealPreset::Slide(RevealDirection::Left).hidden().translate_x, 60.0);
        assert_eq!(RevealPreset::Slide(RevealDirection::Right).hidden().translate_x, -60.0);
    }

    #[test]
    fn every_preset_rests_at_identity() {
        for preset in [
            RevealPreset::Section,
            RevealPreset::Card,
            RevealPreset::Scale,
            RevealPreset::Word,
        ] {
            assert_eq!(preset.resting(), VisualState::REST);
            assert_eq!(preset.hidden().opacity, 0.0);
        }
    }

    #[test]
    fn lerp_midpoint() {
        let hidden = RevealPreset::Card.hidden();
        let mid = hidden.lerp(&VisualState::REST, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 20.0).abs() < 1e-9);
        assert!((mid.scale - 0.975).abs() < 1e-9);
    }

    #[test]
    fn scroll_progress_without_overflow_is_zero() {
        let p = ScrollProgress {
            offset: 0.0,
            content_height: 500.0,
            viewport_height: 800.0,
        };
        assert_eq!(p.progress(), 0.0);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        let p = ScrollProgress {
            offset: 5000.0,
            content_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(p.progress(), 1.0);
        let p = ScrollProgress { offset: 1000.0, ..p };
        assert_eq!(p.progress(), 0.5);
    }

    #[test]
    fn scroll_linked_maps() {
        assert_eq!(parallax_offset(0.5, 0.5), 25.0);
        let (scale, opacity) = scale_on_scroll(0.0);
        assert!((scale - 0.8).abs() < 1e-9 && (opacity - 0.6).abs() < 1e-9);
        let (scale, opacity) = scale_on_scroll(1.0);
        assert!((scale - 1.0).abs() < 1e-9 && (opacity - 1.0).abs() < 1e-9);
        assert_eq!(interpolate(3.0, (2.0, 2.0), (7.0, 9.0)), 7.0);
    }
}
