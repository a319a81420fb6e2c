//! Reveal Components
//!
//! Entrance animations driven by viewport latches:
//! - `Reveal`: observes itself and animates once when first seen
//! - `StaggerItem`: child of an observed container, delayed by its index
//! - `TextReveal`: headline whose words flip up one after another
//!
//! Styles come from [`RevealSequencer::style`], so a child sits in its
//! hidden pose until the latch and then transitions to rest after its
//! stagger delay. The element's class follows its [`RevealPhase`]
//! (`reveal--hidden`, `reveal--entering`, `reveal--visible`).

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use sactifi_core::reveal::word_reveal;
use sactifi_core::{
    RevealPhase, RevealPreset, RevealSequencer, RevealTimeline, Transition, ViewportMargin,
};

use crate::viewport::use_in_view;

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Observer key, unique on the page
    pub key_name: String,
    /// Content to reveal
    pub children: Element,
    /// Entrance style
    #[props(default = RevealPreset::Section)]
    pub preset: RevealPreset,
    /// Delay after the latch before the entrance starts
    #[props(default)]
    pub delay: Duration,
    /// Entrance duration; the preset's own when unset
    #[props(default)]
    pub duration: Option<Duration>,
    /// Viewport inset for the latch
    #[props(default = ViewportMargin::SECTION)]
    pub margin: ViewportMargin,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Self-observing entrance animation
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { key_name: "about-heading".to_string(),
///         h2 { "Building Tomorrow's" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let in_view = use_in_view(props.key_name.clone(), props.margin);
    let mut sequencer =
        RevealSequencer::new(props.preset, Duration::ZERO).with_base_delay(props.delay);
    if let Some(duration) = props.duration {
        sequencer = sequencer.with_duration(duration);
    }
    let latched = in_view.visible();
    let style = sequencer.style(0, latched);
    let phase = use_reveal_phase(sequencer.timeline(0), latched);
    let class = super::button::join_classes(phase.class(), props.class.as_deref());

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: move |e| in_view.mounted(e),
            {props.children}
        }
    }
}

/// Properties for the StaggerItem component
#[derive(Clone, PartialEq, Props)]
pub struct StaggerItemProps {
    /// Position within the parent group
    pub index: usize,
    /// Whether the parent container has latched
    pub visible: bool,
    /// Timing shared by the whole group
    pub sequencer: RevealSequencer,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

/// Wait before a freshly mounted item may start its entrance, so its
/// hidden pose is painted once and the transition has a start state.
const FIRST_FRAME: Duration = Duration::from_millis(16);

/// A child of a staggered container
///
/// An item mounted into an already-visible group (a filter switch, a
/// re-keyed detail panel) still renders hidden for one frame and then
/// animates in.
#[component]
pub fn StaggerItem(props: StaggerItemProps) -> Element {
    let mut painted = use_signal(|| false);
    let latched = props.visible && painted();
    let style = item_style(&props.sequencer, props.index, props.visible, painted());
    let phase = use_reveal_phase(props.sequencer.timeline(props.index), latched);
    let base = format!("stagger-item {}", phase.class());
    let class = super::button::join_classes(&base, props.class.as_deref());

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: move |_| {
                spawn(async move {
                    tokio::time::sleep(FIRST_FRAME).await;
                    painted.set(true);
                });
            },
            {props.children}
        }
    }
}

fn item_style(
    sequencer: &RevealSequencer,
    index: usize,
    group_visible: bool,
    painted: bool,
) -> String {
    sequencer.style(index, group_visible && painted)
}

/// Phase of one element's entrance, advanced on the timeline's own
/// schedule once `latched` turns true. Never moves backwards.
pub fn use_reveal_phase(timeline: RevealTimeline, latched: bool) -> RevealPhase {
    let mut phase = use_signal(|| RevealPhase::Hidden);
    let started = use_hook(|| Rc::new(Cell::new(false)));

    if latched && !started.get() {
        started.set(true);
        spawn(async move {
            let start = tokio::time::Instant::now();
            for (at, next) in phase_steps(timeline) {
                tokio::time::sleep_until(start + at).await;
                if *phase.peek() != next {
                    phase.set(next);
                }
            }
        });
    }

    phase()
}

/// When, after the latch, each phase change happens.
fn phase_steps(timeline: RevealTimeline) -> [(Duration, RevealPhase); 2] {
    [timeline.delay, timeline.settles_after()].map(|at| (at, timeline.phase_at(Some(at))))
}

/// Headline whose words flip into place one after another.
///
/// Words are split on whitespace and staggered 50ms apart after
/// `base_delay`.
#[component]
pub fn TextReveal(
    text: String,
    visible: bool,
    #[props(default)] base_delay: Duration,
    #[props(default)] class: Option<String>,
) -> Element {
    let words = word_styles(&text, base_delay, visible);
    let class = super::button::join_classes("text-reveal", class.as_deref());

    rsx! {
        span { class: "{class}", "aria-label": "{text}",
            for (i, (word, style)) in words.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: "text-reveal-word",
                    "aria-hidden": "true",
                    style: "{style}",
                    "{word}"
                }
                " "
            }
        }
    }
}

/// Inline style for each word of `text`.
fn word_styles(text: &str, base_delay: Duration, visible: bool) -> Vec<(String, String)> {
    let preset = RevealPreset::Word;
    word_reveal(text, base_delay)
        .into_iter()
        .map(|w| {
            let style = if visible {
                let transition = Transition::new(preset.duration())
                    .with_delay(w.delay)
                    .with_easing(preset.easing());
                format!(
                    "display: inline-block; {} transition: {};",
                    preset.resting().css(),
                    transition.css(&["opacity", "transform"])
                )
            } else {
                format!("display: inline-block; {}", preset.hidden().css())
            };
            (w.word, style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_words_have_no_transition() {
        let styles = word_styles("Empowering Innovation", Duration::ZERO, false);
        assert_eq!(styles.len(), 2);
        assert!(styles.iter().all(|(_, s)| !s.contains("transition")));
        assert!(styles[0].1.contains("opacity: 0"));
    }

    #[test]
    fn visible_words_are_staggered() {
        let styles = word_styles("One Two Three", Duration::from_millis(200), true);
        assert_eq!(styles[0].0, "One");
        assert!(styles[0].1.contains(" 0.2s;"));
        assert!(styles[1].1.contains(" 0.25s;"));
        assert!(styles[2].1.contains(" 0.3s;"));
    }

    #[test]
    fn newly_mounted_item_starts_hidden_in_visible_group() {
        let seq = RevealSequencer::new(RevealPreset::Card, Duration::from_millis(150));
        let first_frame = item_style(&seq, 0, true, false);
        assert!(first_frame.starts_with("opacity: 0;"));
        assert!(!first_frame.contains("transition"));

        let settled = item_style(&seq, 0, true, true);
        assert!(settled.contains("transition"));
    }

    #[test]
    fn hidden_group_keeps_painted_items_hidden() {
        let seq = RevealSequencer::new(RevealPreset::Card, Duration::from_millis(150));
        assert!(item_style(&seq, 2, false, true).starts_with("opacity: 0;"));
    }

    #[test]
    fn phases_advance_at_delay_then_settle() {
        let timeline = RevealTimeline::new(Duration::from_millis(300), Duration::from_millis(600));
        assert_eq!(
            phase_steps(timeline),
            [
                (Duration::from_millis(300), RevealPhase::Entering),
                (Duration::from_millis(900), RevealPhase::Visible),
            ]
        );
        assert_eq!(RevealPhase::Visible.class(), "reveal reveal--visible");
    }

    #[test]
    fn empty_headline_has_no_words() {
        assert!(word_styles("   ", Duration::ZERO, true).is_empty());
    }
}
