//! Reveal sequencing: staggered entrance timelines.
//!
//! Each animated element runs an explicit state machine
//!
//! ```text
//! Hidden ──(latch + delay)──▶ Entering ──(duration)──▶ Visible
//! ```
//!
//! where the latch comes from the parent region's viewport observer and
//! the delay is `base + index * interval` in insertion order.

use std::time::Duration;

use crate::motion::{RevealPreset, Transition};

/// Phase of a single element's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
}

impl RevealPhase {
    /// CSS class for this phase.
    pub fn class(&self) -> &'static str {
        match self {
            RevealPhase::Hidden => "reveal reveal--hidden",
            RevealPhase::Entering => "reveal reveal--entering",
            RevealPhase::Visible => "reveal reveal--visible",
        }
    }
}

/// Delay and duration of one element's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimeline {
    pub delay: Duration,
    pub duration: Duration,
}

impl RevealTimeline {
    pub fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }

    /// Phase at `elapsed` time since the parent latched, or `Hidden` if
    /// it has not latched yet.
    pub fn phase_at(&self, elapsed: Option<Duration>) -> RevealPhase {
        let Some(elapsed) = elapsed else {
            return RevealPhase::Hidden;
        };
        if elapsed < self.delay {
            RevealPhase::Hidden
        } else if elapsed < self.delay + self.duration {
            RevealPhase::Entering
        } else {
            RevealPhase::Visible
        }
    }

    /// Time from latch until the element is at rest.
    pub fn settles_after(&self) -> Duration {
        self.delay + self.duration
    }
}

/// An ordered group of elements revealed one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerGroup {
    base_delay: Duration,
    interval: Duration,
    keys: Vec<String>,
}

impl StaggerGroup {
    pub fn new(base_delay: Duration, interval: Duration) -> Self {
        Self {
            base_delay,
            interval,
            keys: Vec::new(),
        }
    }

    /// Append an element; its position is its insertion index.
    pub fn push(&mut self, key: impl Into<String>) -> usize {
        self.keys.push(key.into());
        self.keys.len() - 1
    }

    /// `base + index * interval`. Defined for any index.
    pub fn delay_of(&self, index: usize) -> Duration {
        self.base_delay + self.interval * index as u32
    }

    /// Delay for `key`, if it is a member.
    pub fn delay_for(&self, key: &str) -> Option<Duration> {
        self.keys.iter().position(|k| k == key).map(|i| self.delay_of(i))
    }

    /// All delays in insertion order.
    pub fn delays(&self) -> Vec<Duration> {
        (0..self.keys.len()).map(|i| self.delay_of(i)).collect()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Computes per-child timelines and inline styles for one preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSequencer {
    pub preset: RevealPreset,
    pub base_delay: Duration,
    pub interval: Duration,
    pub duration: Duration,
}

impl RevealSequencer {
    pub fn new(preset: RevealPreset, interval: Duration) -> Self {
        Self {
            preset,
            base_delay: Duration::ZERO,
            interval,
            duration: preset.duration(),
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn delay_of(&self, index: usize) -> Duration {
        self.base_delay + self.interval * index as u32
    }

    pub fn timeline(&self, index: usize) -> RevealTimeline {
        RevealTimeline::new(self.delay_of(index), self.duration)
    }

    /// Timelines for `n` children. `n = 0` yields nothing.
    pub fn schedule(&self, n: usize) -> Vec<RevealTimeline> {
        (0..n).map(|i| self.timeline(i)).collect()
    }

    /// Inline style for child `index`.
    ///
    /// Before the latch the child sits in its hidden state with no
    /// transition, so it does not animate while hidden. After the latch
    /// it targets its resting state with a transition delayed by its
    /// stagger offset.
    pub fn style(&self, index: usize, latched: bool) -> String {
        if !latched {
            return self.preset.hidden().css();
        }
        let transition = Transition::new(self.duration)
            .with_delay(self.delay_of(index))
            .with_easing(self.preset.easing());
        format!(
            "{} transition: {};",
            self.preset.resting().css(),
            transition.css(&["opacity", "transform"])
        )
    }
}

/// A word of a headline with its own reveal delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReveal {
    pub word: String,
    pub delay: Duration,
}

/// Per-word stagger used for headline text.
const WORD_STAGGER: Duration = Duration::from_millis(50);

/// Split `text` on whitespace and stagger the words by 50ms.
pub fn word_reveal(text: &str, base_delay: Duration) -> Vec<WordReveal> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| WordReveal {
            word: word.to_string(),
            delay: base_delay + WORD_STAGGER * i as u32,
        })
        .collect()
}
