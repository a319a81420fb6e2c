//! Site configuration.
//!
//! Loaded from an optional JSON file; every key has a default so a
//! partial file (or none at all) is valid.
//!
//! ```json
//! {
//!   "motion": { "stagger_ms": 120 },
//!   "contact": { "simulated_latency_ms": 1500 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::form::SimulatedSender;
use crate::motion::RevealPreset;
use crate::page::NavbarState;
use crate::reveal::RevealSequencer;
use crate::viewport::ViewportMargin;

/// Animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Duration of section header and panel reveals.
    pub section_duration_ms: u64,
    /// Duration of individual grid card reveals.
    pub card_duration_ms: u64,
    /// Delay between consecutive cards in a grid.
    pub stagger_ms: u64,
    /// Delay between consecutive tech tiles.
    pub tile_stagger_ms: u64,
    /// Viewport inset for section latches, negative shrinks.
    pub section_margin_px: f64,
    /// Viewport inset for staggered containers.
    pub stagger_margin_px: f64,
    /// Maximum card tilt in degrees.
    pub tilt_max_deg: f64,
    /// Fraction of the pointer offset applied by magnetic elements.
    pub magnetic_strength: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            section_duration_ms: 800,
            card_duration_ms: 600,
            stagger_ms: 150,
            tile_stagger_ms: 50,
            section_margin_px: ViewportMargin::SECTION.0,
            stagger_margin_px: ViewportMargin::STAGGER.0,
            tilt_max_deg: 8.0,
            magnetic_strength: 0.3,
        }
    }
}

impl MotionConfig {
    pub fn section_margin(&self) -> ViewportMargin {
        ViewportMargin(self.section_margin_px)
    }

    pub fn stagger_margin(&self) -> ViewportMargin {
        ViewportMargin(self.stagger_margin_px)
    }

    pub fn section_duration(&self) -> Duration {
        Duration::from_millis(self.section_duration_ms)
    }

    /// Sequencer for a section's heading and panels.
    pub fn section_sequencer(&self) -> RevealSequencer {
        RevealSequencer::new(RevealPreset::Section, Duration::from_millis(200))
            .with_duration(self.section_duration())
    }

    /// Sequencer for a grid of cards.
    pub fn card_sequencer(&self) -> RevealSequencer {
        RevealSequencer::new(RevealPreset::Card, Duration::from_millis(self.stagger_ms))
            .with_duration(Duration::from_millis(self.card_duration_ms))
    }

    /// Sequencer for the tech tile grid.
    pub fn tile_sequencer(&self) -> RevealSequencer {
        RevealSequencer::new(RevealPreset::Scale, Duration::from_millis(self.tile_stagger_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub simulated_latency_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: SimulatedSender::DEFAULT_LATENCY.as_millis() as u64,
        }
    }
}

impl ContactConfig {
    pub fn sender(&self) -> SimulatedSender {
        SimulatedSender::new(Duration::from_millis(self.simulated_latency_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: NavbarState::DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub motion: MotionConfig,
    pub contact: ContactConfig,
    pub navbar: NavbarConfig,
    pub toast: ToastConfig,
}

impl SiteConfig {
    /// Parse a JSON document; missing keys take defaults.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> SiteResult<()> {
        let m = &self.motion;
        if !m.section_margin_px.is_finite() || !m.stagger_margin_px.is_finite() {
            return Err(SiteError::Config("viewport margins must be finite".into()));
        }
        if !(0.0..=90.0).contains(&m.tilt_max_deg) {
            return Err(SiteError::Config(format!(
                "tilt_max_deg must be within 0..=90, got {}",
                m.tilt_max_deg
            )));
        }
        if !(0.0..=1.0).contains(&m.magnetic_strength) {
            return Err(SiteError::Config(format!(
                "magnetic_strength must be within 0..=1, got {}",
                m.magnetic_strength
            )));
        }
        if !self.navbar.scroll_threshold_px.is_finite() {
            return Err(SiteError::Config("scroll_threshold_px must be finite".into()));
        }
        Ok(())
    }
}
