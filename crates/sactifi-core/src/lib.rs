//! SACTIFI Site Core Library
//!
//! Headless view state and animation sequencing for the SACTIFI
//! single-page site.
//!
//! ## Overview
//!
//! The page itself is rendered by Dioxus, but every piece of behaviour
//! lives here so it can be tested without a rendering surface:
//!
//! - **Viewport**: one-shot "has been visible" latches per page region
//! - **Reveal**: staggered entrance timelines (`Hidden → Entering → Visible`)
//! - **Pointer**: normalized pointer samples and the tilt / glare /
//!   magnetic values derived from them
//! - **Selection**: master/detail selection and category filtering
//! - **Form**: the contact form draft and its submission state machine
//!
//! ## Quick Start
//!
//! ```ignore
//! use sactifi_core::{content, SelectionPanel};
//!
//! let mut projects = SelectionPanel::new(content::projects())?;
//! projects.select(&3);
//! println!("{}", projects.current().title);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod geometry;
pub mod logging;
pub mod motion;
pub mod page;
pub mod pointer;
pub mod reveal;
pub mod selection;
pub mod viewport;

// Re-exports
pub use config::SiteConfig;
pub use error::{FormError, SendError, SiteError};
pub use form::{
    ContactForm, ContactFormDraft, ContactSender, ContactSubmission, FormField, FormState,
    PendingSubmit, SimulatedSender, SubmitOutcome,
};
pub use geometry::{Point, Rect, Size};
pub use motion::{Easing, RevealDirection, RevealPreset, ScrollProgress, Transition, VisualState};
pub use page::{NavbarState, PagePart, SectionId, PAGE_ORDER};
pub use pointer::{CursorGlow, Glare, MagneticPull, PointerSample, PointerTracker, Tilt};
pub use reveal::{RevealPhase, RevealSequencer, RevealTimeline, StaggerGroup};
pub use selection::{Categorized, CategoryFilter, Selectable, SelectionPanel};
pub use viewport::{TrackedElement, ViewportMargin, ViewportObserver};
