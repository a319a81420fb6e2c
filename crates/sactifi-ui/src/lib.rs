//! SACTIFI UI Components
//!
//! Dioxus components for the SACTIFI landing page. State lives in
//! `sactifi-core`; these components measure the DOM, feed the core state
//! machines and render the CSS they produce.
//!
//! ## Palette
//!
//! - **Primary (#00d4ff)**: links, active pills, glare and cursor glow
//! - **Accent (#7c3aed)**: gradients and highlighted headline words
//! - **Green (#10b981)**: sustainability and status badges
//! - **Void (#05070d)**: page background
//!
//! ## Motion
//!
//! Entrances are one-shot: a region reveals the first time it scrolls
//! into view and stays revealed. See [`viewport::use_in_view`].

pub mod components;
pub mod pointer_region;
pub mod viewport;

pub use components::*;
pub use pointer_region::{use_pointer_region, PointerRegion};
pub use viewport::{use_in_view, use_viewport, use_viewport_provider, InView, ViewportContext};
