//! Eyebrow, gradient title and blurb shared by every content section.

use std::time::Duration;

use dioxus::prelude::*;
use sactifi_core::content::heading;
use sactifi_core::{RevealSequencer, SectionId};

use crate::context::use_site_config;

/// Gap between eyebrow, title and blurb.
const HEADER_STAGGER: Duration = Duration::from_millis(150);

#[component]
pub fn SectionHeader(section: SectionId, visible: bool) -> Element {
    let config = use_site_config();
    let h = heading(section);
    let seq = RevealSequencer {
        interval: HEADER_STAGGER,
        ..config.motion.section_sequencer()
    };

    rsx! {
        header { class: "section-header",
            span { class: "section-eyebrow", style: "{seq.style(0, visible)}", "{h.eyebrow}" }
            h2 { class: "section-title", style: "{seq.style(1, visible)}",
                "{h.title} "
                span { class: "gradient-text", "{h.highlight}" }
            }
            p { class: "section-blurb", style: "{seq.style(2, visible)}", "{h.blurb}" }
        }
    }
}
