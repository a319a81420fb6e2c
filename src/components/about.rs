//! About section: intro, founder credit and the vision/mission cards.

use std::time::Duration;

use dioxus::prelude::*;
use sactifi_core::content::{about_features, ABOUT_INTRO, BRAND, FOUNDER};
use sactifi_core::{RevealDirection, RevealPreset, SectionId};
use sactifi_ui::{use_in_view, InteractiveCard, Reveal, StaggerItem};

use super::SectionHeader;
use crate::context::use_site_config;

#[component]
pub fn About() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::About.anchor(), config.motion.section_margin());
    let grid = use_in_view("about-features", config.motion.stagger_margin());
    let cards = config.motion.card_sequencer();

    rsx! {
        section {
            id: SectionId::About.anchor(),
            class: "section about",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::About, visible: section.visible() }

            div { class: "about-body",
                Reveal {
                    key_name: "about-intro".to_string(),
                    preset: RevealPreset::Slide(RevealDirection::Left),
                    duration: config.motion.section_duration(),
                    class: "about-intro".to_string(),
                    p { "{ABOUT_INTRO}" }
                    p { class: "about-founder",
                        "Founded by "
                        span { class: "gradient-text", "{FOUNDER}" }
                        ", {BRAND} nurtures student innovators from idea to deployed product."
                    }
                }

                div {
                    class: "feature-grid",
                    onmounted: move |e| grid.mounted(e),
                    for (i, feature) in about_features().into_iter().enumerate() {
                        StaggerItem {
                            key: "{feature.title}",
                            index: i,
                            visible: grid.visible(),
                            sequencer: cards.with_base_delay(Duration::from_millis(100)),
                            InteractiveCard {
                                class: format!("feature-card {}", feature.accent.class()),
                                max_tilt: config.motion.tilt_max_deg,
                                div { class: "feature-glyph", "{feature.glyph}" }
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-description", "{feature.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
