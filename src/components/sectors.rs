//! Sector grid: the six areas SACTIFI builds for.

use dioxus::prelude::*;
use sactifi_core::content::sectors;
use sactifi_core::SectionId;
use sactifi_ui::{use_in_view, InteractiveCard, StaggerItem};

use super::SectionHeader;
use crate::context::use_site_config;

#[component]
pub fn Sectors() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::Sectors.anchor(), config.motion.section_margin());
    let grid = use_in_view("sectors-grid", config.motion.stagger_margin());
    let cards = config.motion.card_sequencer();
    let tilt = config.motion.tilt_max_deg;

    rsx! {
        section {
            id: SectionId::Sectors.anchor(),
            class: "section sectors",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::Sectors, visible: section.visible() }

            div {
                class: "sector-grid",
                onmounted: move |e| grid.mounted(e),
                for (i, sector) in sectors().into_iter().enumerate() {
                    StaggerItem {
                        key: "{sector.title}",
                        index: i,
                        visible: grid.visible(),
                        sequencer: cards,
                        InteractiveCard {
                            class: format!("sector-card {}", sector.accent.class()),
                            max_tilt: tilt,
                            div { class: "sector-glyph", "{sector.glyph}" }
                            h3 { class: "sector-title", "{sector.title}" }
                            p { class: "sector-description", "{sector.description}" }
                            span { class: "sector-more", "Learn more \u{2192}" }
                        }
                    }
                }
            }
        }
    }
}
