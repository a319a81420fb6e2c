//! Tech stack: category pills filtering a grid of technology tiles.

use dioxus::prelude::*;
use sactifi_core::content::{technologies, Technology, TECH_CATEGORIES};
use sactifi_core::{CategoryFilter, SectionId};
use sactifi_ui::{category_labels, use_in_view, CategoryPills, Magnetic, StaggerItem};

use super::SectionHeader;
use crate::context::use_site_config;

#[component]
pub fn TechStack() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::Tech.anchor(), config.motion.section_margin());
    let grid = use_in_view("tech-grid", config.motion.stagger_margin());
    let tiles = config.motion.tile_sequencer();

    let mut filter = use_signal(|| {
        CategoryFilter::new(TECH_CATEGORIES, technologies())
            .map_err(|e| tracing::error!("tech filter unavailable: {e}"))
            .ok()
    });

    let Some(state) = filter() else {
        return rsx! {};
    };
    let visible: Vec<Technology> = state.visible().into_iter().copied().collect();

    rsx! {
        section {
            id: SectionId::Tech.anchor(),
            class: "section tech",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::Tech, visible: section.visible() }

            CategoryPills {
                categories: category_labels(state.categories()),
                selected: state.active().to_string(),
                aria_label: "Technology category".to_string(),
                on_select: move |category: String| {
                    if let Some(filter) = filter.write().as_mut() {
                        filter.select(&category);
                    }
                },
            }

            div {
                class: "tech-grid",
                onmounted: move |e| grid.mounted(e),
                for (i, tech) in visible.into_iter().enumerate() {
                    StaggerItem {
                        key: "{tech.name}",
                        index: i,
                        visible: grid.visible(),
                        sequencer: tiles,
                        Magnetic { strength: config.motion.magnetic_strength,
                            div { class: "tech-tile",
                                span { class: "tech-glyph", "{tech.glyph}" }
                                span { class: "tech-name", "{tech.name}" }
                                span { class: "tech-category", "{tech.category}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
