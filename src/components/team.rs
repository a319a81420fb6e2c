//! Team roster filtered by circle (leadership, students, alumni,
//! industry), plus a call to join.

use dioxus::prelude::*;
use sactifi_core::content::{team, TeamMember, TEAM_CIRCLES};
use sactifi_core::{CategoryFilter, RevealPreset, SectionId};
use sactifi_ui::{
    category_labels, use_in_view, Button, ButtonVariant, CategoryPills, InteractiveCard, Reveal,
    StaggerItem,
};

use super::SectionHeader;
use crate::context::{scroll_to_section, use_site_config};

#[component]
pub fn Team() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::Team.anchor(), config.motion.section_margin());
    let grid = use_in_view("team-grid", config.motion.stagger_margin());
    let cards = config.motion.card_sequencer();
    let tilt = config.motion.tilt_max_deg;

    let mut filter = use_signal(|| {
        CategoryFilter::new(TEAM_CIRCLES, team())
            .map_err(|e| tracing::error!("team filter unavailable: {e}"))
            .ok()
    });

    let Some(state) = filter() else {
        return rsx! {};
    };
    let members: Vec<TeamMember> = state.visible().into_iter().copied().collect();

    rsx! {
        section {
            id: SectionId::Team.anchor(),
            class: "section team",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::Team, visible: section.visible() }

            CategoryPills {
                categories: category_labels(state.categories()),
                selected: state.active().to_string(),
                aria_label: "Team circle".to_string(),
                on_select: move |circle: String| {
                    if let Some(filter) = filter.write().as_mut() {
                        filter.select(&circle);
                    }
                },
            }

            div {
                class: "team-grid",
                onmounted: move |e| grid.mounted(e),
                for (i, member) in members.into_iter().enumerate() {
                    StaggerItem {
                        key: "{member.name}",
                        index: i,
                        visible: grid.visible(),
                        sequencer: cards,
                        InteractiveCard {
                            class: format!("team-card {}", member.accent.class()),
                            max_tilt: tilt,
                            div { class: "team-avatar", "{member.glyph}" }
                            h3 { class: "team-name", "{member.name}" }
                            span { class: "team-role", "{member.role}" }
                            p { class: "team-description", "{member.description}" }
                            span { class: "team-circle", "{member.circle}" }
                        }
                    }
                }
            }

            Reveal {
                key_name: "team-join".to_string(),
                preset: RevealPreset::Fade,
                duration: config.motion.section_duration(),
                class: "team-join".to_string(),
                h3 { "Want to join the ecosystem?" }
                p { "Students, alumni and industry partners are always welcome." }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| scroll_to_section(SectionId::Contact),
                    "Get Involved"
                }
            }
        }
    }
}
