//! Project showcase: a selectable list on the left, the active
//! project's detail on the right.

use std::time::Duration;

use dioxus::prelude::*;
use sactifi_core::content::{projects, Project};
use sactifi_core::{RevealDirection, RevealPreset, RevealSequencer, SectionId, SelectionPanel};
use sactifi_ui::{use_in_view, InteractiveCard, Reveal, StaggerItem};

use super::SectionHeader;
use crate::context::use_site_config;

#[component]
pub fn Projects() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::Projects.anchor(), config.motion.section_margin());
    let list = use_in_view("projects-list", config.motion.stagger_margin());
    let cards = config.motion.card_sequencer();
    let detail = RevealSequencer::new(RevealPreset::Fade, Duration::ZERO);
    // The detail pane tilts half as far as the grid cards.
    let detail_tilt = config.motion.tilt_max_deg / 2.0;

    let mut panel = use_signal(|| match SelectionPanel::new(projects()) {
        Ok(panel) => Some(panel),
        Err(e) => {
            tracing::error!("project showcase unavailable: {e}");
            None
        }
    });

    let Some(state) = panel() else {
        return rsx! {};
    };
    let current = state.current().clone();

    rsx! {
        section {
            id: SectionId::Projects.anchor(),
            class: "section projects",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::Projects, visible: section.visible() }

            div { class: "projects-layout",
                div {
                    class: "project-list",
                    role: "tablist",
                    onmounted: move |e| list.mounted(e),
                    for (i, project) in state.items().iter().enumerate() {
                        StaggerItem {
                            key: "{project.id}",
                            index: i,
                            visible: list.visible(),
                            sequencer: cards,
                            ProjectTab {
                                project: project.clone(),
                                active: state.is_active(&project.id),
                                on_select: move |id: u32| {
                                    if let Some(panel) = panel.write().as_mut() {
                                        panel.select(&id);
                                    }
                                },
                            }
                        }
                    }
                }

                Reveal {
                    key_name: "projects-detail".to_string(),
                    preset: RevealPreset::Slide(RevealDirection::Right),
                    duration: config.motion.section_duration(),
                    class: "project-detail-wrapper".to_string(),
                    StaggerItem {
                        key: "{current.id}",
                        index: 0,
                        visible: true,
                        sequencer: detail,
                        ProjectDetail { project: current, max_tilt: detail_tilt }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectTab(project: Project, active: bool, on_select: EventHandler<u32>) -> Element {
    let class = if active {
        format!("project-tab active {}", project.accent.class())
    } else {
        format!("project-tab {}", project.accent.class())
    };
    let id = project.id;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "tab",
            "aria-selected": if active { "true" } else { "false" },
            onclick: move |_| on_select.call(id),
            span { class: "project-tab-glyph", "{project.glyph}" }
            div { class: "project-tab-text",
                h3 { "{project.title}" }
                p { "{project.subtitle}" }
            }
            span { class: "project-tab-status", "{project.status}" }
        }
    }
}

/// Detail pane. Its wrapper is keyed by project id, so switching
/// projects remounts it and replays the fade-in.
#[component]
fn ProjectDetail(project: Project, max_tilt: f64) -> Element {
    rsx! {
        InteractiveCard {
            class: format!("project-detail {}", project.accent.class()),
            max_tilt,
            div { class: "project-detail-header",
                span { class: "project-detail-glyph", "{project.glyph}" }
                div {
                    h3 { class: "project-detail-title", "{project.title}" }
                    span { class: "project-detail-subtitle", "{project.subtitle}" }
                }
                span { class: "status-badge", "{project.status}" }
            }
            p { class: "project-detail-description", "{project.description}" }

            h4 { class: "project-detail-label", "Key Features" }
            ul { class: "project-features",
                for feature in project.features.iter() {
                    li { key: "{feature}", "\u{2713} {feature}" }
                }
            }

            h4 { class: "project-detail-label", "Tech Stack" }
            div { class: "project-stack",
                for tech in project.tech_stack.iter() {
                    span { key: "{tech}", class: "tech-chip", "{tech}" }
                }
            }
        }
    }
}
