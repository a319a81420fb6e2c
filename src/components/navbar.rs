//! Fixed navigation bar.
//!
//! Condenses once the page scrolls past the configured threshold and
//! collapses into a toggle menu on narrow windows.

use dioxus::prelude::*;
use sactifi_core::content::BRAND;
use sactifi_core::{NavbarState, SectionId};
use sactifi_ui::{use_viewport, Button, ButtonVariant, IconButton};

use crate::context::{scroll_to_section, use_site_config};

#[component]
pub fn Navbar() -> Element {
    let config = use_site_config();
    let viewport = use_viewport();
    let mut nav = use_signal(|| NavbarState::new(config.navbar.scroll_threshold_px));

    use_effect(move || {
        let offset = viewport.scroll_y();
        let mut next = *nav.peek();
        if next.on_scroll(offset) {
            tracing::debug!(offset, scrolled = next.is_scrolled(), "navbar state changed");
            nav.set(next);
        }
    });

    let state = nav();
    let menu_class = if state.is_menu_open() {
        "navbar-mobile open"
    } else {
        "navbar-mobile"
    };

    rsx! {
        nav { class: "{state.class()}",
            div { class: "navbar-inner",
                a {
                    class: "navbar-brand",
                    href: SectionId::Home.href(),
                    onclick: move |e| {
                        e.prevent_default();
                        scroll_to_section(SectionId::Home);
                    },
                    span { class: "brand-mark", "S" }
                    span { class: "brand-name gradient-text", "{BRAND}" }
                }

                div { class: "navbar-links",
                    for section in SectionId::ALL {
                        NavLink { key: "{section.anchor()}", section }
                    }
                }

                div { class: "navbar-cta",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to_section(SectionId::Contact),
                        "Join Us"
                    }
                }

                IconButton {
                    class: "navbar-toggle".to_string(),
                    aria_label: "Toggle menu".to_string(),
                    onclick: move |_| nav.write().toggle_menu(),
                    if state.is_menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
            }

            div { class: "{menu_class}",
                for section in SectionId::ALL {
                    NavLink {
                        key: "mobile-{section.anchor()}",
                        section,
                        on_follow: move |_| nav.write().follow_link(),
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(section: SectionId, on_follow: Option<EventHandler<()>>) -> Element {
    rsx! {
        a {
            class: "nav-link",
            href: section.href(),
            onclick: move |e| {
                e.prevent_default();
                scroll_to_section(section);
                if let Some(handler) = &on_follow {
                    handler.call(());
                }
            },
            "{section.label()}"
            span { class: "nav-link-underline" }
        }
    }
}
