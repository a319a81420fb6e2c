//! The single page: every section in fixed order inside one scroll
//! container that doubles as the viewport for entrance animations.

use dioxus::prelude::*;
use sactifi_core::{CursorGlow, PagePart, Point, SectionId, PAGE_ORDER};
use sactifi_ui::{use_viewport, GlowingCursor};

use crate::components::{
    About, Contact, Footer, Hero, Navbar, Projects, Sectors, Team, TechStack, ToastHost,
};

#[component]
pub fn Index() -> Element {
    let viewport = use_viewport();
    let mut glow = use_signal(CursorGlow::new);

    rsx! {
        div {
            class: "page",
            onmounted: move |e| viewport.mount_root(e.data()),
            onscroll: move |_| {
                spawn(viewport.refresh());
            },
            onresize: move |_| {
                spawn(viewport.refresh());
            },
            onmousemove: move |e| {
                let pos = e.client_coordinates();
                glow.write().move_to(Point::new(pos.x, pos.y));
            },
            onmouseleave: move |_| glow.write().leave(),

            GlowingCursor { glow: glow() }

            for part in PAGE_ORDER {
                PagePartView { key: "{part_key(part)}", part }
            }

            ToastHost {}
        }
    }
}

#[component]
fn PagePartView(part: PagePart) -> Element {
    match part {
        PagePart::Navbar => rsx! { Navbar {} },
        PagePart::Section(SectionId::Home) => rsx! { Hero {} },
        PagePart::Section(SectionId::About) => rsx! { About {} },
        PagePart::Section(SectionId::Sectors) => rsx! { Sectors {} },
        PagePart::Section(SectionId::Projects) => rsx! { Projects {} },
        PagePart::Section(SectionId::Tech) => rsx! { TechStack {} },
        PagePart::Section(SectionId::Team) => rsx! { Team {} },
        PagePart::Section(SectionId::Contact) => rsx! { Contact {} },
        PagePart::Footer => rsx! { Footer {} },
    }
}

fn part_key(part: PagePart) -> &'static str {
    match part {
        PagePart::Navbar => "navbar",
        PagePart::Section(section) => section.anchor(),
        PagePart::Footer => "footer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn part_keys_are_unique() {
        let keys: HashSet<_> = PAGE_ORDER.iter().map(|p| part_key(*p)).collect();
        assert_eq!(keys.len(), PAGE_ORDER.len());
    }

    #[test]
    fn every_section_key_is_its_anchor() {
        for section in SectionId::ALL {
            assert_eq!(part_key(PagePart::Section(section)), section.anchor());
        }
    }
}
