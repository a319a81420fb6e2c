//! Page composition order, section anchors and navbar state.
//!
//! Every top-level section exposes a stable anchor id matching the
//! navbar's link targets; that pairing is the page's navigation contract.

/// Top-level sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Sectors,
    Projects,
    Tech,
    Team,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Sectors,
        SectionId::Projects,
        SectionId::Tech,
        SectionId::Team,
        SectionId::Contact,
    ];

    /// Element id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Sectors => "sectors",
            SectionId::Projects => "projects",
            SectionId::Tech => "tech",
            SectionId::Team => "team",
            SectionId::Contact => "contact",
        }
    }

    /// In-page link target, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Navbar link text.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Sectors => "Sectors",
            SectionId::Projects => "Projects",
            SectionId::Tech => "Tech Stack",
            SectionId::Team => "Team",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolve `#about` / `about` back to a section.
    pub fn from_href(href: &str) -> Option<SectionId> {
        let anchor = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Everything rendered on the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePart {
    Navbar,
    Section(SectionId),
    Footer,
}

/// Fixed composition order of the page.
pub const PAGE_ORDER: [PagePart; 9] = [
    PagePart::Navbar,
    PagePart::Section(SectionId::Home),
    PagePart::Section(SectionId::About),
    PagePart::Section(SectionId::Sectors),
    PagePart::Section(SectionId::Projects),
    PagePart::Section(SectionId::Tech),
    PagePart::Section(SectionId::Team),
    PagePart::Section(SectionId::Contact),
    PagePart::Footer,
];

/// Navbar appearance and the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl NavbarState {
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    /// Returns whether the condensed state changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link from the mobile menu closes it.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_navbar_condenses_past_50px() {
        let mut nav = NavbarState::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(51.0));
        assert_eq!(nav.class(), "navbar navbar--scrolled");
    }

    #[test]
    fn page_order_is_fixed() {
        assert_eq!(PAGE_ORDER.first(), Some(&PagePart::Navbar));
        assert_eq!(PAGE_ORDER.last(), Some(&PagePart::Footer));
        let sections: Vec<_> = PAGE_ORDER
            .iter()
            .filter_map(|p| match p {
                PagePart::Section(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn anchors_round_trip_through_hrefs() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_href(&section.href()), Some(section));
        }
        assert_eq!(SectionId::Tech.href(), "#tech");
        assert_eq!(SectionId::from_href("#pricing"), None);
    }

    #[test]
    fn navbar_condenses_after_threshold() {
        let mut nav = NavbarState::new(NavbarState::DEFAULT_THRESHOLD);
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(51.0));
        assert_eq!(nav.class(), "navbar navbar--scrolled");
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn mobile_menu() {
        let mut nav = NavbarState::new(50.0);
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.follow_link();
        assert!(!nav.is_menu_open());
    }
}
