//! Site content.
//!
//! Copy for every section lives here as plain data so the UI only
//! decides layout. Icons are single glyphs rendered inside a badge.

use rand::Rng;

use crate::page::SectionId;
use crate::selection::{Categorized, Selectable};

pub const BRAND: &str = "SACTIFI";
pub const BRAND_EXPANSION: &str =
    "Startup and Collaboration for Technological and Innovative Future of India";
pub const FOUNDER: &str = "Chinmay Tawade";
pub const HERO_BADGE: &str = "SPIT's Product Development Ecosystem";
pub const HERO_TAGLINE: &str = "Transforming Ideas into Impact";
pub const ABOUT_INTRO: &str = "SACTIFI is more than just a startup: it's a dynamic, multidisciplinary ecosystem dedicated to solving critical problems across India's economic landscape through technology and innovation.";

/// Heading block shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Rendered with the gradient treatment after `title`.
    pub highlight: &'static str,
    pub blurb: &'static str,
}

pub fn heading(section: SectionId) -> SectionHeading {
    match section {
        SectionId::Home => SectionHeading {
            eyebrow: HERO_BADGE,
            title: "",
            highlight: BRAND,
            blurb: BRAND_EXPANSION,
        },
        SectionId::About => SectionHeading {
            eyebrow: "Who We Are",
            title: "About",
            highlight: BRAND,
            blurb: ABOUT_INTRO,
        },
        SectionId::Sectors => SectionHeading {
            eyebrow: "Our Impact Areas",
            title: "Sectors of",
            highlight: "Influence",
            blurb: "SACTIFI's influence spans multiple sectors, driven by problem-solving and collaboration to transform India's landscape",
        },
        SectionId::Projects => SectionHeading {
            eyebrow: "Our Solutions",
            title: "Flagship",
            highlight: "Projects",
            blurb: "Innovative solutions addressing critical problems across India's economic landscape",
        },
        SectionId::Tech => SectionHeading {
            eyebrow: "Our Tech Stack",
            title: "Technologies We",
            highlight: "Use",
            blurb: "Cutting-edge tools and frameworks powering our innovative solutions",
        },
        SectionId::Team => SectionHeading {
            eyebrow: "The People Behind SACTIFI",
            title: "Our",
            highlight: "Team",
            blurb: "A diverse ecosystem of students, alumni, and industry leaders driving innovation",
        },
        SectionId::Contact => SectionHeading {
            eyebrow: "Get In Touch",
            title: "Let's",
            highlight: "Collaborate",
            blurb: "Have an idea? Want to partner with us? We'd love to hear from you.",
        },
    }
}

/// Accent used for an item's icon badge and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Accent,
    Green,
    Danger,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Accent => "accent-secondary",
            Accent::Green => "accent-green",
            Accent::Danger => "accent-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn hero_stats() -> Vec<Stat> {
    vec![
        Stat { value: "10+", label: "Projects" },
        Stat { value: "15+", label: "Technologies" },
        Stat { value: "6", label: "Sectors" },
        Stat { value: "50+", label: "Team Members" },
    ]
}

/// A titled card with an icon (about features, sectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub fn about_features() -> Vec<Feature> {
    vec![
        Feature {
            glyph: "◉",
            title: "Our Vision",
            description: "To envision an India renowned for self-produced, high-quality products that rival global brands, fostering an era of innovation and self-reliance.",
            accent: Accent::Primary,
        },
        Feature {
            glyph: "◎",
            title: "Our Mission",
            description: "To solve critical problems across India's economic landscape by building groundbreaking solutions that elevate national and international quality standards.",
            accent: Accent::Primary,
        },
        Feature {
            glyph: "✦",
            title: "Innovation First",
            description: "We empower the next generation of innovators with the insights and resources needed to build impactful products from concept to deployment.",
            accent: Accent::Primary,
        },
        Feature {
            glyph: "⚇",
            title: "Collaborative Ecosystem",
            description: "A dynamic, multidisciplinary ecosystem for students dedicated to solving real-world problems through technology and innovation.",
            accent: Accent::Primary,
        },
    ]
}

pub fn sectors() -> Vec<Feature> {
    vec![
        Feature {
            glyph: "❦",
            title: "Agriculture",
            description: "Smart agricultural solutions with blockchain traceability and AI-powered quality detection",
            accent: Accent::Green,
        },
        Feature {
            glyph: "⌬",
            title: "Technology",
            description: "Cutting-edge tech solutions leveraging AI, IoT, and blockchain technologies",
            accent: Accent::Primary,
        },
        Feature {
            glyph: "♥",
            title: "Healthcare",
            description: "AI-powered healthcare platforms for predictive diagnostics and patient care",
            accent: Accent::Danger,
        },
        Feature {
            glyph: "♣",
            title: "Environment",
            description: "Sustainable solutions for environmental conservation and monitoring",
            accent: Accent::Green,
        },
        Feature {
            glyph: "⌂",
            title: "Governance",
            description: "Digital governance platforms for transparent and efficient civic services",
            accent: Accent::Accent,
        },
        Feature {
            glyph: "↗",
            title: "Economy",
            description: "Solutions to bolster India's global economic standing through innovation",
            accent: Accent::Primary,
        },
    ]
}

/// A flagship project shown in the master/detail showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub tech_stack: Vec<&'static str>,
    pub glyph: &'static str,
    pub accent: Accent,
}

impl Selectable for Project {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Citizen Connect",
            subtitle: "Digital Governance",
            status: "In Development",
            description: "AI-powered grievance redressal platform ensuring transparency, accountability, and efficiency in civic problem resolution.",
            features: vec![
                "AI-Powered Automation",
                "Geolocation Integration",
                "Transparent Tracking",
                "Real-time Analytics",
            ],
            tech_stack: vec!["React", "Node.js", "TensorFlow", "PostgreSQL"],
            glyph: "⚙",
            accent: Accent::Primary,
        },
        Project {
            id: 2,
            title: "Smart Agricultural Traceability",
            subtitle: "AgriTech Solution",
            status: "In Development",
            description: "Blockchain-based traceability system for agricultural products ensuring quality and authenticity from farm to table.",
            features: vec![
                "Blockchain Traceability",
                "IoT Sensors",
                "Quality Detection",
                "Supply Chain Visibility",
            ],
            tech_stack: vec!["Blockchain", "IoT", "Python", "MongoDB"],
            glyph: "❦",
            accent: Accent::Green,
        },
        Project {
            id: 3,
            title: "Environmental Monitoring",
            subtitle: "Sustainability Platform",
            status: "Research Phase",
            description: "IoT-powered environmental monitoring system for real-time tracking of air quality, water levels, and ecological data.",
            features: vec![
                "Real-time Monitoring",
                "Predictive Analytics",
                "Alert Systems",
                "Data Visualization",
            ],
            tech_stack: vec!["IoT", "Python", "AWS", "React"],
            glyph: "☁",
            accent: Accent::Green,
        },
        Project {
            id: 4,
            title: "Healthcare AI Platform",
            subtitle: "MedTech Innovation",
            status: "Research Phase",
            description: "AI-powered healthcare platform for predictive diagnostics, patient care optimization, and medical data analysis.",
            features: vec![
                "Predictive Diagnostics",
                "Patient Analytics",
                "Medical Imaging AI",
                "EHR Integration",
            ],
            tech_stack: vec!["TensorFlow", "PyTorch", "FastAPI", "PostgreSQL"],
            glyph: "♥",
            accent: Accent::Danger,
        },
    ]
}

/// Catch-all category shown first in every filter.
pub const ALL_CATEGORY: &str = "All";

pub const TECH_CATEGORIES: [&str; 9] = [
    ALL_CATEGORY,
    "Backend",
    "Frontend",
    "AI/ML",
    "Database",
    "Web3",
    "Hardware",
    "DevOps",
    "Cloud",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub glyph: &'static str,
    pub category: &'static str,
}

impl Categorized for Technology {
    fn category(&self) -> &str {
        self.category
    }
}

pub fn technologies() -> Vec<Technology> {
    const fn tech(name: &'static str, glyph: &'static str, category: &'static str) -> Technology {
        Technology { name, glyph, category }
    }
    vec![
        tech("Python", "🐍", "Backend"),
        tech("JavaScript", "JS", "Frontend"),
        tech("TypeScript", "TS", "Frontend"),
        tech("React", "⚛", "Frontend"),
        tech("Next.js", "NX", "Frontend"),
        tech("Node.js", "N", "Backend"),
        tech("FastAPI", "FA", "Backend"),
        tech("TensorFlow", "TF", "AI/ML"),
        tech("PyTorch", "PT", "AI/ML"),
        tech("OpenAI", "🤖", "AI/ML"),
        tech("MongoDB", "M", "Database"),
        tech("PostgreSQL", "PG", "Database"),
        tech("Redis", "R", "Database"),
        tech("Blockchain", "⛓", "Web3"),
        tech("Solidity", "S", "Web3"),
        tech("IoT", "📡", "Hardware"),
        tech("Arduino", "A", "Hardware"),
        tech("Raspberry Pi", "🍓", "Hardware"),
        tech("Docker", "🐳", "DevOps"),
        tech("Kubernetes", "K8s", "DevOps"),
        tech("GitHub Actions", "GH", "DevOps"),
        tech("AWS", "☁", "Cloud"),
        tech("GCP", "G", "Cloud"),
        tech("Tailwind CSS", "TW", "Frontend"),
    ]
}

pub const TEAM_CIRCLES: [&str; 5] = [ALL_CATEGORY, "Leadership", "Students", "Alumni", "Industry"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub circle: &'static str,
    pub accent: Accent,
}

impl Categorized for TeamMember {
    fn category(&self) -> &str {
        self.circle
    }
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: FOUNDER,
            role: "Founder & Lead",
            description: "Visionary leader driving SACTIFI's mission to transform India's technological landscape.",
            glyph: "⚇",
            circle: "Leadership",
            accent: Accent::Primary,
        },
        TeamMember {
            name: "SPIT Students",
            role: "Core Team",
            description: "Passionate engineering students bringing innovation and technical expertise to every project.",
            glyph: "🎓",
            circle: "Students",
            accent: Accent::Accent,
        },
        TeamMember {
            name: "SPIT Alumni",
            role: "Mentors & Advisors",
            description: "Industry professionals guiding the next generation of innovators with real-world experience.",
            glyph: "⌂",
            circle: "Alumni",
            accent: Accent::Green,
        },
        TeamMember {
            name: "Industry Partners",
            role: "Collaborators",
            description: "Leading companies partnering with us to create impactful solutions together.",
            glyph: "🤝",
            circle: "Industry",
            accent: Accent::Primary,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub glyph: &'static str,
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

pub fn contact_details() -> Vec<ContactDetail> {
    vec![
        ContactDetail {
            glyph: "⌖",
            label: "Location",
            lines: &["Sardar Patel Institute of Technology", "Andheri West, Mumbai 400058"],
        },
        ContactDetail {
            glyph: "✉",
            label: "Email",
            lines: &["contact@sactifi.in"],
        },
        ContactDetail {
            glyph: "☎",
            label: "Phone",
            lines: &["+91 (XXX) XXX-XXXX"],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// Links into the page itself rather than out of it.
    pub fn is_in_page(&self) -> bool {
        self.href.starts_with('#')
    }
}

pub const SOCIAL_LINKS: [Link; 3] = [
    Link { label: "LinkedIn", href: "#" },
    Link { label: "GitHub", href: "#" },
    Link { label: "Twitter", href: "#" },
];

pub const SPIT_URL: &str = "https://www.spit.ac.in";

/// Footer columns: heading and links.
pub fn footer_columns() -> Vec<(&'static str, Vec<Link>)> {
    vec![
        (
            "Company",
            vec![
                Link { label: "About Us", href: "#about" },
                Link { label: "Our Team", href: "#team" },
                Link { label: "Projects", href: "#projects" },
                Link { label: "Contact", href: "#contact" },
            ],
        ),
        (
            "Sectors",
            vec![
                Link { label: "Agriculture", href: "#sectors" },
                Link { label: "Technology", href: "#sectors" },
                Link { label: "Healthcare", href: "#sectors" },
                Link { label: "Environment", href: "#sectors" },
            ],
        ),
        (
            "Resources",
            vec![
                Link { label: "Tech Stack", href: "#tech" },
                Link { label: "Partner With Us", href: "#contact" },
                Link { label: "Collaborate", href: "#contact" },
                Link { label: "SPIT", href: SPIT_URL },
            ],
        ),
    ]
}

/// Column pitch of the hero's binary rain.
pub const BINARY_COLUMN_WIDTH: f64 = 40.0;

/// One falling column of the hero's binary rain.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryColumn {
    pub bits: String,
    /// Seconds per full fall, 10–20.
    pub duration_secs: f64,
    /// Start offset in seconds, 0–5.
    pub delay_secs: f64,
}

/// One column per 40px of width, each 10–29 random bits.
pub fn binary_columns<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> Vec<BinaryColumn> {
    let count = if viewport_width.is_finite() && viewport_width > 0.0 {
        (viewport_width / BINARY_COLUMN_WIDTH).floor() as usize
    } else {
        0
    };
    (0..count)
        .map(|_| {
            let len = rng.random_range(10..30);
            let bits = (0..len)
                .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
                .collect();
            BinaryColumn {
                bits,
                duration_secs: 10.0 + rng.random::<f64>() * 10.0,
                delay_secs: rng.random::<f64>() * 5.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{CategoryFilter, SelectionPanel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn four_projects_first_is_active() {
        let panel = SelectionPanel::new(projects()).unwrap();
        assert_eq!(panel.len(), 4);
        assert_eq!(panel.current().title, "Citizen Connect");
    }

    #[test]
    fn every_technology_has_a_listed_category() {
        for tech in technologies() {
            assert!(
                TECH_CATEGORIES[1..].contains(&tech.category),
                "{} has unknown category {}",
                tech.name,
                tech.category
            );
        }
    }

    #[test]
    fn tech_filter_counts() {
        let mut filter = CategoryFilter::new(TECH_CATEGORIES, technologies()).unwrap();
        assert_eq!(filter.visible().len(), 24);
        filter.select("Frontend");
        assert_eq!(filter.visible().len(), 5);
        filter.select("DevOps");
        let names: Vec<_> = filter.visible().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Docker", "Kubernetes", "GitHub Actions"]);
    }

    #[test]
    fn team_circles_cover_roster() {
        for member in team() {
            assert!(TEAM_CIRCLES.contains(&member.circle));
        }
    }

    #[test]
    fn footer_links_point_at_real_sections() {
        for (_, links) in footer_columns() {
            for link in links.iter().filter(|l| l.is_in_page()) {
                assert!(SectionId::from_href(link.href).is_some(), "dangling {}", link.href);
            }
        }
    }

    #[test]
    fn binary_columns_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let cols = binary_columns(&mut rng, 1280.0);
        assert_eq!(cols.len(), 32);
        for col in &cols {
            assert!((10..30).contains(&col.bits.len()));
            assert!(col.bits.chars().all(|c| c == '0' || c == '1'));
            assert!((10.0..20.0).contains(&col.duration_secs));
            assert!((0.0..5.0).contains(&col.delay_secs));
        }
        assert!(binary_columns(&mut rng, f64::NAN).is_empty());
    }
}
