//! Footer: brand blurb, link columns, socials and the copyright line.

use chrono::Datelike;
use dioxus::prelude::*;
use sactifi_core::content::{
    footer_columns, Link, BRAND, BRAND_EXPANSION, SOCIAL_LINKS, SPIT_URL,
};
use sactifi_core::SectionId;

use crate::context::scroll_to_section;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    span { class: "brand-name gradient-text", "{BRAND}" }
                    p { "{BRAND_EXPANSION}" }
                    div { class: "footer-socials",
                        for link in SOCIAL_LINKS {
                            a { key: "{link.label}", class: "social-link", href: link.href,
                                "{link.label}"
                            }
                        }
                    }
                }

                for (heading, links) in footer_columns() {
                    div { key: "{heading}", class: "footer-column",
                        h4 { "{heading}" }
                        ul {
                            for link in links {
                                li { key: "{link.label}", FooterLink { link } }
                            }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "\u{00A9} {year} {BRAND}. All rights reserved." }
                p {
                    "An initiative of "
                    a { href: SPIT_URL, target: "_blank", rel: "noopener",
                        "Sardar Patel Institute of Technology"
                    }
                }
            }
        }
    }
}

/// In-page links scroll smoothly; outbound links open normally.
#[component]
fn FooterLink(link: Link) -> Element {
    match SectionId::from_href(link.href).filter(|_| link.is_in_page()) {
        Some(section) => rsx! {
            a {
                href: link.href,
                onclick: move |e| {
                    e.prevent_default();
                    scroll_to_section(section);
                },
                "{link.label}"
            }
        },
        None => rsx! {
            a { href: link.href, target: "_blank", rel: "noopener", "{link.label}" }
        },
    }
}
