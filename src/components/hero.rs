//! Hero banner: badge, headline, tagline, CTAs, stats and the falling
//! binary overlay behind them.

use dioxus::prelude::*;
use sactifi_core::content::{
    binary_columns, hero_stats, BinaryColumn, BINARY_COLUMN_WIDTH, BRAND, BRAND_EXPANSION,
    HERO_BADGE, HERO_TAGLINE,
};
use sactifi_core::motion::{interpolate, parallax_offset, scale_on_scroll};
use sactifi_core::{Easing, ScrollProgress, SectionId, ViewportMargin};
use sactifi_ui::{use_in_view, use_viewport, Button, ButtonVariant, Magnetic, TextReveal};

use crate::context::{scroll_to_section, use_site_config};

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    let viewport = use_viewport();
    let in_view = use_in_view(SectionId::Home.anchor(), ViewportMargin::NONE);
    let visible = in_view.visible();

    let columns = use_memo(move || {
        let width = viewport.bounds().size.width;
        binary_columns(&mut rand::rng(), width)
    });

    let (content_style, backdrop_style) =
        scroll_styles(viewport.scroll_y(), viewport.bounds().size.height);
    let seq = config.motion.section_sequencer();
    let strength = config.motion.magnetic_strength;

    rsx! {
        section {
            id: SectionId::Home.anchor(),
            class: "hero",
            onmounted: move |e| in_view.mounted(e),

            div { class: "hero-backdrop", style: "{backdrop_style}",
                div { class: "hero-grid" }
                div { class: "hero-orb hero-orb--primary" }
                div { class: "hero-orb hero-orb--accent" }
                BinaryRain { columns: columns() }
            }

            div { class: "hero-content", style: "{content_style}",
                div { class: "hero-badge", style: "{seq.style(0, visible)}",
                    span { class: "hero-badge-dot" }
                    "{HERO_BADGE}"
                }
                h1 { class: "hero-title", style: "{seq.style(1, visible)}",
                    span { class: "gradient-text", "{BRAND}" }
                }
                p { class: "hero-expansion", style: "{seq.style(2, visible)}", "{BRAND_EXPANSION}" }
                TextReveal {
                    class: "hero-tagline".to_string(),
                    text: HERO_TAGLINE.to_string(),
                    visible,
                    base_delay: seq.delay_of(3),
                }

                div { class: "hero-actions", style: "{seq.style(4, visible)}",
                    Magnetic { strength,
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| scroll_to_section(SectionId::Projects),
                            "Explore Projects"
                        }
                    }
                    Magnetic { strength,
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| scroll_to_section(SectionId::Contact),
                            "Partner With Us"
                        }
                    }
                }

                div { class: "hero-stats",
                    for (i, stat) in hero_stats().into_iter().enumerate() {
                        div {
                            key: "{stat.label}",
                            class: "hero-stat",
                            style: "{seq.style(5 + i, visible)}",
                            span { class: "hero-stat-value gradient-text", "{stat.value}" }
                            span { class: "hero-stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            button {
                class: "scroll-indicator",
                r#type: "button",
                "aria-label": "Scroll to about",
                onclick: move |_| scroll_to_section(SectionId::About),
                span { class: "scroll-indicator-dot" }
            }
        }
    }
}

#[component]
fn BinaryRain(columns: Vec<BinaryColumn>) -> Element {
    rsx! {
        div { class: "binary-rain", "aria-hidden": "true",
            for (i, column) in columns.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "binary-column",
                    style: column_style(i, column),
                    "{column.bits}"
                }
            }
        }
    }
}

fn column_style(index: usize, column: &BinaryColumn) -> String {
    format!(
        "left: {}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        index as f64 * BINARY_COLUMN_WIDTH,
        column.duration_secs,
        column.delay_secs
    )
}

/// Content fades and drifts up while the backdrop drifts down and
/// shrinks away, over the first screenful of scrolling.
fn scroll_styles(scroll_y: f64, viewport_height: f64) -> (String, String) {
    let progress = ScrollProgress {
        offset: scroll_y,
        content_height: viewport_height * 2.0,
        viewport_height,
    }
    .progress();
    let opacity = content_opacity(progress);
    let content_y = parallax_offset(progress, -1.5);
    let backdrop_y = parallax_offset(progress, 3.0);
    let (scale, backdrop_opacity) = scale_on_scroll(1.0 - progress);
    (
        format!("opacity: {opacity:.3}; transform: translateY({content_y:.1}px);"),
        format!(
            "opacity: {backdrop_opacity:.3}; \
             transform: translateY({backdrop_y:.1}px) scale({scale:.3});"
        ),
    )
}

/// Eased fade over the first 80% of the hero's scroll.
fn content_opacity(progress: f64) -> f64 {
    1.0 - Easing::STANDARD.apply(interpolate(progress, (0.0, 0.8), (0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscrolled_hero_is_at_rest() {
        let (content, backdrop) = scroll_styles(0.0, 800.0);
        assert_eq!(content, "opacity: 1.000; transform: translateY(0.0px);");
        assert_eq!(backdrop, "opacity: 1.000; transform: translateY(0.0px) scale(1.000);");
    }

    #[test]
    fn one_screen_down_is_faded_out() {
        let (content, backdrop) = scroll_styles(800.0, 800.0);
        assert!(content.starts_with("opacity: 0.000;"));
        assert_eq!(backdrop, "opacity: 0.600; transform: translateY(300.0px) scale(0.800);");
    }

    #[test]
    fn fade_is_eased_not_linear() {
        let halfway = content_opacity(0.4);
        assert!(halfway > 0.0 && halfway < 0.5, "{halfway}");
        assert_eq!(content_opacity(0.0), 1.0);
        assert_eq!(content_opacity(0.8), 0.0);
    }

    #[test]
    fn binary_columns_are_pitched_40px_apart() {
        let column = BinaryColumn {
            bits: "0101".into(),
            duration_secs: 12.5,
            delay_secs: 1.25,
        };
        assert_eq!(
            column_style(3, &column),
            "left: 120px; animation-duration: 12.50s; animation-delay: 1.25s;"
        );
    }

    #[test]
    fn unmeasured_viewport_does_not_move() {
        let (content, _) = scroll_styles(500.0, 0.0);
        assert!(content.starts_with("opacity: 1.000;"));
    }
}
