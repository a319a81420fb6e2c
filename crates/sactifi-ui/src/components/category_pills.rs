//! Category Pills Component
//!
//! Horizontal row of filter pills driving a [`CategoryFilter`]. The
//! active pill carries a sliding highlight.
//!
//! [`CategoryFilter`]: sactifi_core::CategoryFilter

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// List of available categories, catch-all first
    pub categories: Vec<String>,
    /// Currently selected category
    pub selected: String,
    /// Handler called when a category is selected
    pub on_select: EventHandler<String>,
    /// Accessible name for the group
    #[props(default = "Category filter".to_string())]
    pub aria_label: String,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| {
///     CategoryFilter::new(TECH_CATEGORIES, technologies())
/// });
///
/// rsx! {
///     CategoryPills {
///         categories: filter.read().categories().to_vec(),
///         selected: filter.read().active().to_string(),
///         on_select: move |cat: String| { filter.write().select(&cat); }
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for cat in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_selected = selected == *cat;
                    let on_select = props.on_select;
                    rsx! {
                        CategoryPill {
                            key: "{cat}",
                            label: cat.clone(),
                            selected: is_selected,
                            on_click: move |_| on_select.call(cat_clone.clone()),
                        }
                    }
                }
            }
        }
    }
}

/// Properties for a single pill
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillProps {
    /// The category label
    pub label: String,
    /// Whether this pill is selected
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when clicked
    pub on_click: EventHandler<()>,
}

#[component]
pub fn CategoryPill(props: CategoryPillProps) -> Element {
    let class = pill_class(props.selected);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "radio",
            "aria-checked": if props.selected { "true" } else { "false" },
            onclick: move |_| props.on_click.call(()),
            if props.selected {
                span { class: "pill-highlight" }
            }
            span { class: "pill-label", "{props.label}" }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// Owned category list for the pills, from a core filter's categories.
pub fn category_labels<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    categories.iter().map(|c| c.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sactifi_core::content::{TEAM_CIRCLES, TECH_CATEGORIES};

    #[test]
    fn labels_keep_order_with_catch_all_first() {
        let tech = category_labels(&TECH_CATEGORIES);
        assert_eq!(tech.len(), 9);
        assert_eq!(tech[0], "All");

        let team = category_labels(&TEAM_CIRCLES);
        assert_eq!(team, ["All", "Leadership", "Students", "Alumni", "Industry"]);
    }

    #[test]
    fn selected_pill_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }
}
