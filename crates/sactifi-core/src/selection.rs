//! Master/detail selection and category filtering.
//!
//! [`SelectionPanel`] backs the project showcase: exactly one item is
//! active at any time and its detail is shown. [`CategoryFilter`] backs
//! the tech stack and team grids: one category is active and the
//! display list is filtered by equality on each item's category.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{SiteError, SiteResult};

/// An item with a stable identity.
pub trait Selectable {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}

/// An item belonging to one named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// One-of-N selection over a non-empty item list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPanel<T: Selectable> {
    items: Vec<T>,
    active: usize,
}

impl<T: Selectable> SelectionPanel<T> {
    /// Build a panel with the first item active.
    pub fn new(items: Vec<T>) -> SiteResult<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptySelection);
        }
        let mut seen = HashSet::new();
        for item in &items {
            let id = item.id();
            if !seen.insert(id.clone()) {
                return Err(SiteError::DuplicateId(format!("{id:?}")));
            }
        }
        Ok(Self { items, active: 0 })
    }

    /// Make `id` active. Unknown ids are ignored; returns whether `id`
    /// is a member.
    pub fn select(&mut self, id: &T::Id) -> bool {
        match self.items.iter().position(|item| &item.id() == id) {
            Some(index) => {
                if index != self.active {
                    tracing::debug!(?id, "selection changed");
                }
                self.active = index;
                true
            }
            None => {
                tracing::debug!(?id, "ignoring selection of unknown id");
                false
            }
        }
    }

    /// Detail of the active item.
    pub fn current(&self) -> &T {
        &self.items[self.active]
    }

    pub fn active_id(&self) -> T::Id {
        self.current().id()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &T::Id) -> bool {
        &self.active_id() == id
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true; a panel cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters a list by one active category, or shows everything when the
/// catch-all category is active.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter<T: Categorized> {
    categories: Vec<String>,
    items: Vec<T>,
    active: usize,
}

impl<T: Categorized> CategoryFilter<T> {
    /// `categories[0]` is the catch-all (e.g. `"All"`) and starts active.
    pub fn new<S: Into<String>>(
        categories: impl IntoIterator<Item = S>,
        items: Vec<T>,
    ) -> SiteResult<Self> {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(SiteError::NoCategories);
        }
        Ok(Self {
            categories,
            items,
            active: 0,
        })
    }

    /// Activate `category`. Unknown names are ignored.
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => {
                self.active = index;
                tracing::debug!(category, "filter changed");
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &str {
        &self.categories[self.active]
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active() == category
    }

    pub fn is_catch_all(&self) -> bool {
        self.active == 0
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items in original order that match the active category.
    pub fn visible(&self) -> Vec<&T> {
        if self.is_catch_all() {
            return self.items.iter().collect();
        }
        let active = self.active();
        self.items
            .iter()
            .filter(|item| item.category() == active)
            .collect()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        kind: &'static str,
    }

    impl Selectable for Item {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.kind
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, kind: "Backend" },
            Item { id: 2, kind: "Frontend" },
            Item { id: 3, kind: "Backend" },
            Item { id: 4, kind: "Cloud" },
        ]
    }

    #[test]
    fn first_item_active_by_default() {
        let panel = SelectionPanel::new(items()).unwrap();
        assert_eq!(panel.active_id(), 1);
        assert_eq!(panel.current().kind, "Backend");
    }

    #[test]
    fn select_known_and_unknown() {
        let mut panel = SelectionPanel::new(items()).unwrap();
        assert!(panel.select(&3));
        assert_eq!(panel.active_id(), 3);
        assert!(!panel.select(&99));
        assert_eq!(panel.active_id(), 3);
        assert!(panel.is_active(&3));
        assert_eq!(panel.active_index(), 2);
    }

    #[test]
    fn empty_and_duplicate_rejected() {
        assert!(matches!(
            SelectionPanel::<Item>::new(vec![]),
            Err(SiteError::EmptySelection)
        ));
        let dup = vec![Item { id: 1, kind: "a" }, Item { id: 1, kind: "b" }];
        assert!(matches!(SelectionPanel::new(dup), Err(SiteError::DuplicateId(_))));
    }

    #[test]
    fn filter_by_category() {
        let mut filter =
            CategoryFilter::new(["All", "Backend", "Frontend", "Cloud", "Web3"], items()).unwrap();
        assert_eq!(filter.visible().len(), 4);

        assert!(filter.select("Backend"));
        let ids: Vec<_> = filter.visible().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(filter.select("Web3"));
        assert!(filter.visible().is_empty());

        assert!(!filter.select("Quantum"));
        assert_eq!(filter.active(), "Web3");

        filter.select("All");
        assert!(filter.is_catch_all());
        assert_eq!(filter.visible().len(), 4);
    }

    #[test]
    fn filter_requires_categories() {
        let none: [&str; 0] = [];
        assert!(matches!(
            CategoryFilter::new(none, items()),
            Err(SiteError::NoCategories)
        ));
    }
}
