//! Site-wide context for the SACTIFI page.
//!
//! Provides the loaded [`SiteConfig`], the toast queue and the viewport
//! tracker to all components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_site_provider();
//!
//! // In child components
//! let config = use_site_config();
//! let mut toasts = use_toasts();
//! toasts.push("Message sent!", ToastKind::Success);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use sactifi_core::{SectionId, SiteConfig};

/// Visual flavour of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Ordered toast list with stable ids, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle to the toast queue. Toasts dismiss themselves after the
/// configured duration.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    ttl: Duration,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = self.queue.write().push(message, kind);
        let mut queue = self.queue;
        let ttl = self.ttl;
        spawn(async move {
            tokio::time::sleep(ttl).await;
            queue.write().dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    /// Current toasts. Subscribes the caller.
    pub fn items(&self) -> Vec<Toast> {
        self.queue.read().items().to_vec()
    }
}

/// Provide config, toasts and viewport tracking to the whole tree.
pub fn use_site_provider() {
    let config = use_context_provider(crate::get_site_config);
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts {
        queue,
        ttl: config.toast.duration(),
    });
    sactifi_ui::use_viewport_provider();
}

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Smooth-scroll the page so `section` is at the top.
pub fn scroll_to_section(section: SectionId) {
    tracing::debug!(section = section.anchor(), "scrolling to section");
    document::eval(&scroll_script(section));
}

fn scroll_script(section: SectionId) -> String {
    format!(
        "document.getElementById('{}')?.scrollIntoView({{behavior:'smooth',block:'start'}})",
        section.anchor()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let a = queue.push("first", ToastKind::Success);
        let b = queue.push("second", ToastKind::Error);
        assert_ne!(a, b);
        assert_eq!(queue.items()[0].message, "first");
        assert_eq!(queue.items()[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push("first", ToastKind::Success);
        queue.push("second", ToastKind::Success);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "second");
    }

    #[test]
    fn scroll_script_targets_anchor() {
        let js = scroll_script(SectionId::Projects);
        assert!(js.contains("getElementById('projects')"));
        assert!(js.contains("behavior:'smooth'"));
    }
}
