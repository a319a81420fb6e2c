//! Viewport context: bridges mounted DOM nodes to the core
//! [`ViewportObserver`].
//!
//! The page's scroll container registers itself as the root. Every
//! region that wants an entrance animation registers its mounted handle
//! under a key; on mount, on every scroll and on every resize the context
//! measures the regions that have not latched yet and feeds the observer.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page root
//! let viewport = use_viewport_provider();
//! rsx! {
//!     div {
//!         onmounted: move |e| viewport.mount_root(e.data()),
//!         onscroll: move |_| { spawn(viewport.refresh()); },
//!         onresize: move |_| { spawn(viewport.refresh()); },
//!         ...
//!     }
//! }
//!
//! // In a section
//! let in_view = use_in_view("about", ViewportMargin::SECTION);
//! rsx! {
//!     section {
//!         onmounted: move |e| in_view.mounted(e),
//!         class: if in_view.visible() { "in-view" } else { "" },
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use sactifi_core::{Rect, ViewportMargin, ViewportObserver};

/// Shared viewport state, provided once at the page root.
///
/// All fields are signals, so the context is `Copy` and can be moved
/// into event handlers freely.
#[derive(Clone, Copy)]
pub struct ViewportContext {
    observer: Signal<ViewportObserver>,
    handles: Signal<HashMap<String, Rc<MountedData>>>,
    root: Signal<Option<Rc<MountedData>>>,
    bounds: Signal<Rect>,
    scroll_y: Signal<f64>,
}

/// Create the viewport context and provide it to all descendants.
pub fn use_viewport_provider() -> ViewportContext {
    let observer = use_signal(ViewportObserver::new);
    let handles = use_signal(HashMap::new);
    let root = use_signal(|| None);
    let bounds = use_signal(Rect::default);
    let scroll_y = use_signal(|| 0.0);
    use_context_provider(|| ViewportContext {
        observer,
        handles,
        root,
        bounds,
        scroll_y,
    })
}

/// Hook to access the viewport context from a descendant.
pub fn use_viewport() -> ViewportContext {
    use_context::<ViewportContext>()
}

impl ViewportContext {
    /// Register the scroll container whose box is the viewport.
    pub fn mount_root(mut self, data: Rc<MountedData>) {
        self.root.set(Some(data));
        spawn(self.refresh());
    }

    /// Start watching `key`. Re-registering keeps an existing latch.
    pub fn register(mut self, key: &str, margin: ViewportMargin, data: Rc<MountedData>) {
        self.observer.write().track(key, margin);
        self.handles.write().insert(key.to_string(), data);
    }

    /// Stop watching `key`. Silently skipped once the page is torn down.
    pub fn unregister(mut self, key: &str) {
        if let Ok(mut observer) = self.observer.try_write() {
            observer.untrack(key);
        }
        if let Ok(mut handles) = self.handles.try_write() {
            handles.remove(key);
        }
    }

    /// Whether `key` has entered the viewport. Subscribes the caller.
    pub fn is_visible(&self, key: &str) -> bool {
        self.observer.read().is_visible(key)
    }

    /// Current vertical scroll offset of the root. Subscribes the caller.
    pub fn scroll_y(&self) -> f64 {
        (self.scroll_y)()
    }

    /// Last measured viewport box. Subscribes the caller.
    pub fn bounds(&self) -> Rect {
        (self.bounds)()
    }

    /// Re-measure the scroll offset and every region that has not
    /// latched yet.
    pub async fn refresh(mut self) {
        let Some(root) = self.root.peek().clone() else {
            return;
        };

        let viewport = match root.get_client_rect().await {
            Ok(rect) => to_rect(rect),
            Err(e) => {
                tracing::debug!(error = ?e, "viewport not measurable");
                return;
            }
        };
        if *self.bounds.peek() != viewport {
            self.bounds.set(viewport);
        }

        if let Ok(offset) = root.get_scroll_offset().await {
            if *self.scroll_y.peek() != offset.y {
                self.scroll_y.set(offset.y);
            }
        }

        let pending = self.observer.peek().pending();
        let mut measured = Vec::with_capacity(pending.len());
        for key in pending {
            let handle = self.handles.peek().get(&key).cloned();
            let rect = match handle {
                Some(handle) => handle.get_client_rect().await.ok().map(to_rect),
                None => None,
            };
            measured.push((key, rect));
        }

        // Only take the write lock when something latches, so subscribers
        // are not re-rendered on every scroll tick.
        let latched = newly_latched(&self.observer.peek(), measured, viewport);
        if latched.is_empty() {
            return;
        }

        let mut observer = self.observer.write();
        for (key, rect) in latched {
            observer.observe(&key, rect, viewport);
        }
    }
}

/// Handle returned by [`use_in_view`].
#[derive(Clone, Copy)]
pub struct InView {
    key: Signal<String>,
    margin: ViewportMargin,
    ctx: ViewportContext,
}

impl InView {
    /// Attach to the element's `onmounted`.
    pub fn mounted(&self, event: MountedEvent) {
        self.ctx
            .register(&self.key.peek(), self.margin, event.data());
        spawn(self.ctx.refresh());
    }

    /// Whether the element has entered the viewport. Never reverts.
    pub fn visible(&self) -> bool {
        self.ctx.is_visible(&self.key.read())
    }

    pub fn key(&self) -> String {
        self.key.peek().clone()
    }
}

/// Observe an element under `key` with the given viewport margin.
///
/// The element is unregistered when the calling component unmounts.
pub fn use_in_view(key: impl Into<String>, margin: ViewportMargin) -> InView {
    let ctx = use_viewport();
    let owned: String = use_hook(|| key.into());
    let key = use_signal(|| owned.clone());

    use_drop(move || ctx.unregister(&owned));

    InView { key, margin, ctx }
}

/// The measured regions that would latch against `viewport`.
fn newly_latched(
    observer: &ViewportObserver,
    measured: Vec<(String, Option<Rect>)>,
    viewport: Rect,
) -> Vec<(String, Option<Rect>)> {
    measured
        .into_iter()
        .filter(|(key, rect)| observer.would_latch(key, *rect, viewport))
        .collect()
}

pub(crate) fn to_rect(rect: PixelsRect) -> Rect {
    Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::html::geometry::euclid::{Point2D, Size2D};

    #[test]
    fn pixels_rect_maps_to_core_rect() {
        let px = PixelsRect::new(Point2D::new(10.0, 20.0), Size2D::new(300.0, 150.0));
        assert_eq!(to_rect(px), Rect::new(10.0, 20.0, 300.0, 150.0));
    }

    #[test]
    fn taller_window_latches_regions_without_scrolling() {
        let mut observer = ViewportObserver::new();
        observer.track("team", ViewportMargin::SECTION);
        let team = Some(Rect::new(0.0, 1500.0, 1280.0, 400.0));

        let short = Rect::new(0.0, 0.0, 1280.0, 800.0);
        assert!(newly_latched(&observer, vec![("team".into(), team)], short).is_empty());

        let tall = Rect::new(0.0, 0.0, 1280.0, 2000.0);
        let latched = newly_latched(&observer, vec![("team".into(), team)], tall);
        assert_eq!(latched, vec![("team".to_string(), team)]);
    }

    #[test]
    fn unmeasured_regions_never_latch() {
        let mut observer = ViewportObserver::new();
        observer.track("about", ViewportMargin::NONE);
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        assert!(newly_latched(&observer, vec![("about".into(), None)], viewport).is_empty());
    }
}
