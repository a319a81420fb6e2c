use dioxus::prelude::*;

use crate::context::use_site_provider;
use crate::pages::Index;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - the whole site; sections are reached by in-page anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
}

/// Root application component.
///
/// Provides the palette, global styles, site context and routing.
#[component]
pub fn App() -> Element {
    use_site_provider();
    let palette = use_hook(root_variables);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
