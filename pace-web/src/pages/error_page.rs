//! Error screen wiring

use dioxus::prelude::*;
use pace_ui::ErrorPageView;
use tracing::warn;

use crate::Route;

/// Full reload of the current document, discarding all client-side state.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            warn!("failed to reload page: {err:?}");
        }
    }
}

/// App-level error screen. Retry performs a full document reload; Back to
/// Home navigates to the root route.
#[component]
pub fn ErrorPage(#[props(default)] error: Option<String>) -> Element {
    let nav = navigator();

    rsx! {
        ErrorPageView {
            error,
            on_retry: move |_| reload_page(),
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

/// Catch-all route: unknown paths land on the error screen.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    warn!("no page at {path}");

    rsx! {
        ErrorPage { error: Some(format!("There is no page at {path}.")) }
    }
}
