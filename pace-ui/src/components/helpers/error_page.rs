//! Full-page error screen

use crate::components::icons::{AlertTriangleIcon, ArrowLeftIcon, RefreshIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Message shown when no more specific error text is available.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Full-viewport centered error panel with retry and back-to-home actions.
///
/// Purely presentational: what "retry" and "home" actually do (hard reload,
/// router navigation) is supplied by the caller.
#[component]
pub fn ErrorPageView(
    /// Error text to display; the generic fallback when absent or empty.
    #[props(default)]
    error: Option<String>,
    on_retry: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let message = match error.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center px-4",
            div { class: "max-w-md w-full text-center",
                AlertTriangleIcon { class: "w-12 h-12 text-amber-500 mx-auto mb-4" }
                h1 { class: "text-2xl font-bold text-white mb-2", "Something went wrong" }
                p { class: "text-gray-400 mb-8 select-text break-words", "{message}" }
                div { class: "flex items-center justify-center gap-3",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_retry.call(()),
                        RefreshIcon {}
                        "Retry"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_home.call(()),
                        ArrowLeftIcon {}
                        "Back to Home"
                    }
                }
            }
        }
    }
}
