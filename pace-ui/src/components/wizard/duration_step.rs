//! Duration step - how long the session should run

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Second wizard step: a numeric minutes field bound to caller-owned state.
///
/// Every input event reports the raw value through `on_duration_change`.
/// Submitting the form (the Next button, or Enter in the field) never runs
/// the browser's own submission; it calls `on_next` instead. The input's
/// native `min`/`required` constraints block submission before `on_next`
/// fires, so no numeric checks live here. Back never submits. Step bounds
/// belong to the caller.
#[component]
pub fn DurationStepView(
    duration: String,
    on_duration_change: EventHandler<String>,
    on_next: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                on_next.call(());
            },
            div { class: "mb-8",
                label {
                    class: "block text-sm text-gray-400 mb-2",
                    r#for: "session-duration",
                    "Duration (minutes)"
                }
                input {
                    id: "session-duration",
                    r#type: "number",
                    class: "w-32 px-3 py-2 bg-gray-800/50 rounded-lg text-gray-300 focus:outline-none focus:ring-1 focus:ring-indigo-500/50",
                    min: "1",
                    required: true,
                    value: "{duration}",
                    oninput: move |e| on_duration_change.call(e.value()),
                }
            }
            div { class: "flex items-center justify-between",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    "Next"
                }
            }
        }
    }
}
