//! Review step - final summary before starting

use crate::components::icons::{CheckIcon, ClockIcon};
use crate::components::utils::format_minutes;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use pace_common::SessionPlan;

/// Last wizard step: read-only summary of the assembled plan.
#[component]
pub fn ReviewStepView(
    plan: SessionPlan,
    on_start: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let length = format_minutes(plan.duration_minutes);

    rsx! {
        div {
            div { class: "bg-gray-800 rounded-lg p-6 mb-8",
                p { class: "text-xs uppercase tracking-wide text-gray-500 mb-1", "Session" }
                p { class: "text-lg font-medium text-white mb-4", "{plan.title}" }
                p { class: "text-xs uppercase tracking-wide text-gray-500 mb-1", "Length" }
                p { class: "inline-flex items-center gap-2 text-gray-300",
                    ClockIcon {}
                    "{length}"
                }
            }
            div { class: "flex items-center justify-between",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_back.call(()),
                    "Back"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_start.call(()),
                    CheckIcon {}
                    "Start session"
                }
            }
        }
    }
}
