//! Wizard progress indicator

use dioxus::prelude::*;

/// Step indicator: "Step N of M", the step heading, and a segment per step.
#[component]
pub fn WizardProgressView(current: usize, total: usize, label: String) -> Element {
    rsx! {
        div { class: "mb-8",
            p { class: "text-xs uppercase tracking-wide text-gray-500 mb-1",
                "Step {current} of {total}"
            }
            h2 { class: "text-xl font-semibold text-white mb-3", "{label}" }
            div { class: "flex gap-1.5",
                for i in 1..=total {
                    div {
                        class: if i <= current {
                            "h-1 flex-1 rounded-full bg-indigo-500"
                        } else {
                            "h-1 flex-1 rounded-full bg-gray-700"
                        },
                    }
                }
            }
        }
    }
}
