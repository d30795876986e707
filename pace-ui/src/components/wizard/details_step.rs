//! Details step - what the session is for

use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use dioxus::prelude::*;

/// First wizard step: the session title. No Back on the first step.
#[component]
pub fn DetailsStepView(
    title: String,
    on_title_change: EventHandler<String>,
    on_next: EventHandler<()>,
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
                    r#for: "session-title",
                    "What is this session for?"
                }
                TextInput {
                    id: Some("session-title".to_string()),
                    value: title,
                    on_input: on_title_change,
                    size: TextInputSize::Medium,
                    placeholder: "e.g. Piano scales",
                    required: true,
                    autofocus: true,
                }
            }
            div { class: "flex justify-end",
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
