//! Home page - planned sessions and the new-session call to action

use crate::sessions::use_sessions;
use crate::Route;
use dioxus::prelude::*;
use pace_ui::{format_minutes, Button, ButtonSize, ButtonVariant, ClockIcon, PageContainer, PlusIcon};

#[component]
pub fn Home() -> Element {
    let sessions = use_sessions();
    let nav = navigator();

    rsx! {
        PageContainer {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-white", "Your sessions" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| {
                        nav.push(Route::NewSession {});
                    },
                    PlusIcon {}
                    "Plan a session"
                }
            }
            if sessions.read().is_empty() {
                p { class: "text-gray-500 py-12 text-center",
                    "Nothing planned yet. Plan your first session to get started."
                }
            } else {
                ul { class: "space-y-2",
                    for session in sessions() {
                        li { class: "bg-gray-800 rounded-lg px-5 py-4 flex items-center justify-between",
                            div {
                                p { class: "text-white font-medium", "{session.plan.title}" }
                                p { class: "text-sm text-gray-500",
                                    {format!("planned at {}", session.planned_at.format("%H:%M"))}
                                }
                            }
                            span { class: "inline-flex items-center gap-2 text-sm text-gray-400",
                                ClockIcon {}
                                {format_minutes(session.plan.duration_minutes)}
                            }
                        }
                    }
                }
            }
        }
    }
}
