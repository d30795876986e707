//! Session setup wizard page
//!
//! Owns the wizard state and hands callbacks to the pure step views. The
//! step views know nothing about step count or bounds; all cursor movement
//! goes through the `SetupWizard` state machine here.

use crate::pages::ErrorPage;
use crate::sessions::{use_sessions, PlannedSession};
use crate::Route;
use chrono::Local;
use dioxus::prelude::*;
use pace_common::{SetupStep, SetupWizard};
use pace_ui::{
    DetailsStepView, DurationStepView, PageContainer, ReviewStepView, WizardProgressView,
};
use tracing::{info, warn};

#[component]
pub fn NewSession() -> Element {
    let mut wizard = use_signal(SetupWizard::new);
    let mut sessions = use_sessions();

    let mut advance = move || {
        let mut w = wizard.write();
        match w.advance() {
            Ok(true) => info!(step = w.step().title(), "wizard advanced"),
            Ok(false) => {}
            Err(err) => warn!("wizard advance blocked: {err}"),
        }
    };

    let mut retreat = move || {
        let moved = wizard.write().retreat();
        if moved {
            let step = wizard.read().step();
            info!(step = step.title(), "wizard went back");
        }
    };

    let mut start = move || {
        let plan = wizard.read().plan();
        match plan {
            Ok(plan) => {
                info!(title = %plan.title, minutes = plan.duration_minutes, "session planned");
                sessions.write().push(PlannedSession {
                    plan,
                    planned_at: Local::now(),
                });
                navigator().push(Route::Home {});
            }
            Err(err) => warn!("session plan rejected: {err}"),
        }
    };

    let (current, total) = wizard.read().progress();
    let step = wizard.read().step();

    rsx! {
        PageContainer {
            div { class: "max-w-lg mx-auto",
                WizardProgressView { current, total, label: step.title().to_string() }
                {
                    match step {
                        SetupStep::Details => rsx! {
                            DetailsStepView {
                                title: wizard.read().title().to_string(),
                                on_title_change: move |value| wizard.write().set_title(value),
                                on_next: move |_| advance(),
                            }
                        },
                        SetupStep::Duration => rsx! {
                            DurationStepView {
                                duration: wizard.read().duration().to_string(),
                                on_duration_change: move |value| wizard.write().set_duration(value),
                                on_next: move |_| advance(),
                                on_back: move |_| retreat(),
                            }
                        },
                        SetupStep::Review => match wizard.read().plan() {
                            Ok(plan) => rsx! {
                                ReviewStepView {
                                    plan,
                                    on_start: move |_| start(),
                                    on_back: move |_| retreat(),
                                }
                            },
                            Err(err) => rsx! {
                                ErrorPage { error: Some(err.to_string()) }
                            },
                        },
                    }
                }
            }
        }
    }
}
