//! Planned-session list shared through context

use chrono::{DateTime, Local};
use dioxus::prelude::*;
use pace_common::SessionPlan;

/// A plan the user finished this visit, stamped when the wizard completed.
/// Lives only as long as the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedSession {
    pub plan: SessionPlan,
    pub planned_at: DateTime<Local>,
}

/// Provide the shared session list at the app root.
pub fn provide_sessions() -> Signal<Vec<PlannedSession>> {
    use_context_provider(|| Signal::new(Vec::<PlannedSession>::new()))
}

/// The shared session list.
pub fn use_sessions() -> Signal<Vec<PlannedSession>> {
    use_context()
}
