//! Session setup wizard view components
//!
//! Pure, props-based components for the wizard steps. The step cursor and
//! the field values live with the caller; these views only render them and
//! report edits, advances, and retreats through callbacks.

mod details_step;
mod duration_step;
mod progress;
mod review_step;

pub use details_step::DetailsStepView;
pub use duration_step::DurationStepView;
pub use progress::WizardProgressView;
pub use review_step::ReviewStepView;
