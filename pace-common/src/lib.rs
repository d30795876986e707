//! pace-common - Pure session-planning logic for pace
//!
//! Contains the setup wizard state machine and the session plan types,
//! free of any rendering or browser dependencies.

pub mod plan;
pub mod wizard;

pub use plan::{PlanError, SessionPlan};
pub use wizard::{SetupStep, SetupWizard};
