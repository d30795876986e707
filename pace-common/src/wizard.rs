//! Setup wizard state machine

use crate::plan::{parse_duration_minutes, PlanError, SessionPlan};

/// One step of the session setup wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Details,
    Duration,
    Review,
}

#[allow(clippy::derivable_impls)]
impl Default for SetupStep {
    fn default() -> Self {
        SetupStep::Details
    }
}

impl SetupStep {
    /// Number of steps in the wizard.
    pub const COUNT: usize = 3;

    /// The step after this one, if any.
    pub fn next(self) -> Option<SetupStep> {
        match self {
            SetupStep::Details => Some(SetupStep::Duration),
            SetupStep::Duration => Some(SetupStep::Review),
            SetupStep::Review => None,
        }
    }

    /// The step before this one, if any.
    pub fn prev(self) -> Option<SetupStep> {
        match self {
            SetupStep::Details => None,
            SetupStep::Duration => Some(SetupStep::Details),
            SetupStep::Review => Some(SetupStep::Duration),
        }
    }

    /// Zero-based position in the step sequence.
    pub fn index(self) -> usize {
        match self {
            SetupStep::Details => 0,
            SetupStep::Duration => 1,
            SetupStep::Review => 2,
        }
    }

    /// Heading shown above the step.
    pub fn title(self) -> &'static str {
        match self {
            SetupStep::Details => "What are you working on?",
            SetupStep::Duration => "How long do you want to focus?",
            SetupStep::Review => "Ready to start?",
        }
    }
}

/// Pure state for the linear session setup wizard.
///
/// Owns the accumulated field values and the step cursor. Setters store raw
/// text exactly as typed; validation runs when moving forward and again when
/// the final plan is assembled. Moving backward never validates and never
/// loses entered values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupWizard {
    step: SetupStep,
    title: String,
    duration: String,
}

impl SetupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Store the title exactly as typed.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Store the duration text exactly as typed. No coercion; parsing
    /// happens on advance and at plan assembly.
    pub fn set_duration(&mut self, duration: String) {
        self.duration = duration;
    }

    pub fn is_first_step(&self) -> bool {
        self.step.prev().is_none()
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// 1-based position of the current step, with the total step count.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index() + 1, SetupStep::COUNT)
    }

    /// Validate the fields belonging to the current step.
    pub fn validate_step(&self) -> Result<(), PlanError> {
        match self.step {
            SetupStep::Details => {
                if self.title.trim().is_empty() {
                    Err(PlanError::EmptyTitle)
                } else {
                    Ok(())
                }
            }
            SetupStep::Duration => parse_duration_minutes(&self.duration).map(|_| ()),
            SetupStep::Review => Ok(()),
        }
    }

    /// Move the cursor forward exactly one step if the current step's fields
    /// validate.
    ///
    /// Returns `Ok(true)` when the cursor moved, `Ok(false)` when already on
    /// the last step, and the validation failure without moving otherwise.
    pub fn advance(&mut self) -> Result<bool, PlanError> {
        self.validate_step()?;
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move the cursor back exactly one step. Never validates and never
    /// touches the entered values. No-op on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Assemble the finished plan, re-validating every field so a plan can
    /// never carry an invalid duration even if the steps were bypassed.
    pub fn plan(&self) -> Result<SessionPlan, PlanError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PlanError::EmptyTitle);
        }
        let duration_minutes = parse_duration_minutes(&self.duration)?;
        Ok(SessionPlan {
            title: title.to_string(),
            duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_on_duration_step() -> SetupWizard {
        let mut w = SetupWizard::new();
        w.set_title("Piano scales".into());
        w.advance().unwrap();
        w
    }

    #[test]
    fn test_starts_on_first_step() {
        let w = SetupWizard::new();
        assert_eq!(w.step(), SetupStep::Details);
        assert!(w.is_first_step());
        assert_eq!(w.progress(), (1, 3));
    }

    #[test]
    fn test_advance_moves_exactly_one_step() {
        let mut w = wizard_on_duration_step();
        assert_eq!(w.step(), SetupStep::Duration);
        w.set_duration("45".into());
        assert_eq!(w.advance(), Ok(true));
        assert_eq!(w.step(), SetupStep::Review);
        assert!(w.is_last_step());
    }

    #[test]
    fn test_advance_blocked_by_empty_title() {
        let mut w = SetupWizard::new();
        assert_eq!(w.advance(), Err(PlanError::EmptyTitle));
        assert_eq!(w.step(), SetupStep::Details);

        w.set_title("   ".into());
        assert_eq!(w.advance(), Err(PlanError::EmptyTitle));
        assert_eq!(w.step(), SetupStep::Details);
    }

    #[test]
    fn test_advance_blocked_by_invalid_duration() {
        let mut w = wizard_on_duration_step();

        assert_eq!(w.advance(), Err(PlanError::EmptyDuration));
        assert_eq!(w.step(), SetupStep::Duration);

        w.set_duration("0".into());
        assert_eq!(w.advance(), Err(PlanError::DurationTooShort));
        assert_eq!(w.step(), SetupStep::Duration);

        w.set_duration("soon".into());
        assert_eq!(w.advance(), Err(PlanError::InvalidDuration("soon".into())));
        assert_eq!(w.step(), SetupStep::Duration);
    }

    #[test]
    fn test_advance_on_last_step_is_noop() {
        let mut w = wizard_on_duration_step();
        w.set_duration("25".into());
        w.advance().unwrap();
        assert_eq!(w.step(), SetupStep::Review);
        assert_eq!(w.advance(), Ok(false));
        assert_eq!(w.step(), SetupStep::Review);
    }

    #[test]
    fn test_retreat_moves_exactly_one_step() {
        let mut w = wizard_on_duration_step();
        assert!(w.retreat());
        assert_eq!(w.step(), SetupStep::Details);
    }

    #[test]
    fn test_retreat_on_first_step_is_noop() {
        let mut w = SetupWizard::new();
        assert!(!w.retreat());
        assert_eq!(w.step(), SetupStep::Details);
    }

    #[test]
    fn test_retreat_skips_validation_and_keeps_values() {
        let mut w = wizard_on_duration_step();
        w.set_duration("not a number".into());
        assert!(w.retreat());
        assert_eq!(w.step(), SetupStep::Details);
        assert_eq!(w.title(), "Piano scales");
        assert_eq!(w.duration(), "not a number");
    }

    #[test]
    fn test_setters_store_raw_text() {
        let mut w = SetupWizard::new();
        w.set_duration("45".into());
        assert_eq!(w.duration(), "45");
        w.set_duration(" 45 ".into());
        assert_eq!(w.duration(), " 45 ");
    }

    #[test]
    fn test_plan_happy_path() {
        let mut w = wizard_on_duration_step();
        w.set_duration("90".into());
        w.advance().unwrap();
        assert_eq!(
            w.plan(),
            Ok(SessionPlan {
                title: "Piano scales".into(),
                duration_minutes: 90,
            })
        );
    }

    #[test]
    fn test_plan_trims_fields() {
        let mut w = SetupWizard::new();
        w.set_title("  Deep work  ".into());
        w.set_duration(" 25 ".into());
        let plan = w.plan().unwrap();
        assert_eq!(plan.title, "Deep work");
        assert_eq!(plan.duration_minutes, 25);
    }

    #[test]
    fn test_plan_revalidates_everything() {
        let mut w = SetupWizard::new();
        assert_eq!(w.plan(), Err(PlanError::EmptyTitle));
        w.set_title("Reading".into());
        assert_eq!(w.plan(), Err(PlanError::EmptyDuration));
        w.set_duration("0".into());
        assert_eq!(w.plan(), Err(PlanError::DurationTooShort));
    }

    #[test]
    fn test_step_sequence_is_linear() {
        assert_eq!(SetupStep::Details.next(), Some(SetupStep::Duration));
        assert_eq!(SetupStep::Duration.next(), Some(SetupStep::Review));
        assert_eq!(SetupStep::Review.next(), None);
        assert_eq!(SetupStep::Review.prev(), Some(SetupStep::Duration));
        assert_eq!(SetupStep::Duration.prev(), Some(SetupStep::Details));
        assert_eq!(SetupStep::Details.prev(), None);
    }
}
