//! Session plan types and duration parsing

use serde::{Deserialize, Serialize};

/// A fully-assembled session plan produced by the setup wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    /// What the session is for.
    pub title: String,
    /// Session length in whole minutes, always at least 1.
    pub duration_minutes: u32,
}

/// Why a wizard step or a finished plan failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("session needs a title")]
    EmptyTitle,
    #[error("session needs a duration")]
    EmptyDuration,
    #[error("\"{0}\" is not a whole number of minutes")]
    InvalidDuration(String),
    #[error("sessions must be at least 1 minute long")]
    DurationTooShort,
}

/// Parse raw duration text into whole minutes.
///
/// Accepts surrounding whitespace; rejects anything that is not a positive
/// whole number.
pub fn parse_duration_minutes(raw: &str) -> Result<u32, PlanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlanError::EmptyDuration);
    }
    let minutes: u32 = trimmed
        .parse()
        .map_err(|_| PlanError::InvalidDuration(trimmed.to_string()))?;
    if minutes == 0 {
        return Err(PlanError::DurationTooShort);
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_minutes() {
        assert_eq!(parse_duration_minutes("45"), Ok(45));
        assert_eq!(parse_duration_minutes("1"), Ok(1));
        assert_eq!(parse_duration_minutes("300"), Ok(300));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_duration_minutes(" 45 "), Ok(45));
        assert_eq!(parse_duration_minutes("\t25\n"), Ok(25));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_duration_minutes(""), Err(PlanError::EmptyDuration));
        assert_eq!(parse_duration_minutes("   "), Err(PlanError::EmptyDuration));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(
            parse_duration_minutes("abc"),
            Err(PlanError::InvalidDuration("abc".into()))
        );
        assert_eq!(
            parse_duration_minutes("2.5"),
            Err(PlanError::InvalidDuration("2.5".into()))
        );
        assert_eq!(
            parse_duration_minutes("-5"),
            Err(PlanError::InvalidDuration("-5".into()))
        );
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert_eq!(parse_duration_minutes("0"), Err(PlanError::DurationTooShort));
    }
}
