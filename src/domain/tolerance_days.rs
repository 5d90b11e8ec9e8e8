use crate::error::ValidationError;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// Number of days before expiry at which a warning should trigger.
///
/// Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToleranceDays(u32);

impl ToleranceDays {
    /// Parses the days field of a form.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingDays);
        }
        let days: i64 = raw.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => ValidationError::DaysTooLarge,
            _ => ValidationError::NotPositive,
        })?;
        Self::new(days)
    }

    /// Zero and negative counts are not positive; counts that do not fit
    /// in a `u32` are too large.
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        if days < 1 {
            return Err(ValidationError::NotPositive);
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ValidationError::DaysTooLarge)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ToleranceDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
