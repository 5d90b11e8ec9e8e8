use crate::domain::{Host, ToleranceDays};
use crate::error::ValidationError;

/// A validated certificate expiry check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    host: Host,
    days: ToleranceDays,
}

impl CheckRequest {
    pub fn new(host: Host, days: ToleranceDays) -> Self {
        Self { host, days }
    }

    /// Validates the host field first, then the days field.
    pub fn parse(host: &str, days: &str) -> Result<Self, ValidationError> {
        let host = Host::parse(host)?;
        let days = ToleranceDays::parse(days)?;
        Ok(Self::new(host, days))
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn days(&self) -> ToleranceDays {
        self.days
    }
}
