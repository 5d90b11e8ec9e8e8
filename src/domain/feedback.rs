use crate::domain::NotifyEmail;
use crate::error::ValidationError;
use serde::Serialize;

/// Free-form message sent to the maintainers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<NotifyEmail>,
    message: String,
}

impl Feedback {
    /// A reply address is optional, but must be valid when given.
    pub fn parse(email: Option<&str>, message: &str) -> Result<Self, ValidationError> {
        let email = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(email) => Some(NotifyEmail::parse(email)?),
            None => None,
        };
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::MissingFeedback);
        }
        Ok(Self {
            email,
            message: message.to_string(),
        })
    }

    pub fn email(&self) -> Option<&NotifyEmail> {
        self.email.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
