use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+@.+\..+$").expect("email pattern must compile"));

/// Address that receives expiry alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NotifyEmail(String);

impl NotifyEmail {
    /// Creates a new `NotifyEmail` instance.
    ///
    /// # Arguments
    ///
    /// * `raw` - The email address to validate and store.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NotifyEmail)` if the address looks like `local@domain.tld`,
    /// or the matching [`ValidationError`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sslnotify::domain::NotifyEmail;
    ///
    /// let email = NotifyEmail::parse("areyou@redddy.com").unwrap();
    /// assert_eq!(email.as_str(), "areyou@redddy.com");
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = raw.as_ref().trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_SHAPE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(email.to_string()))
    }

    /// Returns a reference to the email address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NotifyEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotifyEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
