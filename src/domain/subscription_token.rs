use crate::error::ValidationError;
use crate::page;
use secrecy::{ExposeSecret, SecretString};

/// Identifies a pending or active subscription.
///
/// Both parts arrive in the link the service emails to the subscriber,
/// e.g. `https://sslnotify.me/confirm.html?user=me@example.com&uuid=...`.
#[derive(Debug)]
pub struct SubscriptionToken {
    user: String,
    uuid: SecretString,
}

impl SubscriptionToken {
    pub fn new(user: impl Into<String>, uuid: impl Into<String>) -> Result<Self, ValidationError> {
        let user = user.into();
        let uuid = uuid.into();
        if user.trim().is_empty() {
            return Err(ValidationError::MissingUser);
        }
        if uuid.trim().is_empty() {
            return Err(ValidationError::MissingToken);
        }
        Ok(Self {
            user: user.trim().to_string(),
            uuid: SecretString::from(uuid.trim().to_string()),
        })
    }

    /// Reads the `user` and `uuid` query parameters of `link`.
    ///
    /// `link` may be a full URL or just its query string.
    pub fn from_link(link: &str) -> Result<Self, ValidationError> {
        let user = page::query_param(link, "user").ok_or(ValidationError::MissingUser)?;
        let uuid = page::query_param(link, "uuid").ok_or(ValidationError::MissingToken)?;
        Self::new(user, uuid)
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn uuid(&self) -> &str {
        self.uuid.expose_secret()
    }
}
