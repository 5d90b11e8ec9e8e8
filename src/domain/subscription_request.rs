use crate::domain::{CheckRequest, Host, NotifyEmail, ToleranceDays};

/// Asks the service to email `email` once the certificate of `host`
/// is within `days` of expiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    email: NotifyEmail,
    check: CheckRequest,
}

impl SubscriptionRequest {
    pub fn new(email: NotifyEmail, host: Host, days: ToleranceDays) -> Self {
        Self {
            email,
            check: CheckRequest::new(host, days),
        }
    }

    pub fn email(&self) -> &NotifyEmail {
        &self.email
    }

    pub fn host(&self) -> &Host {
        self.check.host()
    }

    pub fn days(&self) -> ToleranceDays {
        self.check.days()
    }
}
