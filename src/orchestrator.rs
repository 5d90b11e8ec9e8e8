use crate::client::SslNotifyClient;
use crate::configuration::RedirectSettings;
use crate::domain::{
    CheckRequest, Feedback, Host, NotifyEmail, Outcome, SubscriptionRequest, SubscriptionToken,
    ToleranceDays,
};
use crate::error::{ApiError, ValidationError};
use crate::presenter::{BusyIndicator, MessageTarget, Presenter};
use crate::redirect::{RedirectState, TimedRedirect};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Turns raw form values into validated requests, sends them, and reports
/// exactly one outcome per action through the [`Presenter`].
pub struct Orchestrator<P: Presenter> {
    client: SslNotifyClient,
    presenter: P,
    redirect: RedirectSettings,
}

impl<P: Presenter> Orchestrator<P> {
    pub fn new(client: SslNotifyClient, presenter: P, redirect: RedirectSettings) -> Self {
        Self {
            client,
            presenter,
            redirect,
        }
    }

    /// Checks the certificate of `host` against a `days` tolerance.
    #[instrument(skip(self))]
    pub async fn check_certificate(
        &self,
        host: &str,
        days: &str,
    ) -> Result<Outcome, ValidationError> {
        let request = self.validate(MessageTarget::Page, CheckRequest::parse(host, days))?;
        self.presenter.clear(MessageTarget::Page);

        Ok(self.dispatch(self.client.check_certificate(&request)).await)
    }

    /// Validates the check form and opens the subscription dialog for it.
    #[instrument(skip(self))]
    pub fn remind_me(&self, host: &str, days: &str) -> Result<CheckRequest, ValidationError> {
        let request = self.validate(MessageTarget::Page, CheckRequest::parse(host, days))?;
        self.presenter.clear(MessageTarget::Page);

        let title = format!(
            "Register to receive alerts via email starting from {} days before the SSL certificate for {} will expire.",
            request.days(),
            request.host()
        );
        self.presenter.open_subscription_dialog(&title);
        self.presenter.clear(MessageTarget::Dialog);
        Ok(request)
    }

    /// Registers `email` for expiry alerts about `host`.
    ///
    /// Email problems are shown inside the dialog, host and days problems on
    /// the page. The dialog closes once the request is on its way.
    #[instrument(skip(self, email))]
    pub async fn create_subscription(
        &self,
        email: &str,
        host: &str,
        days: &str,
    ) -> Result<Outcome, ValidationError> {
        let email = self.validate(MessageTarget::Dialog, NotifyEmail::parse(email))?;
        let host = self.validate(MessageTarget::Page, Host::parse(host))?;
        let days = self.validate(MessageTarget::Page, ToleranceDays::parse(days))?;
        let request = SubscriptionRequest::new(email, host, days);

        let call = self.client.create_subscription(&request);
        self.presenter.close_subscription_dialog();
        Ok(self.dispatch(call).await)
    }

    /// Confirms the subscription named by an emailed `link`.
    #[instrument(skip_all)]
    pub async fn confirm_subscription(
        &self,
        link: &str,
    ) -> Result<(Outcome, TimedRedirect), ValidationError> {
        let token = self.validate(MessageTarget::Page, SubscriptionToken::from_link(link))?;
        let outcome = self.dispatch(self.client.confirm_subscription(&token)).await;
        Ok((outcome, self.start_redirect()))
    }

    /// Cancels the subscription named by an emailed `link`.
    #[instrument(skip_all)]
    pub async fn cancel_subscription(
        &self,
        link: &str,
    ) -> Result<(Outcome, TimedRedirect), ValidationError> {
        let token = self.validate(MessageTarget::Page, SubscriptionToken::from_link(link))?;
        let outcome = self.dispatch(self.client.cancel_subscription(&token)).await;
        Ok((outcome, self.start_redirect()))
    }

    #[instrument(skip_all)]
    pub async fn send_feedback(
        &self,
        email: Option<&str>,
        message: &str,
    ) -> Result<(Outcome, TimedRedirect), ValidationError> {
        let feedback = self.validate(MessageTarget::Page, Feedback::parse(email, message))?;
        let outcome = self.dispatch(self.client.send_feedback(&feedback)).await;
        Ok((outcome, self.start_redirect()))
    }

    /// Runs a redirect returned by one of the subscription actions.
    pub async fn follow_redirect(
        &self,
        redirect: &mut TimedRedirect,
        cancel: CancellationToken,
    ) -> RedirectState {
        redirect.run(&self.presenter, cancel).await
    }

    fn start_redirect(&self) -> TimedRedirect {
        let mut redirect = TimedRedirect::new(self.redirect.seconds, &self.redirect.destination);
        redirect.start();
        redirect
    }

    fn validate<T>(
        &self,
        target: MessageTarget,
        result: Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        result.inspect_err(|e| {
            info!(area = target.as_str(), "Rejected input: {}", e);
            self.presenter
                .notify(target, &Outcome::Error(e.to_string()));
        })
    }

    /// The call future is lazy, so the busy indicator is up before the
    /// request starts and comes down only after it settles.
    async fn dispatch<F>(&self, call: F) -> Outcome
    where
        F: Future<Output = Result<String, ApiError>>,
    {
        let outcome = {
            let _busy = BusyIndicator::show(&self.presenter);
            Outcome::from(call.await)
        };
        info!(success = outcome.is_success(), "{}", outcome.message());
        self.presenter.notify(MessageTarget::Page, &outcome);
        outcome
    }
}
