use crate::presenter::Presenter;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectState {
    Idle,
    CountingDown(u32),
    Redirected,
}

/// Navigation back to a landing view after a visible countdown.
///
/// `Idle` becomes `CountingDown(seconds)` on [`start`](Self::start), each
/// [`tick`](Self::tick) takes one second off, and a tick at zero ends in
/// `Redirected`, which is terminal.
#[derive(Debug, Clone)]
pub struct TimedRedirect {
    seconds: u32,
    destination: String,
    state: RedirectState,
}

impl TimedRedirect {
    pub fn new(seconds: u32, destination: impl Into<String>) -> Self {
        Self {
            seconds,
            destination: destination.into(),
            state: RedirectState::Idle,
        }
    }

    pub fn state(&self) -> RedirectState {
        self.state
    }

    /// Starts counting down. Has no effect once started.
    pub fn start(&mut self) -> RedirectState {
        if self.state == RedirectState::Idle {
            self.state = RedirectState::CountingDown(self.seconds);
        }
        self.state
    }

    pub fn tick(&mut self) -> RedirectState {
        self.state = match self.state {
            RedirectState::CountingDown(0) => RedirectState::Redirected,
            RedirectState::CountingDown(n) => RedirectState::CountingDown(n - 1),
            other => other,
        };
        self.state
    }

    /// Drives the countdown once per second until navigation fires or
    /// `cancel` is triggered, and returns the state it stopped in.
    ///
    /// Zero is shown in the same second the navigation happens, so the
    /// whole flow takes `seconds` seconds.
    #[instrument(skip_all, fields(destination = %self.destination))]
    pub async fn run<P: Presenter + ?Sized>(
        &mut self,
        presenter: &P,
        cancel: CancellationToken,
    ) -> RedirectState {
        self.start();
        if self.render(presenter) {
            return self.state;
        }

        let mut interval = tokio::time::interval(TICK);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Redirect cancelled");
                    return self.state;
                }
                _ = interval.tick() => {
                    self.tick();
                    if self.render(presenter) {
                        return self.state;
                    }
                }
            }
        }
    }

    /// Shows the current state; returns `true` once navigation has fired.
    fn render<P: Presenter + ?Sized>(&mut self, presenter: &P) -> bool {
        match self.state {
            RedirectState::CountingDown(0) => {
                presenter.countdown(0);
                self.tick();
                self.navigate(presenter);
                true
            }
            RedirectState::CountingDown(n) => {
                presenter.countdown(n);
                false
            }
            RedirectState::Redirected => {
                self.navigate(presenter);
                true
            }
            RedirectState::Idle => false,
        }
    }

    fn navigate<P: Presenter + ?Sized>(&self, presenter: &P) {
        info!("Redirecting to {}", self.destination);
        presenter.navigate(&self.destination);
    }
}
