use crate::domain::{Outcome, Style};
use std::io::Write;
use tracing::debug;

/// Where a message is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTarget {
    /// The message area of the main view.
    Page,
    /// The message area inside the subscription dialog.
    Dialog,
}

impl MessageTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageTarget::Page => "page",
            MessageTarget::Dialog => "dialog",
        }
    }
}

/// Everything the orchestrator needs from a user interface.
pub trait Presenter {
    fn show_busy(&self);
    fn hide_busy(&self);
    fn clear(&self, target: MessageTarget);
    fn notify(&self, target: MessageTarget, outcome: &Outcome);
    fn open_subscription_dialog(&self, title: &str);
    fn close_subscription_dialog(&self);
    fn countdown(&self, seconds_left: u32);
    fn navigate(&self, location: &str);
}

/// Keeps the busy indicator visible for as long as it lives.
#[must_use = "the busy indicator is hidden as soon as the guard is dropped"]
pub struct BusyIndicator<'a, P: Presenter + ?Sized> {
    presenter: &'a P,
}

impl<'a, P: Presenter + ?Sized> BusyIndicator<'a, P> {
    pub fn show(presenter: &'a P) -> Self {
        presenter.show_busy();
        Self { presenter }
    }
}

impl<P: Presenter + ?Sized> Drop for BusyIndicator<'_, P> {
    fn drop(&mut self) {
        self.presenter.hide_busy();
    }
}

/// Renders to the terminal: results on stdout, errors on stderr.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn show_busy(&self) {
        eprint!("Please wait...");
        let _ = std::io::stderr().flush();
    }

    fn hide_busy(&self) {
        // Erase the wait line.
        eprint!("\r\x1b[2K");
        let _ = std::io::stderr().flush();
    }

    fn clear(&self, target: MessageTarget) {
        debug!(area = target.as_str(), "message cleared");
    }

    fn notify(&self, target: MessageTarget, outcome: &Outcome) {
        debug!(area = target.as_str(), style = outcome.style().as_str(), "notify");
        match outcome.style() {
            Style::Success => println!("{}", outcome.message()),
            Style::Danger => eprintln!("error: {}", outcome.message()),
        }
    }

    fn open_subscription_dialog(&self, title: &str) {
        println!("{title}");
    }

    fn close_subscription_dialog(&self) {
        debug!("subscription dialog closed");
    }

    fn countdown(&self, seconds_left: u32) {
        println!("redirecting to homepage in {seconds_left} seconds...");
    }

    fn navigate(&self, location: &str) {
        println!("Continue at {location}");
    }
}
