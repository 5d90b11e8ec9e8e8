use sslnotify::configuration::get_configuration;
use sslnotify::domain::Outcome;
use sslnotify::error::ValidationError;
use sslnotify::orchestrator::Orchestrator;
use sslnotify::presenter::{Presenter, TerminalPresenter};
use sslnotify::telemetry::init_subscriber;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(about = "Check SSL certificate expiry and manage expiry alerts", version)]
struct Cli {
    /// Log what happens under the hood.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check when the certificate of a host expires.
    Check {
        host: String,
        /// Warn when the certificate expires within this many days.
        #[arg(short, long)]
        days: Option<String>,
    },
    /// Receive an email before the certificate of a host expires.
    Subscribe {
        host: String,
        #[arg(short, long, env = "SSLNOTIFY_EMAIL")]
        email: String,
        #[arg(short, long)]
        days: Option<String>,
    },
    /// Confirm a subscription with the link received by email.
    Confirm { link: String },
    /// Stop receiving alerts, using the link received by email.
    Unsubscribe { link: String },
    /// Send a message to the maintainers.
    Feedback {
        #[arg(short, long)]
        message: String,
        /// Where to reply, if you want an answer.
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_subscriber(if cli.verbose { "info" } else { "warn" });

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to read configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let client = match settings.api.client() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let default_days = match settings.defaults.days() {
        Ok(days) => days.to_string(),
        Err(e) => {
            error!("Invalid default days in configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let orchestrator = Orchestrator::new(client, TerminalPresenter, settings.redirect);

    match run(&orchestrator, cli.command, &default_days).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            info!("Nothing sent: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run<P: Presenter>(
    orchestrator: &Orchestrator<P>,
    command: Command,
    default_days: &str,
) -> Result<Outcome, ValidationError> {
    let (outcome, mut redirect) = match command {
        Command::Check { host, days } => {
            let days = days.as_deref().unwrap_or(default_days);
            return orchestrator.check_certificate(&host, days).await;
        }
        Command::Subscribe { host, email, days } => {
            let days = days.as_deref().unwrap_or(default_days);
            orchestrator.remind_me(&host, days)?;
            return orchestrator.create_subscription(&email, &host, days).await;
        }
        Command::Confirm { link } => orchestrator.confirm_subscription(&link).await?,
        Command::Unsubscribe { link } => orchestrator.cancel_subscription(&link).await?,
        Command::Feedback { message, email } => {
            orchestrator
                .send_feedback(email.as_deref(), &message)
                .await?
        }
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    orchestrator.follow_redirect(&mut redirect, cancel).await;

    Ok(outcome)
}
