use thiserror::Error;

/// Message shown when the server could not be reached or answered with
/// something we could not read.
pub const FALLBACK_MESSAGE: &str =
    "Something went wrong while contacting the server. Please try again later.";

/// Rejection of user supplied input. Raised before any request is sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide a Host to check")]
    MissingHost,
    #[error("Please specify a valid Host value")]
    InvalidHost,
    #[error("Please provide the number of days")]
    MissingDays,
    #[error("Days Tolerance value must be a positive number")]
    NotPositive,
    #[error("Days Tolerance value is too large")]
    DaysTooLarge,
    #[error("Please specify the Email address.")]
    MissingEmail,
    #[error("Please specify a valid Email address.")]
    InvalidEmail,
    #[error("The link does not name a user")]
    MissingUser,
    #[error("The link does not carry a subscription token")]
    MissingToken,
    #[error("Please write a message before sending feedback.")]
    MissingFeedback,
}

/// Failure of a remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered and explained why it refused the request.
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The text a user should see for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Rejected(message) => message,
            ApiError::Transport(_) | ApiError::Decode(_) => FALLBACK_MESSAGE,
        }
    }
}
