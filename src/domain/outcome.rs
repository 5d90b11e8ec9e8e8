use crate::error::ApiError;

/// Visual treatment of a rendered [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Danger,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Success => "success",
            Style::Danger => "danger",
        }
    }
}

/// Result of a completed action, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message) | Outcome::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn style(&self) -> Style {
        match self {
            Outcome::Success(_) => Style::Success,
            Outcome::Error(_) => Style::Danger,
        }
    }
}

impl From<Result<String, ApiError>> for Outcome {
    fn from(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Outcome::Success(message),
            Err(e) => Outcome::Error(e.user_message().to_string()),
        }
    }
}
