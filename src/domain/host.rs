use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static HOST_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^.\s]+(\.[^.\s]+)+$").expect("host pattern must compile"));

/// Represents the domain name whose certificate is checked.
///
/// A host is accepted when it is made of at least two dot separated labels,
/// none of them empty or containing whitespace, e.g. `example.com` or
/// `www.example.co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Validates `raw` and wraps it as a `Host`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sslnotify::domain::Host;
    ///
    /// let host = Host::parse("example.com").unwrap();
    /// assert_eq!(host.as_str(), "example.com");
    /// assert!(Host::parse("localhost").is_err());
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let host = raw.as_ref().trim();
        if host.is_empty() {
            return Err(ValidationError::MissingHost);
        }
        if !HOST_SHAPE.is_match(host) {
            return Err(ValidationError::InvalidHost);
        }
        Ok(Self(host.to_string()))
    }

    /// Returns the host as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
