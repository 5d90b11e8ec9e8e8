use crate::client::SslNotifyClient;
use crate::domain::ToleranceDays;
use crate::error::{ApiError, ValidationError};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::time::Duration;

const BASE_CONFIG: &str = include_str!("../configuration/base.yaml");
const LOCAL_CONFIG: &str = include_str!("../configuration/local.yaml");
const PRODUCTION_CONFIG: &str = include_str!("../configuration/production.yaml");

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub redirect: RedirectSettings,
    pub defaults: DefaultSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub check_base_url: String,
    pub base_url: String,
    /// Requests wait indefinitely when unset.
    pub timeout_seconds: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn client(&self) -> Result<SslNotifyClient, ApiError> {
        SslNotifyClient::new(&self.check_base_url, &self.base_url, self.timeout())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedirectSettings {
    pub seconds: u32,
    pub destination: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultSettings {
    pub days: u32,
}

impl DefaultSettings {
    pub fn days(&self) -> Result<ToleranceDays, ValidationError> {
        ToleranceDays::new(i64::from(self.days))
    }
}

/// Loads settings for the environment named by `APP_ENVIRONMENT`
/// (`production` when unset), then applies `APP_*` overrides.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let environment = get_environment()?;
    build_configuration(environment)
}

fn get_environment() -> Result<Environment, config::ConfigError> {
    let env_var = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".to_string());

    env_var
        .try_into()
        .map_err(|e: String| config::ConfigError::Message(e))
}

fn build_configuration(environment: Environment) -> Result<Settings, config::ConfigError> {
    let environment_config = match environment {
        Environment::Local => LOCAL_CONFIG,
        Environment::Production => PRODUCTION_CONFIG,
    };

    let config = Config::builder()
        .add_source(File::from_str(BASE_CONFIG, FileFormat::Yaml))
        .add_source(File::from_str(environment_config, FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    config.try_deserialize::<Settings>()
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
