pub mod api;
pub mod client;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod page;
pub mod presenter;
pub mod redirect;
pub mod telemetry;

pub use client::*;
pub use configuration::*;
pub use domain::*;
pub use error::*;
pub use orchestrator::*;
pub use presenter::*;
pub use redirect::*;
