mod check_request;
mod feedback;
mod host;
mod notify_email;
mod outcome;
mod subscription_request;
mod subscription_token;
mod tolerance_days;

pub use check_request::*;
pub use feedback::*;
pub use host::*;
pub use notify_email::*;
pub use outcome::*;
pub use subscription_request::*;
pub use subscription_token::*;
pub use tolerance_days::*;
