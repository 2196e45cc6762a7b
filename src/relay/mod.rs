//! Mail relay: receives join payloads over HTTP and emails them.

pub mod mailer;
pub mod routes;

pub use mailer::{Mailer, OutboundMail, SmtpMailer, format_submission};
pub use routes::{RelayError, RelayState, relay_routes};
