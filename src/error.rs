//! Error types for party-join, one enum per concern.

use crate::form::state::JoinPhase;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised by the step-form controller.
///
/// Field validation failures are not errors; they come back as
/// `ValidationResult`s and block advancement without an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Step {step} does not exist (valid steps are 1..={max})")]
    InvalidStep { step: u8, max: u8 },

    #[error("Step {step} is locked until step {blocking} has been validated")]
    StepLocked { step: u8, blocking: u8 },

    #[error("Cannot {action} while in phase {phase}")]
    InvalidPhase { phase: JoinPhase, action: String },

    #[error("Already at the first step")]
    NoPreviousStep,

    #[error("The confirmation step has no next step; submit instead")]
    NoNextStep,

    #[error("Consent is required before submitting")]
    ConsentRequired,

    #[error("A submission is already in flight")]
    SubmitInFlight,
}

/// Reasons a single submission attempt failed.
///
/// The controller folds all of these into one `Failed` outcome; the variant
/// only survives in logs.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Endpoint returned status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Outbound mail errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// News feed errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Request(String),

    #[error("Feed proxy returned status {0}")]
    Status(u16),

    #[error("Feed proxy reported status {0:?}")]
    NotOk(String),

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Member card errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Uploaded avatar must be an image data URL")]
    InvalidAvatar,
}
