//! Submission adapter: the one outbound request per submit action.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::form::fields::FormValues;

/// Current version of the join payload schema.
pub const SCHEMA_VERSION: u32 = 1;

/// Wire contract between the join form and the relay.
///
/// Built once at submit time from the form values. Every field defaults on
/// the receiving side so older or partial clients still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionPayload {
    pub schema_version: u32,
    pub full_name: String,
    pub gender: String,
    pub age: String,
    pub occupation: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub address: String,
    pub interests: Vec<String>,
    pub issues: Vec<String>,
    pub how_heard: String,
    pub comments: String,
    pub newsletter: bool,
}

impl Default for SubmissionPayload {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            full_name: String::new(),
            gender: String::new(),
            age: String::new(),
            occupation: String::new(),
            email: String::new(),
            phone: String::new(),
            state: String::new(),
            district: String::new(),
            address: String::new(),
            interests: Vec::new(),
            issues: Vec::new(),
            how_heard: String::new(),
            comments: String::new(),
            newsletter: false,
        }
    }
}

impl From<&FormValues> for SubmissionPayload {
    /// Free-text values are trimmed the same way the summary shows them.
    fn from(values: &FormValues) -> Self {
        let text = |s: &str| s.trim().to_string();
        Self {
            schema_version: SCHEMA_VERSION,
            full_name: text(&values.full_name),
            gender: text(&values.gender),
            age: text(&values.age),
            occupation: text(&values.occupation),
            email: text(&values.email),
            phone: text(&values.phone),
            state: text(&values.state),
            district: text(&values.district),
            address: text(&values.address),
            interests: values.interests.clone(),
            issues: values.issues.clone(),
            how_heard: text(&values.how_heard),
            comments: text(&values.comments),
            newsletter: values.newsletter,
        }
    }
}

/// Result of a submission attempt as the form sees it.
///
/// Every failure mode folds into `Failed`; the reason is kept for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl From<Result<String, SubmitError>> for SubmitOutcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(message) => Self::Accepted { message },
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Something that can deliver a join payload.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver `payload` once. Never retries.
    async fn submit(&self, payload: &SubmissionPayload) -> SubmitOutcome;
}

/// Successful relay response body.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    message: String,
}

/// POSTs the payload as JSON to the relay endpoint.
///
/// No client-side timeout is set: a hanging relay keeps the form in
/// `Submitting` until the connection resolves.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submitter for the configured join endpoint.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, payload: &SubmissionPayload) -> Result<String, SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let ack: Acknowledgement = serde_json::from_str(&body)
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;
        Ok(ack.message)
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmitOutcome {
        let outcome = SubmitOutcome::from(self.send(payload).await);
        match &outcome {
            SubmitOutcome::Accepted { message } => {
                info!(endpoint = %self.endpoint, message = %message, "Join form submitted");
            }
            SubmitOutcome::Failed { reason } => {
                warn!(endpoint = %self.endpoint, reason = %reason, "Join form submission failed");
            }
        }
        outcome
    }
}
