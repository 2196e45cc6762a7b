//! Configuration types, built from environment variables.

use std::str::FromStr;

use secrecy::SecretString;

use crate::error::ConfigError;

pub const DEFAULT_RELAY_PORT: u16 = 5000;
pub const DEFAULT_SMTP_HOST: &str = "smtp.office365.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SUBJECT: &str = "New Join Form Submission";
pub const DEFAULT_JOIN_ENDPOINT: &str = "http://localhost:5000/submit-form";
pub const DEFAULT_JOIN_PAGE_URL: &str = "https://libertarianparty.in/join.html";
pub const DEFAULT_FEED_URL: &str = "https://libertarianparty.in/rss/latest-posts";
pub const DEFAULT_FEED_PROXY: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_FEED_LIMIT: usize = 5;

/// Mail relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// SMTP account; also the default sender.
    pub username: String,
    pub password: SecretString,
    pub from_address: String,
    /// Where submissions are delivered. Defaults to the account itself.
    pub to_address: String,
    pub subject: String,
}

impl RelayConfig {
    /// Build config from the process environment. `EMAIL` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username = non_empty(&lookup, "EMAIL")
            .ok_or_else(|| ConfigError::MissingEnvVar("EMAIL".into()))?;
        let password = SecretString::from(lookup("PASSWORD").unwrap_or_default());

        Ok(Self {
            port: parse_or(&lookup, "RELAY_PORT", DEFAULT_RELAY_PORT)?,
            smtp_host: non_empty(&lookup, "SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
            smtp_port: parse_or(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            from_address: non_empty(&lookup, "RELAY_FROM").unwrap_or_else(|| username.clone()),
            to_address: non_empty(&lookup, "RELAY_TO").unwrap_or_else(|| username.clone()),
            subject: non_empty(&lookup, "RELAY_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.into()),
            username,
            password,
        })
    }
}

/// Join form settings: where it posts and the page address it shares.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub page_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint: non_empty(&lookup, "JOIN_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_JOIN_ENDPOINT.into()),
            page_url: non_empty(&lookup, "JOIN_PAGE_URL")
                .unwrap_or_else(|| DEFAULT_JOIN_PAGE_URL.into()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_JOIN_ENDPOINT.into(),
            page_url: DEFAULT_JOIN_PAGE_URL.into(),
        }
    }
}

/// News feed widget configuration.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub feed_url: String,
    pub proxy_url: String,
    pub limit: usize,
}

impl NewsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            feed_url: non_empty(&lookup, "NEWS_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.into()),
            proxy_url: non_empty(&lookup, "NEWS_PROXY_URL")
                .unwrap_or_else(|| DEFAULT_FEED_PROXY.into()),
            limit: parse_or(&lookup, "NEWS_LIMIT", DEFAULT_FEED_LIMIT)?,
        })
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.into(),
            proxy_url: DEFAULT_FEED_PROXY.into(),
            limit: DEFAULT_FEED_LIMIT,
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?}: {e}"),
        }),
        None => Ok(default),
    }
}
