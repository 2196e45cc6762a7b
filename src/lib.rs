//! party-join: membership signup flow for the party website.

pub mod card;
pub mod config;
pub mod error;
pub mod form;
pub mod html;
pub mod news;
pub mod relay;
pub mod submission;
