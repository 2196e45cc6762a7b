//! Social share links shown after a successful signup.

use reqwest::Url;
use serde::Serialize;

pub const SHARE_MESSAGE: &str =
    "I just joined the Liberation Party of India! Join the movement for a better India.";

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const WHATSAPP_SEND: &str = "https://api.whatsapp.com/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub whatsapp: String,
}

/// Share links pointing back at `page_url`, with the join message.
pub fn share_links(page_url: &str) -> ShareLinks {
    let whatsapp_text = format!("{SHARE_MESSAGE} {page_url}");
    ShareLinks {
        facebook: link(FACEBOOK_SHARER, &[("u", page_url), ("quote", SHARE_MESSAGE)]),
        twitter: link(TWITTER_INTENT, &[("text", SHARE_MESSAGE), ("url", page_url)]),
        whatsapp: link(WHATSAPP_SEND, &[("text", whatsapp_text.as_str())]),
    }
}

fn link(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        // Bases are constants, so this only happens if one is mistyped.
        Err(_) => base.to_string(),
    }
}
