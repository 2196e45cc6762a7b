//! Latest-posts widget: fetches the party blog feed through an RSS-to-JSON
//! proxy and renders it as an HTML list.

use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::NewsConfig;
use crate::error::FeedError;
use crate::html::{escape, strip_html};

pub const PLACEHOLDER_THUMBNAIL: &str = "placeholder.jpg";
pub const EXCERPT_CHARS: usize = 120;
pub const FEED_ERROR_HTML: &str =
    r#"<p class="error-message">Failed to load posts. Please try again later.</p>"#;

static FIRST_IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).unwrap());

/// Proxy response envelope.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    items: Vec<FeedItem>,
}

/// One feed entry as the proxy returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub description: String,
    pub content: String,
    pub thumbnail: String,
    /// `{ "link": ... }`, or an empty array when the entry has none.
    pub enclosure: serde_json::Value,
}

/// A post ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPost {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub excerpt: String,
    pub published: String,
}

impl From<&FeedItem> for NewsPost {
    fn from(item: &FeedItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            thumbnail: thumbnail_for(item),
            excerpt: excerpt(&item.description),
            published: display_date(&item.pub_date),
        }
    }
}

/// Enclosure link, then the item thumbnail, then the first image in the
/// content, then the placeholder.
fn thumbnail_for(item: &FeedItem) -> String {
    item.enclosure
        .get("link")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| Some(item.thumbnail.as_str()).filter(|s| !s.is_empty()))
        .or_else(|| first_image(&item.content))
        .unwrap_or(PLACEHOLDER_THUMBNAIL)
        .to_string()
}

/// `src` of the first `<img>` tag in an HTML fragment.
pub fn first_image(html: &str) -> Option<&str> {
    FIRST_IMG_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn excerpt(description: &str) -> String {
    let text: String = strip_html(description).chars().take(EXCERPT_CHARS).collect();
    format!("{text}...")
}

fn display_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Client for the latest-posts feed.
pub struct NewsFeed {
    client: reqwest::Client,
    config: NewsConfig,
}

impl NewsFeed {
    pub fn new(config: NewsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: NewsConfig) -> Self {
        Self { client, config }
    }

    /// Fetch the newest posts, at most `limit` of them.
    pub async fn fetch_latest(&self) -> Result<Vec<NewsPost>, FeedError> {
        let resp = self
            .client
            .get(&self.config.proxy_url)
            .query(&[("rss_url", self.config.feed_url.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: FeedResponse = resp.json().await?;
        if body.status != "ok" {
            return Err(FeedError::NotOk(body.status));
        }

        let posts: Vec<NewsPost> = body
            .items
            .iter()
            .take(self.config.limit)
            .map(NewsPost::from)
            .collect();
        debug!(count = posts.len(), feed = %self.config.feed_url, "Fetched news feed");
        Ok(posts)
    }

    /// Fetch and render, falling back to the error fragment on any failure.
    pub async fn render_latest(&self) -> String {
        match self.fetch_latest().await {
            Ok(posts) => render_feed(&posts),
            Err(e) => {
                warn!(error = %e, "News feed unavailable");
                render_feed_error()
            }
        }
    }
}

/// Fragment shown in place of the list when the feed cannot be loaded.
pub fn render_feed_error() -> String {
    FEED_ERROR_HTML.to_string()
}

/// Render posts as the widget's item list. Each item's entry animation is
/// staggered by 0.1s.
pub fn render_feed(posts: &[NewsPost]) -> String {
    let mut html = String::new();
    for (index, post) in posts.iter().enumerate() {
        let link = escape(&post.link);
        let title = escape(&post.title);
        let delay = index as f32 * 0.1;
        let _ = write!(
            html,
            concat!(
                r#"<div class="lpi-view-item" style="animation-delay: {delay:.1}s">"#,
                r#"<div class="post-thumbnail"><img src="{thumb}" alt="{title}"></div>"#,
                r#"<div class="post-content">"#,
                r#"<h3><a href="{link}" target="_blank">{title}</a></h3>"#,
                r#"<p>{excerpt}</p>"#,
                r#"<div class="post-meta"><span>{date}</span>"#,
                r#"<a href="{link}" class="read-more" target="_blank">Read More</a></div>"#,
                r#"</div></div>"#,
                "\n"
            ),
            delay = delay,
            thumb = escape(&post.thumbnail),
            title = title,
            link = link,
            excerpt = escape(&post.excerpt),
            date = escape(&post.published),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: serde_json::Value) -> FeedItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn thumbnail_prefers_enclosure() {
        let it = item(serde_json::json!({
            "enclosure": {"link": "https://cdn/enc.jpg"},
            "thumbnail": "https://cdn/thumb.jpg",
            "content": r#"<img src="https://cdn/inline.jpg">"#
        }));
        assert_eq!(thumbnail_for(&it), "https://cdn/enc.jpg");
    }

    #[test]
    fn thumbnail_falls_back_in_order() {
        let it = item(serde_json::json!({
            "enclosure": [],
            "thumbnail": "https://cdn/thumb.jpg",
        }));
        assert_eq!(thumbnail_for(&it), "https://cdn/thumb.jpg");

        let it = item(serde_json::json!({
            "enclosure": {},
            "content": r#"<p>hi</p><img class="x" src="https://cdn/inline.jpg" alt="">"#
        }));
        assert_eq!(thumbnail_for(&it), "https://cdn/inline.jpg");

        let it = item(serde_json::json!({"content": "<p>no images</p>"}));
        assert_eq!(thumbnail_for(&it), PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn excerpt_is_stripped_and_truncated() {
        let long = format!("<p>{}</p>", "a".repeat(300));
        let post = NewsPost::from(&item(serde_json::json!({"description": long})));
        assert_eq!(post.excerpt.chars().count(), EXCERPT_CHARS + 3);
        assert!(post.excerpt.ends_with("..."));
        assert!(!post.excerpt.contains('<'));

        let short = NewsPost::from(&item(serde_json::json!({"description": "<b>Rally</b> today"})));
        assert_eq!(short.excerpt, "Rally today...");
    }

    #[test]
    fn excerpt_entities_are_escaped_once() {
        let post = NewsPost::from(&item(serde_json::json!({
            "description": "<p>Tom &amp; Jerry &lt;3</p>"
        })));
        assert_eq!(post.excerpt, "Tom & Jerry <3...");

        let html = render_feed(&[post]);
        assert!(html.contains("<p>Tom &amp; Jerry &lt;3...</p>"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn dates_render_short_or_raw() {
        assert_eq!(display_date("2025-03-01 10:30:00"), "1 Mar 2025");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn render_escapes_and_staggers() {
        let posts = vec![
            NewsPost {
                title: "Budget & you".into(),
                link: "https://blog/1".into(),
                thumbnail: PLACEHOLDER_THUMBNAIL.into(),
                excerpt: "x...".into(),
                published: "1 Mar 2025".into(),
            },
            NewsPost {
                title: "Second".into(),
                link: "https://blog/2".into(),
                thumbnail: PLACEHOLDER_THUMBNAIL.into(),
                excerpt: "y...".into(),
                published: "2 Mar 2025".into(),
            },
        ];
        let html = render_feed(&posts);
        assert_eq!(html.matches(r#"class="lpi-view-item""#).count(), 2);
        assert!(html.contains("Budget &amp; you"));
        assert!(html.contains("animation-delay: 0.0s"));
        assert!(html.contains("animation-delay: 0.1s"));
        assert!(html.contains(r#"href="https://blog/2""#));
    }

    #[test]
    fn render_empty_feed() {
        assert_eq!(render_feed(&[]), "");
    }

    #[test]
    fn error_fragment() {
        assert!(render_feed_error().contains(r#"class="error-message""#));
    }
}
