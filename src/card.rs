//! Member ID card: issues a card number and renders the card fragment.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::html::escape;

const MALE_AVATAR: &str = "https://img.freepik.com/free-vector/smiling-young-man-illustration_1308-173524.jpg";
const FEMALE_AVATAR: &str =
    "https://img.freepik.com/free-vector/traditional-indian-woman-illustration_1308-174432.jpg";
const OTHER_AVATAR: &str = "data:image/svg+xml;base64,PHN2ZyB2aWV3Qm94PSIwIDAgMjQgMjQiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+PGNpcmNsZSBjeD0iMTIiIGN5PSIxMiIgcj0iMTAiIGZpbGw9IiMwYTI0NjMiLz48L3N2Zz4=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// Avatar shown when the member did not upload one.
    pub fn default_avatar(&self) -> &'static str {
        match self {
            Self::Male => MALE_AVATAR,
            Self::Female => FEMALE_AVATAR,
            Self::Other => OTHER_AVATAR,
        }
    }
}

impl FromStr for Gender {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// What the member typed into the card form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub age: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub gender: Gender,
    /// Uploaded picture as a `data:image/...` URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// An issued member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberCard {
    /// `YYYY-NNNN`.
    pub number: String,
    pub name: String,
    pub age: String,
    pub location: String,
    /// e.g. `October 2026`.
    pub member_since: String,
    pub avatar: String,
}

impl MemberCard {
    /// Issue a card dated `now` with a random four-digit serial.
    pub fn issue(
        request: &CardRequest,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<Self, CardError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(CardError::MissingField { field: "name" });
        }
        let city = request.city.trim();
        if city.is_empty() {
            return Err(CardError::MissingField { field: "city" });
        }

        let avatar = match request.avatar.as_deref().map(str::trim) {
            Some(data) if !data.is_empty() => {
                if !data.starts_with("data:image/") {
                    return Err(CardError::InvalidAvatar);
                }
                data.to_string()
            }
            _ => request.gender.default_avatar().to_string(),
        };

        let state = request.state.trim();
        let location = if state.is_empty() {
            city.to_string()
        } else {
            format!("{city}, {state}")
        };

        let serial: u16 = rng.gen_range(1000..=9999);
        Ok(Self {
            number: format!("{}-{serial}", now.year()),
            name: name.to_string(),
            age: request.age.trim().to_string(),
            location,
            member_since: now.format("%B %Y").to_string(),
            avatar,
        })
    }

    /// Card fragment as shown in the preview modal.
    pub fn render(&self) -> String {
        format!(
            concat!(
                r#"<div class="libertarian-card">"#,
                r#"<div class="card-avatar"><img src="{avatar}" alt="Member avatar"></div>"#,
                r#"<div class="card-details">"#,
                r#"<div class="card-name">{name}</div>"#,
                r#"<div class="card-field"><span>Age:</span> {age}</div>"#,
                r#"<div class="card-field"><span>Location:</span> {location}</div>"#,
                r#"<div class="card-field"><span>ID:</span> {number}</div>"#,
                r#"<div class="card-field"><span>Member since:</span> {since}</div>"#,
                r#"</div></div>"#
            ),
            avatar = escape(&self.avatar),
            name = escape(&self.name),
            age = escape(&self.age),
            location = escape(&self.location),
            number = escape(&self.number),
            since = escape(&self.member_since),
        )
    }
}
