//! Join form fields and the values the user has entered.

use serde::{Deserialize, Serialize};

/// Every input the join form binds to.
///
/// This is the one-time binding between the controller and the page: each
/// field knows its element id and the id of its error slot, so nothing else
/// has to look elements up by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Gender,
    Age,
    Occupation,
    Email,
    Phone,
    State,
    District,
    Address,
    Interests,
    Issues,
    HowHeard,
    Comments,
    Newsletter,
    Consent,
}

impl FieldId {
    pub const ALL: [FieldId; 15] = [
        Self::FullName,
        Self::Gender,
        Self::Age,
        Self::Occupation,
        Self::Email,
        Self::Phone,
        Self::State,
        Self::District,
        Self::Address,
        Self::Interests,
        Self::Issues,
        Self::HowHeard,
        Self::Comments,
        Self::Newsletter,
        Self::Consent,
    ];

    /// Element id (or input group name) of the field on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Occupation => "occupation",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::State => "state",
            Self::District => "district",
            Self::Address => "address",
            Self::Interests => "interests",
            Self::Issues => "issues",
            Self::HowHeard => "howHeard",
            Self::Comments => "comments",
            Self::Newsletter => "newsletter",
            Self::Consent => "consent",
        }
    }

    /// Id of the inline error slot rendered next to the field.
    pub fn error_slot_id(&self) -> String {
        format!("{}Error", self.element_id())
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Options of the "how did you hear about us" select: `(value, label)`.
pub const HOW_HEARD_OPTIONS: &[(&str, &str)] = &[
    ("social-media", "Social Media"),
    ("friend", "Friend or Family"),
    ("news", "News Media"),
    ("event", "Party Event"),
    ("website", "Party Website"),
    ("other", "Other"),
];

/// Label for a "how heard" option value, if it is one of ours.
pub fn how_heard_label(value: &str) -> Option<&'static str> {
    HOW_HEARD_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Current values of every join form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub gender: String,
    pub age: String,
    pub occupation: String,
    pub email: String,
    pub phone: String,
    /// Region code, e.g. `WB`.
    pub state: String,
    /// District option value (slug), e.g. `south-andaman`.
    pub district: String,
    pub address: String,
    pub interests: Vec<String>,
    pub issues: Vec<String>,
    pub how_heard: String,
    pub comments: String,
    pub newsletter: bool,
    pub consent: bool,
}

impl FormValues {
    /// Check or uncheck one option of a multi-select group.
    ///
    /// Checking keeps insertion order and ignores duplicates.
    pub fn set_checked(group: &mut Vec<String>, value: &str, checked: bool) {
        if checked {
            if !group.iter().any(|v| v == value) {
                group.push(value.to_string());
            }
        } else {
            group.retain(|v| v != value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_slot_ids_follow_element_ids() {
        assert_eq!(FieldId::FullName.error_slot_id(), "fullNameError");
        assert_eq!(FieldId::Interests.error_slot_id(), "interestsError");
        assert_eq!(FieldId::Consent.error_slot_id(), "consentError");
    }

    #[test]
    fn element_ids_are_unique() {
        let mut ids: Vec<_> = FieldId::ALL.iter().map(|f| f.element_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FieldId::ALL.len());
    }

    #[test]
    fn display_matches_serde() {
        for field in FieldId::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{field}\""));
        }
    }

    #[test]
    fn set_checked_toggles_without_duplicates() {
        let mut group = Vec::new();
        FormValues::set_checked(&mut group, "volunteer", true);
        FormValues::set_checked(&mut group, "donate", true);
        FormValues::set_checked(&mut group, "volunteer", true);
        assert_eq!(group, vec!["volunteer", "donate"]);

        FormValues::set_checked(&mut group, "volunteer", false);
        assert_eq!(group, vec!["donate"]);
    }

    #[test]
    fn how_heard_lookup() {
        assert_eq!(how_heard_label("friend"), Some("Friend or Family"));
        assert_eq!(how_heard_label("carrier-pigeon"), None);
    }
}
