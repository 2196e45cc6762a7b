//! Region → district lookup for the contact step.

use serde::Serialize;

/// One state/UT with its districts, in display order.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

/// A select option as it is rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Static region table, keyed by region code.
pub const REGIONS: &[Region] = &[
    Region {
        code: "AN",
        name: "Andaman and Nicobar Islands",
        districts: &["Port Blair", "South Andaman", "North & Middle Andaman", "Nicobar"],
    },
    Region {
        code: "AP",
        name: "Andhra Pradesh",
        districts: &["Visakhapatnam", "Vijayawada", "Tirupati", "Guntur", "Nellore"],
    },
    Region {
        code: "AS",
        name: "Assam",
        districts: &["Guwahati", "Jorhat", "Silchar", "Dibrugarh", "Nagaon"],
    },
    Region {
        code: "BR",
        name: "Bihar",
        districts: &["Patna", "Gaya", "Muzaffarpur", "Bhagalpur", "Darbhanga"],
    },
    Region {
        code: "CH",
        name: "Chandigarh",
        districts: &["Chandigarh"],
    },
    Region {
        code: "DL",
        name: "Delhi",
        districts: &[
            "Central Delhi",
            "East Delhi",
            "New Delhi",
            "North Delhi",
            "South Delhi",
            "West Delhi",
        ],
    },
    Region {
        code: "WB",
        name: "West Bengal",
        districts: &["Kolkata", "Howrah", "Asansol", "Durgapur", "Siliguri"],
    },
];

/// Look up a region by code.
pub fn region(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.code == code)
}

/// Option value for a district: lowercase, whitespace runs replaced by `-`.
pub fn district_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// District options for a region code. Empty when the code is unknown,
/// which the page renders as a disabled select.
pub fn district_options(code: &str) -> Vec<SelectOption> {
    region(code)
        .map(|r| {
            r.districts
                .iter()
                .map(|d| SelectOption {
                    value: district_slug(d),
                    label: (*d).to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Display name of a district given its region code and option value.
pub fn district_label(code: &str, slug: &str) -> Option<&'static str> {
    region(code)?
        .districts
        .iter()
        .find(|d| district_slug(d) == slug)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(district_slug("Port Blair"), "port-blair");
        assert_eq!(district_slug("North & Middle Andaman"), "north-&-middle-andaman");
        assert_eq!(district_slug("  New   Delhi "), "new-delhi");
    }

    #[test]
    fn options_for_known_region() {
        let options = district_options("CH");
        assert_eq!(
            options,
            vec![SelectOption {
                value: "chandigarh".into(),
                label: "Chandigarh".into()
            }]
        );
        assert_eq!(district_options("WB").len(), 5);
    }

    #[test]
    fn options_for_unknown_or_empty_region() {
        assert!(district_options("").is_empty());
        assert!(district_options("ZZ").is_empty());
    }

    #[test]
    fn label_round_trips_through_slug() {
        assert_eq!(district_label("DL", "south-delhi"), Some("South Delhi"));
        assert_eq!(district_label("DL", "kolkata"), None);
        assert_eq!(district_label("ZZ", "kolkata"), None);
    }

    #[test]
    fn region_codes_are_unique() {
        let mut codes: Vec<_> = REGIONS.iter().map(|r| r.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), REGIONS.len());
    }
}
