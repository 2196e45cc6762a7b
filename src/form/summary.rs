//! Confirmation-step summary renderer.

use std::fmt::Write as _;

use super::fields::{FormValues, how_heard_label};
use super::regions::{district_label, region};
use crate::html::escape;

const NOT_PROVIDED: &str = "Not provided";
const NOT_SELECTED: &str = "Not selected";
const NONE_SELECTED: &str = "None selected";

/// Render the read-only summary shown on the confirmation step.
///
/// Pure: the same values always produce the same bytes, and every row is
/// present whether or not the field was filled in.
pub fn render_summary(values: &FormValues) -> String {
    let region_name = region(&values.state).map(|r| r.name);
    let district_name = district_label(&values.state, &values.district);
    let how_heard = how_heard_label(&values.how_heard);

    let mut html = String::new();

    section(
        &mut html,
        "Personal Information",
        &[
            ("Full Name", text_or(&values.full_name, NOT_PROVIDED)),
            ("Gender", text_or(&values.gender, NOT_PROVIDED)),
            ("Age Group", text_or(&values.age, NOT_PROVIDED)),
            ("Occupation", text_or(&values.occupation, NOT_PROVIDED)),
        ],
    );

    section(
        &mut html,
        "Contact Information",
        &[
            ("Email", text_or(&values.email, NOT_PROVIDED)),
            ("Phone", text_or(&values.phone, NOT_PROVIDED)),
            ("State/UT", region_name.unwrap_or(NOT_SELECTED)),
            ("District", district_name.unwrap_or(NOT_SELECTED)),
            ("Address", text_or(&values.address, NOT_PROVIDED)),
        ],
    );

    let interests = list_or(&values.interests);
    let issues = list_or(&values.issues);
    section(
        &mut html,
        "Interests & Preferences",
        &[
            ("Contribution Areas", interests.as_str()),
            ("Important Issues", issues.as_str()),
            ("How you heard about us", how_heard.unwrap_or(NOT_SELECTED)),
            (
                "Newsletter subscription",
                if values.newsletter { "Yes" } else { "No" },
            ),
        ],
    );

    html
}

fn text_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

fn list_or(items: &[String]) -> String {
    if items.is_empty() {
        NONE_SELECTED.to_string()
    } else {
        items.join(", ")
    }
}

fn section(html: &mut String, title: &str, rows: &[(&str, &str)]) {
    // Writing to a String cannot fail.
    let _ = writeln!(html, r#"<div class="summary-section">"#);
    let _ = writeln!(html, r#"  <h4 class="summary-title">{}</h4>"#, escape(title));
    for (label, value) in rows {
        let _ = writeln!(html, r#"  <div class="summary-item">"#);
        let _ = writeln!(html, r#"    <div class="summary-label">{}:</div>"#, escape(label));
        let _ = writeln!(html, r#"    <div class="summary-value">{}</div>"#, escape(value));
        let _ = writeln!(html, "  </div>");
    }
    let _ = writeln!(html, "</div>");
}
