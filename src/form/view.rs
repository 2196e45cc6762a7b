//! The page the controller drives.
//!
//! The controller never looks elements up itself. It talks to a [`FormView`]
//! through typed field ids, and the view maps those onto whatever the real
//! page is. [`PageModel`] is the in-memory view used for server-side
//! rendering and tests.

use std::collections::HashMap;

use serde::Serialize;

use super::fields::FieldId;
use super::regions::SelectOption;
use super::share::ShareLinks;
use super::steps::STEP_COUNT;

/// Which status banner is on screen below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Banner {
    #[default]
    Hidden,
    Loading,
    Success,
    Error,
}

/// Presentational collaborator of the join controller.
pub trait FormView {
    /// Show step `step`'s section and hide every other one. `None` hides all
    /// steps (after a successful submission).
    fn show_step(&mut self, step: Option<u8>);

    /// Mark progress indices `1..=active_through` active, the rest inactive.
    fn set_progress(&mut self, active_through: u8);

    /// Set or clear (`None`) the inline error slot of a field.
    fn set_field_error(&mut self, field: FieldId, message: Option<&str>);

    /// Replace the contents of the summary container.
    fn set_summary(&mut self, html: &str);

    /// Replace the district options; an empty list disables the select.
    fn set_district_options(&mut self, options: &[SelectOption]);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn show_banner(&mut self, banner: Banner);

    /// Point the success banner's share buttons at these links.
    fn set_share_links(&mut self, links: &ShareLinks);
}

/// In-memory page state.
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub visible_step: Option<u8>,
    /// Progress indicator, index 0 is step 1.
    pub progress: Vec<bool>,
    pub errors: HashMap<FieldId, String>,
    pub summary: String,
    pub district_options: Vec<SelectOption>,
    pub district_enabled: bool,
    pub submit_enabled: bool,
    pub banner: Banner,
    pub share_links: Option<ShareLinks>,
}

impl PageModel {
    pub fn new() -> Self {
        let mut progress = vec![false; STEP_COUNT as usize];
        progress[0] = true;
        Self {
            visible_step: Some(1),
            progress,
            errors: HashMap::new(),
            summary: String::new(),
            district_options: Vec::new(),
            district_enabled: false,
            submit_enabled: true,
            banner: Banner::Hidden,
            share_links: None,
        }
    }

    /// Error text currently shown for a field, if any.
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Number of active progress indices.
    pub fn active_progress(&self) -> usize {
        self.progress.iter().filter(|a| **a).count()
    }
}

impl Default for PageModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for PageModel {
    fn show_step(&mut self, step: Option<u8>) {
        self.visible_step = step;
    }

    fn set_progress(&mut self, active_through: u8) {
        for (i, active) in self.progress.iter_mut().enumerate() {
            *active = i < active_through as usize;
        }
    }

    fn set_field_error(&mut self, field: FieldId, message: Option<&str>) {
        match message {
            Some(msg) if !msg.is_empty() => {
                self.errors.insert(field, msg.to_string());
            }
            _ => {
                self.errors.remove(&field);
            }
        }
    }

    fn set_summary(&mut self, html: &str) {
        self.summary = html.to_string();
    }

    fn set_district_options(&mut self, options: &[SelectOption]) {
        self.district_options = options.to_vec();
        self.district_enabled = !options.is_empty();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner = banner;
    }

    fn set_share_links(&mut self, links: &ShareLinks) {
        self.share_links = Some(links.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_shows_first_step() {
        let page = PageModel::new();
        assert_eq!(page.visible_step, Some(1));
        assert_eq!(page.progress, vec![true, false, false, false]);
        assert!(page.submit_enabled);
        assert_eq!(page.banner, Banner::Hidden);
    }

    #[test]
    fn progress_marks_prefix() {
        let mut page = PageModel::new();
        page.set_progress(3);
        assert_eq!(page.progress, vec![true, true, true, false]);
        page.set_progress(1);
        assert_eq!(page.active_progress(), 1);
    }

    #[test]
    fn empty_message_clears_slot() {
        let mut page = PageModel::new();
        page.set_field_error(FieldId::Email, Some("bad"));
        assert_eq!(page.error(FieldId::Email), Some("bad"));
        page.set_field_error(FieldId::Email, Some(""));
        assert_eq!(page.error(FieldId::Email), None);
        page.set_field_error(FieldId::Email, Some("bad"));
        page.set_field_error(FieldId::Email, None);
        assert!(page.errors.is_empty());
    }

    #[test]
    fn district_select_disabled_without_options() {
        let mut page = PageModel::new();
        page.set_district_options(&[SelectOption {
            value: "patna".into(),
            label: "Patna".into(),
        }]);
        assert!(page.district_enabled);
        page.set_district_options(&[]);
        assert!(!page.district_enabled);
    }
}
