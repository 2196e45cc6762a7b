//! Step-form controller: owns the form state and drives the view.
//!
//! Transitions only happen through [`JoinController::go_to_step`],
//! [`JoinController::advance`], [`JoinController::retreat`] and the submit
//! operations. Nothing is timer-driven.

use tracing::{debug, info};

use super::fields::{FieldId, FormValues};
use super::regions::{SelectOption, district_options};
use super::share::share_links;
use super::state::{FormState, JoinPhase};
use super::steps::{self, CONFIRMATION_STEP, FIRST_STEP, STEP_COUNT};
use super::summary::render_summary;
use super::validate::{self, ValidationResult};
use super::view::{Banner, FormView};
use crate::config::DEFAULT_JOIN_PAGE_URL;
use crate::error::FormError;
use crate::submission::{SubmissionPayload, SubmitOutcome, Submitter};

/// Result of trying to leave a step forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// All validators passed; the form is now on `to`.
    Advanced { to: u8 },
    /// At least one validator failed; the form did not move.
    Blocked { failures: Vec<(FieldId, String)> },
}

/// Drives the join wizard over a [`FormView`].
pub struct JoinController<V: FormView> {
    state: FormState,
    view: V,
    page_url: String,
}

impl<V: FormView> JoinController<V> {
    /// Bind the controller to a view and put the page in its initial state.
    pub fn new(mut view: V) -> Self {
        view.show_step(Some(FIRST_STEP));
        view.set_progress(FIRST_STEP);
        view.set_district_options(&[]);
        view.set_submit_enabled(true);
        view.show_banner(Banner::Hidden);
        Self {
            state: FormState::default(),
            view,
            page_url: DEFAULT_JOIN_PAGE_URL.to_string(),
        }
    }

    /// Address of the join page, used by the share links on success.
    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> JoinPhase {
        self.state.phase
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    /// Mutable access for plain field edits (typing into inputs).
    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.state.values
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Step the applicant is looking at. After a failed submission the
    /// confirmation step stays on screen.
    fn current_step(&self, action: &str) -> Result<u8, FormError> {
        match self.state.phase {
            JoinPhase::Step(n) => Ok(n),
            JoinPhase::Failed => Ok(CONFIRMATION_STEP),
            phase => Err(FormError::InvalidPhase {
                phase,
                action: action.to_string(),
            }),
        }
    }

    /// Show step `n`, hide the others and light progress `1..=n`.
    ///
    /// Jumping forward is only allowed onto a step whose predecessors have
    /// all passed validation. Entering the confirmation step re-renders the
    /// summary first.
    pub fn go_to_step(&mut self, n: u8) -> Result<(), FormError> {
        let current = self.current_step("change step")?;
        if !(FIRST_STEP..=STEP_COUNT).contains(&n) {
            return Err(FormError::InvalidStep {
                step: n,
                max: STEP_COUNT,
            });
        }
        let target = JoinPhase::Step(n);
        if self.state.phase != target && !self.state.phase.can_transition_to(target) {
            return Err(FormError::InvalidPhase {
                phase: self.state.phase,
                action: format!("go to step {n}"),
            });
        }
        if !self.state.unlocked(n) {
            return Err(FormError::StepLocked {
                step: n,
                blocking: self.state.validated_through + 1,
            });
        }

        if n == CONFIRMATION_STEP {
            let summary = render_summary(&self.state.values);
            self.view.set_summary(&summary);
        }
        if self.state.phase == JoinPhase::Failed {
            self.view.show_banner(Banner::Hidden);
        }
        self.view.show_step(Some(n));
        self.view.set_progress(n);
        self.state.phase = target;

        info!(from = current, to = n, "Join form step changed");
        Ok(())
    }

    /// Validate the current step and move forward if every field passes.
    ///
    /// Each validated field's error slot is updated either way; on failure
    /// the phase and values are left untouched.
    pub fn advance(&mut self) -> Result<StepOutcome, FormError> {
        let current = self.current_step("advance")?;
        if current == CONFIRMATION_STEP {
            return Err(FormError::NoNextStep);
        }
        let def = steps::step(current).ok_or(FormError::InvalidStep {
            step: current,
            max: STEP_COUNT,
        })?;

        let mut failures = Vec::new();
        for &field in def.validates {
            let result = validate::validate_field(field, &self.state.values);
            self.view.set_field_error(field, result.message.as_deref());
            if !result.is_valid {
                failures.push((field, result.message.unwrap_or_default()));
            }
        }

        if !failures.is_empty() {
            debug!(step = current, failed = failures.len(), "Step validation failed");
            return Ok(StepOutcome::Blocked { failures });
        }

        self.state.mark_validated(current);
        let next = current + 1;
        self.go_to_step(next)?;
        Ok(StepOutcome::Advanced { to: next })
    }

    /// Go back one step. No validation, values untouched.
    pub fn retreat(&mut self) -> Result<u8, FormError> {
        let current = self.current_step("go back")?;
        if current == FIRST_STEP {
            return Err(FormError::NoPreviousStep);
        }
        let prev = current - 1;
        self.go_to_step(prev)?;
        Ok(prev)
    }

    /// Blur validation for a single field.
    pub fn validate_field(&mut self, field: FieldId) -> ValidationResult {
        let result = validate::validate_field(field, &self.state.values);
        self.view.set_field_error(field, result.message.as_deref());
        result
    }

    /// Check or uncheck an interest. Any change clears the group's error.
    pub fn toggle_interest(&mut self, value: &str, checked: bool) {
        FormValues::set_checked(&mut self.state.values.interests, value, checked);
        self.view.set_field_error(FieldId::Interests, None);
    }

    pub fn toggle_issue(&mut self, value: &str, checked: bool) {
        FormValues::set_checked(&mut self.state.values.issues, value, checked);
    }

    /// Pick a region. The district is reset and its options replaced.
    pub fn select_region(&mut self, code: &str) -> Vec<SelectOption> {
        self.state.values.state = code.to_string();
        self.state.values.district.clear();

        let options = district_options(code);
        self.view.set_district_options(&options);
        if !code.is_empty() {
            self.view.set_field_error(FieldId::State, None);
        }
        options
    }

    pub fn set_consent(&mut self, checked: bool) {
        self.state.values.consent = checked;
        if checked {
            self.view.set_field_error(FieldId::Consent, None);
        }
    }

    /// Enter `Submitting` and hand back the payload to send.
    ///
    /// Only allowed from the confirmation step or after a failed attempt.
    /// Without consent the attempt is refused and the consent slot shows why.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, FormError> {
        match self.state.phase {
            JoinPhase::Step(CONFIRMATION_STEP) | JoinPhase::Failed => {}
            JoinPhase::Submitting => return Err(FormError::SubmitInFlight),
            phase => {
                return Err(FormError::InvalidPhase {
                    phase,
                    action: "submit".into(),
                });
            }
        }
        if !self.state.ready_to_submit() {
            return Err(FormError::StepLocked {
                step: CONFIRMATION_STEP,
                blocking: self.state.validated_through + 1,
            });
        }

        let consent = validate::validate_consent(self.state.values.consent);
        self.view
            .set_field_error(FieldId::Consent, consent.message.as_deref());
        if !consent.is_valid {
            debug!("Submission refused without consent");
            return Err(FormError::ConsentRequired);
        }

        self.state.phase = JoinPhase::Submitting;
        self.view.set_submit_enabled(false);
        self.view.show_banner(Banner::Loading);
        info!("Join form submitting");

        Ok(SubmissionPayload::from(&self.state.values))
    }

    /// Resolve `Submitting` with the adapter's outcome.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) -> Result<JoinPhase, FormError> {
        if self.state.phase != JoinPhase::Submitting {
            return Err(FormError::InvalidPhase {
                phase: self.state.phase,
                action: "finish submission".into(),
            });
        }

        match outcome {
            SubmitOutcome::Accepted { .. } => {
                self.state.phase = JoinPhase::Succeeded;
                self.view.show_step(None);
                self.view.show_banner(Banner::Success);
                self.view.set_share_links(&share_links(&self.page_url));
            }
            SubmitOutcome::Failed { .. } => {
                self.state.phase = JoinPhase::Failed;
                self.view.show_banner(Banner::Error);
                self.view.set_submit_enabled(true);
            }
        }
        info!(phase = %self.state.phase, "Join form submission resolved");
        Ok(self.state.phase)
    }

    /// Submit once: `begin_submit`, one request, `finish_submit`.
    pub async fn submit(&mut self, submitter: &dyn Submitter) -> Result<JoinPhase, FormError> {
        let payload = self.begin_submit()?;
        let outcome = submitter.submit(&payload).await;
        self.finish_submit(&outcome)
    }

    /// Manual retry after a failed submission.
    pub async fn retry(&mut self, submitter: &dyn Submitter) -> Result<JoinPhase, FormError> {
        if self.state.phase != JoinPhase::Failed {
            return Err(FormError::InvalidPhase {
                phase: self.state.phase,
                action: "retry".into(),
            });
        }
        self.submit(submitter).await
    }
}
