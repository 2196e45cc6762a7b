//! Join flow state machine: which phase the form is in.

use serde::{Deserialize, Serialize};

use super::fields::FormValues;
use super::steps::{CONFIRMATION_STEP, FIRST_STEP};

/// Phases of the join flow.
///
/// `Step(1)..=Step(4)` are the wizard screens; the last one is the
/// confirmation step. Submission moves `Step(4) → Submitting`, which resolves
/// to `Succeeded` or `Failed`. From `Failed` the applicant can retry
/// (`Failed → Submitting`) or go back into the wizard to correct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "step", rename_all = "snake_case")]
pub enum JoinPhase {
    Step(u8),
    Submitting,
    Succeeded,
    Failed,
}

impl JoinPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: JoinPhase) -> bool {
        use JoinPhase::*;
        match (*self, target) {
            (Step(from), Step(to)) => {
                (FIRST_STEP..=CONFIRMATION_STEP).contains(&from)
                    && (FIRST_STEP..=CONFIRMATION_STEP).contains(&to)
                    && from != to
            }
            (Failed, Step(to)) => (FIRST_STEP..=CONFIRMATION_STEP).contains(&to),
            (Step(CONFIRMATION_STEP), Submitting) => true,
            (Submitting, Succeeded) | (Submitting, Failed) | (Failed, Submitting) => true,
            _ => false,
        }
    }

    /// Whether this phase is terminal (the form is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The wizard step, if the form is still on one.
    pub fn step(&self) -> Option<u8> {
        match self {
            Self::Step(n) => Some(*n),
            _ => None,
        }
    }
}

impl Default for JoinPhase {
    fn default() -> Self {
        Self::Step(FIRST_STEP)
    }
}

impl std::fmt::Display for JoinPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Step(n) => write!(f, "step_{n}"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Everything the controller knows about the form in progress.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub phase: JoinPhase,
    pub values: FormValues,
    /// Highest step whose validators have all passed at least once.
    /// `0` means none has.
    pub validated_through: u8,
}

impl FormState {
    /// Whether every step before `step` has passed validation at least once.
    pub fn unlocked(&self, step: u8) -> bool {
        step <= self.validated_through.saturating_add(1)
    }

    /// Record that `step` passed validation. Steps are validated in order,
    /// so the high-water mark only moves forward.
    pub fn mark_validated(&mut self, step: u8) {
        if step > self.validated_through && self.unlocked(step) {
            self.validated_through = step;
        }
    }

    /// Whether all steps before the confirmation step have passed.
    pub fn ready_to_submit(&self) -> bool {
        self.validated_through >= CONFIRMATION_STEP - 1
    }
}
