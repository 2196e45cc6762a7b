//! Static step table: which fields each wizard step validates.

use super::fields::FieldId;

pub const FIRST_STEP: u8 = 1;
/// The step showing the read-only summary; submitting happens from here.
pub const CONFIRMATION_STEP: u8 = 4;
pub const STEP_COUNT: u8 = CONFIRMATION_STEP;

/// One screen of the wizard.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub number: u8,
    pub title: &'static str,
    /// Fields whose validators must all pass before leaving the step forward.
    pub validates: &'static [FieldId],
}

impl StepDefinition {
    /// Element id of the step's section, e.g. `step2`.
    pub fn section_id(&self) -> String {
        format!("step{}", self.number)
    }

    pub fn is_confirmation(&self) -> bool {
        self.number == CONFIRMATION_STEP
    }
}

pub const STEPS: [StepDefinition; STEP_COUNT as usize] = [
    StepDefinition {
        number: 1,
        title: "Personal Information",
        validates: &[FieldId::FullName],
    },
    StepDefinition {
        number: 2,
        title: "Contact Information",
        validates: &[FieldId::Email, FieldId::Phone, FieldId::State],
    },
    StepDefinition {
        number: 3,
        title: "Interests & Preferences",
        validates: &[FieldId::Interests],
    },
    StepDefinition {
        number: 4,
        title: "Confirmation",
        validates: &[],
    },
];

/// Look up a step by its 1-based number.
pub fn step(number: u8) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|s| s.number == number)
}
