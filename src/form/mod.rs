//! Join form: the four-step membership signup wizard.
//!
//! The controller owns a single [`FormState`], gates every forward step on
//! that step's validators, renders a summary on the confirmation step and
//! hands a [`SubmissionPayload`](crate::submission::SubmissionPayload) to a
//! [`Submitter`](crate::submission::Submitter) on submit. The page itself is
//! abstracted behind [`FormView`].

pub mod controller;
pub mod fields;
pub mod regions;
pub mod share;
pub mod state;
pub mod steps;
pub mod summary;
pub mod validate;
pub mod view;

pub use controller::{JoinController, StepOutcome};
pub use fields::{FieldId, FormValues};
pub use share::{ShareLinks, share_links};
pub use state::{FormState, JoinPhase};
pub use summary::render_summary;
pub use validate::ValidationResult;
pub use view::{Banner, FormView, PageModel};
