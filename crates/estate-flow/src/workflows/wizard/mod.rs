//! Multi-step data collection shared by the onboarding and property-listing flows.
//!
//! A [`WizardSession`] owns the step cursor and the accumulating [`WizardRecord`].
//! Navigation consumes the session and yields a [`Transition`], so a completed or exited
//! wizard cannot be edited afterwards.

mod completion;
pub mod domain;
mod hints;
mod record;
mod schema;
pub mod sections;
mod session;

#[cfg(test)]
mod tests;

pub use completion::{CompletionError, CompletionSink};
pub use domain::{UserRole, WizardError, WizardKind, WizardStep};
pub use hints::step_hint;
pub use record::{SectionFields, WizardRecord};
pub use schema::{steps_for, StepSchema, StepView};
pub use session::{init_session, CompletedWizard, Transition, WizardSession};
