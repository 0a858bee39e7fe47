use serde::Serialize;
use tracing::{debug, info};

use super::completion::{CompletionError, CompletionSink};
use super::domain::{UserRole, WizardError, WizardKind, WizardStep};
use super::hints::step_hint;
use super::record::{SectionFields, WizardRecord};
use super::schema::StepSchema;

/// One in-flight wizard: the schema, the step cursor, and the record built so far.
#[derive(Debug, Clone)]
pub struct WizardSession {
    schema: StepSchema,
    current_step: usize,
    record: WizardRecord,
}

/// Outcome of a navigation request.
#[derive(Debug)]
pub enum Transition {
    Step(WizardSession),
    Completed(CompletedWizard),
    Exited,
}

impl Transition {
    pub fn into_session(self) -> Option<WizardSession> {
        match self {
            Transition::Step(session) => Some(session),
            Transition::Completed(_) | Transition::Exited => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Transition::Completed(_))
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, Transition::Exited)
    }
}

/// Record handed to the completion sink once the final step is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedWizard {
    pub kind: WizardKind,
    pub role: UserRole,
    pub record: WizardRecord,
}

/// Starts an onboarding session for the selected role.
pub fn init_session(role: UserRole) -> WizardSession {
    WizardSession::onboarding(role)
}

impl WizardSession {
    pub fn new(kind: WizardKind, role: UserRole) -> Self {
        let schema = StepSchema::for_role(kind, role);
        let record = WizardRecord::with_sections(schema.sections());
        debug!(%kind, %role, steps = schema.len(), "wizard session started");

        Self {
            schema,
            current_step: 0,
            record,
        }
    }

    pub fn onboarding(role: UserRole) -> Self {
        Self::new(WizardKind::Onboarding, role)
    }

    pub fn listing(role: UserRole) -> Self {
        Self::new(WizardKind::Listing, role)
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    pub fn kind(&self) -> WizardKind {
        self.schema.kind()
    }

    pub fn role(&self) -> UserRole {
        self.schema.role()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current(&self) -> WizardStep {
        self.schema.steps()[self.current_step]
    }

    pub fn step_count(&self) -> usize {
        self.schema.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.schema.len()
    }

    pub fn record(&self) -> &WizardRecord {
        &self.record
    }

    pub fn hint(&self) -> &'static str {
        step_hint(self.kind(), self.role(), self.current_step)
    }

    /// Shallow-merges `fields` into `section`.
    pub fn update_section(
        &mut self,
        section: &str,
        fields: SectionFields,
    ) -> Result<(), WizardError> {
        let updated = self.schema.has_section(section) && self.record.merge(section, fields);
        if !updated {
            return Err(WizardError::InvalidSection {
                section: section.to_string(),
                kind: self.kind(),
                role: self.role(),
            });
        }

        debug!(kind = %self.kind(), section, "wizard section updated");
        Ok(())
    }

    pub fn advance(mut self) -> Transition {
        if self.is_last_step() {
            info!(kind = %self.kind(), role = %self.role(), "wizard completed");
            return Transition::Completed(CompletedWizard {
                kind: self.kind(),
                role: self.role(),
                record: self.record,
            });
        }

        self.current_step += 1;
        debug!(kind = %self.kind(), step = self.current().label(), "wizard advanced");
        Transition::Step(self)
    }

    pub fn retreat(mut self) -> Transition {
        if self.current_step == 0 {
            info!(kind = %self.kind(), role = %self.role(), "wizard exited");
            return Transition::Exited;
        }

        self.current_step -= 1;
        debug!(kind = %self.kind(), step = self.current().label(), "wizard retreated");
        Transition::Step(self)
    }

    /// Advances and, on the final step, delivers the record to `sink`.
    /// Returns the next session, or `None` once the wizard has been handed off.
    pub fn advance_into<S>(self, sink: &S) -> Result<Option<WizardSession>, CompletionError>
    where
        S: CompletionSink + ?Sized,
    {
        match self.advance() {
            Transition::Step(session) => Ok(Some(session)),
            Transition::Completed(completed) => {
                sink.complete(completed)?;
                Ok(None)
            }
            Transition::Exited => Ok(None),
        }
    }

    /// Completion through the current step, in percent.
    pub fn progress(&self) -> f64 {
        (self.current_step + 1) as f64 / self.schema.len() as f64 * 100.0
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress().round() as u8
    }
}
