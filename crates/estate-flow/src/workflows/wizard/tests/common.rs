use serde_json::{json, Value};

use crate::workflows::wizard::{
    CompletedWizard, CompletionError, CompletionSink, SectionFields, Transition, WizardSession,
};
use std::sync::Mutex;

pub(super) fn fields(value: Value) -> SectionFields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub(super) fn personal_info() -> SectionFields {
    fields(json!({ "name": "Asha Rao", "email": "asha@example.com", "phone": "98450 00000" }))
}

pub(super) fn step(transition: Transition) -> WizardSession {
    transition
        .into_session()
        .expect("transition should stay within the wizard")
}

pub(super) fn advance_to(mut session: WizardSession, index: usize) -> WizardSession {
    while session.current_step() < index {
        session = step(session.advance());
    }
    session
}

#[derive(Default)]
pub(super) struct RecordingSink {
    pub(super) completed: Mutex<Vec<CompletedWizard>>,
}

impl CompletionSink for RecordingSink {
    fn complete(&self, wizard: CompletedWizard) -> Result<(), CompletionError> {
        self.completed
            .lock()
            .expect("sink mutex poisoned")
            .push(wizard);
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl CompletionSink for OfflineSink {
    fn complete(&self, _wizard: CompletedWizard) -> Result<(), CompletionError> {
        Err(CompletionError::Unavailable("publish queue offline".to_string()))
    }
}
