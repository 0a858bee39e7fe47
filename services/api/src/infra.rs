use chrono::NaiveDate;
use estate_flow::workflows::pending::{Delay, NoDelay, ThreadSleep};
use estate_flow::workflows::verification::{DocumentKind, DocumentStatus, SubmittedDocument};
use estate_flow::workflows::wizard::{CompletedWizard, CompletionError, CompletionSink};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps finished wizards in memory for the CLI demo.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCompletionSink {
    completed: Arc<Mutex<Vec<CompletedWizard>>>,
}

impl CompletionSink for InMemoryCompletionSink {
    fn complete(&self, wizard: CompletedWizard) -> Result<(), CompletionError> {
        let mut guard = self
            .completed
            .lock()
            .map_err(|_| CompletionError::Unavailable("completion store poisoned".to_string()))?;
        guard.push(wizard);
        Ok(())
    }
}

impl InMemoryCompletionSink {
    pub(crate) fn completed(&self) -> Vec<CompletedWizard> {
        self.completed
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn delay_for(instant: bool) -> &'static dyn Delay {
    if instant {
        &NoDelay
    } else {
        &ThreadSleep
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses `KIND=FILE` into a pending document submission.
pub(crate) fn parse_document(raw: &str) -> Result<SubmittedDocument, String> {
    let (kind, file_name) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=FILE, got '{raw}'"))?;
    let kind: DocumentKind = kind.parse().map_err(|err| format!("{err}"))?;
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(format!("missing file name for {}", kind.key()));
    }

    Ok(SubmittedDocument {
        kind,
        file_name: file_name.to_string(),
        status: DocumentStatus::Pending,
    })
}
