use super::session::CompletedWizard;

/// Receives finished wizards, e.g. to publish a listing or close out onboarding.
pub trait CompletionSink: Send + Sync {
    fn complete(&self, wizard: CompletedWizard) -> Result<(), CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion sink unavailable: {0}")]
    Unavailable(String),
    #[error("wizard record rejected: {0}")]
    Rejected(String),
}
