//! Simulated request latency for the calculator tools.
//!
//! The tools present a loading state before showing results. That is modelled as an
//! explicit `Pending -> Resolved` transition driven by an injected [`Delay`], so tests
//! resolve instantly with [`NoDelay`] while the CLI can use [`ThreadSleep`].

use std::fmt;
use std::time::Duration;

use tracing::debug;

/// Waits out a simulated latency.
pub trait Delay {
    fn wait(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

impl<F> Delay for F
where
    F: Fn(Duration),
{
    fn wait(&self, duration: Duration) {
        self(duration)
    }
}

/// Deferred computation waiting on its simulated latency.
pub struct PendingRequest<T> {
    label: &'static str,
    latency: Duration,
    operation: Box<dyn FnOnce() -> T + Send>,
}

impl<T> PendingRequest<T> {
    pub fn new<F>(label: &'static str, latency: Duration, operation: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self {
            label,
            latency,
            operation: Box::new(operation),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Waits through `delay`, then runs the deferred operation.
    pub fn resolve<D>(self, delay: &D) -> T
    where
        D: Delay + ?Sized,
    {
        delay.wait(self.latency);
        debug!(
            request = self.label,
            latency_ms = self.latency.as_millis() as u64,
            "simulated request resolved"
        );
        (self.operation)()
    }
}

impl<T> fmt::Debug for PendingRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRequest")
            .field("label", &self.label)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum Request<T> {
    Pending(PendingRequest<T>),
    Resolved(T),
}

impl<T> Request<T> {
    pub fn pending<F>(label: &'static str, latency: Duration, operation: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Request::Pending(PendingRequest::new(label, latency, operation))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Request::Pending(_))
    }

    /// Moves a pending request to resolved; resolved requests are returned unchanged.
    pub fn resolve<D>(self, delay: &D) -> Self
    where
        D: Delay + ?Sized,
    {
        match self {
            Request::Pending(pending) => Request::Resolved(pending.resolve(delay)),
            resolved @ Request::Resolved(_) => resolved,
        }
    }

    pub fn into_resolved(self) -> Option<T> {
        match self {
            Request::Resolved(value) => Some(value),
            Request::Pending(_) => None,
        }
    }
}
