//! Submission pipeline: best-effort notification followed by an artificial
//! round-trip delay.
//!
//! The pipeline never fails. A notifier reports what happened through
//! [`NotifyOutcome`] so callers can log it, but the commit that follows
//! always runs with the same payload.

use std::future::Future;

use thiserror::Error;

use crate::model::segment::SegmentPayload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("could not serialize payload: {0}")]
    Serialize(String),
    #[error("webhook request failed: {0}")]
    Transport(String),
}

/// Result of a fire-and-forget notification. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The request left the client. With an opaque response this says
    /// nothing about what the collector did with it.
    Sent,
    Failed(NotifyError),
}

impl NotifyOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotifyOutcome::Sent)
    }
}

impl From<Result<(), NotifyError>> for NotifyOutcome {
    fn from(result: Result<(), NotifyError>) -> Self {
        match result {
            Ok(()) => NotifyOutcome::Sent,
            Err(e) => NotifyOutcome::Failed(e),
        }
    }
}

/// Side channel that receives a copy of each submitted payload.
pub trait Notifier {
    fn notify(&self, payload: &SegmentPayload) -> impl Future<Output = NotifyOutcome>;
}

/// Delay standing in for a backend round-trip.
pub trait Latency {
    fn wait(&self) -> impl Future<Output = ()>;
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    async fn wait(&self) {}
}

#[derive(Debug, Clone)]
pub struct SubmissionPipeline<N, L> {
    notifier: N,
    latency: L,
}

impl<N: Notifier, L: Latency> SubmissionPipeline<N, L> {
    pub fn new(notifier: N, latency: L) -> Self {
        Self { notifier, latency }
    }

    /// Notifies, then waits out the latency. Callers must commit the payload
    /// whatever the returned outcome is.
    pub async fn deliver(&self, payload: &SegmentPayload) -> NotifyOutcome {
        let outcome = self.notifier.notify(payload).await;
        self.latency.wait().await;
        outcome
    }
}
