//! Request lifecycle and transient confirmation state

use super::forms::ContactForm;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Identifier handed out for each dispatched submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the most recent submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Tracks in-flight requests and the status of the last one to settle
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    status: RequestStatus,
    /// Form contents as they were when each request was dispatched
    in_flight: BTreeMap<RequestId, ContactForm>,
}

impl SubmissionTracker {
    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn begin(&mut self, id: RequestId, sent: ContactForm) {
        self.in_flight.insert(id, sent);
        self.status = RequestStatus::Pending;
    }

    /// Record a settled request and hand back the form it was sent with.
    /// Returns `None` for ids that were never started or already settled.
    pub fn settle(&mut self, id: RequestId, outcome: Result<(), String>) -> Option<ContactForm> {
        let sent = self.in_flight.remove(&id)?;
        self.status = match outcome {
            Ok(()) => RequestStatus::Succeeded,
            Err(reason) => RequestStatus::Failed(reason),
        };
        if !self.in_flight.is_empty() {
            self.status = RequestStatus::Pending;
        }
        Some(sent)
    }
}

/// Confirmation overlay shown after a successful send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Confirmation {
    pub fn new(shown_at: Instant, duration: Duration) -> Self {
        Self { shown_at, duration }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}
