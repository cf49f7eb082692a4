//! Submission dispatcher
//!
//! Each accepted submission is sent on its own task. Outcomes come back over
//! a channel and are applied by the UI loop, so form state is only ever
//! touched from one place. Sends are owned by a `JoinSet` and are aborted
//! when the dispatcher is dropped.

use crate::mailer::{EmailPayload, Mailer, MailerError};
use crate::state::RequestId;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;

/// Result of one finished send
#[derive(Debug)]
pub struct DispatchOutcome {
    pub id: RequestId,
    pub result: Result<String, MailerError>,
}

pub struct Dispatcher {
    mailer: Arc<dyn Mailer>,
    tx: UnboundedSender<DispatchOutcome>,
    rx: UnboundedReceiver<DispatchOutcome>,
    in_flight: JoinSet<()>,
    next_id: u64,
}

impl Dispatcher {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            mailer,
            tx,
            rx,
            in_flight: JoinSet::new(),
            next_id: 1,
        }
    }

    /// Start sending `payload`. Never waits and never de-duplicates.
    pub fn dispatch(&mut self, payload: EmailPayload) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;

        let mailer = Arc::clone(&self.mailer);
        let tx = self.tx.clone();
        tracing::info!(request = %id, "Dispatching contact submission");
        self.in_flight.spawn(async move {
            let result = mailer.send(payload).await;
            // Receiver only goes away together with the dispatcher
            let _ = tx.send(DispatchOutcome { id, result });
        });

        id
    }

    /// Collect finished sends without blocking
    pub fn drain(&mut self) -> Vec<DispatchOutcome> {
        self.reap();
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Wait for the next finished send
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<DispatchOutcome> {
        self.rx.recv().await
    }

    /// Number of sends that have not finished yet
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Abort every in-flight send
    pub fn cancel_all(&mut self) {
        if self.pending() > 0 {
            tracing::debug!("Cancelling {} in-flight submissions", self.pending());
        }
        self.in_flight.abort_all();
    }

    fn reap(&mut self) {
        while let Some(joined) = self.in_flight.try_join_next() {
            if let Err(err) = joined {
                if !err.is_cancelled() {
                    tracing::error!("Submission task panicked: {err}");
                }
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
