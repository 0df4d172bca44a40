//! Audit Logger
//!
//! Fire-and-forget submission of audit entries through a bounded queue.
//!
//! Delivery is at-most-once: an entry is dropped when the queue is full,
//! when the worker has stopped, or when the sink fails. There is no retry
//! and no ordering promise between concurrent submitters. Drops are only
//! visible in the local logs; callers never see them.

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use crate::domain::entity::audit_entry::AuthAuditEntry;
use crate::domain::repository::AuditSink;

/// Submitting half of the audit queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    tx: mpsc::Sender<AuthAuditEntry>,
}

/// Draining half of the audit queue
#[derive(Debug)]
pub struct AuditWorker {
    rx: mpsc::Receiver<AuthAuditEntry>,
}

impl AuditLogger {
    /// Create a queue holding at most `capacity` pending entries.
    pub fn channel(capacity: usize) -> (Self, AuditWorker) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, AuditWorker { rx })
    }

    /// Create the queue and spawn its worker on the current runtime.
    pub fn spawn<S>(sink: S, capacity: usize) -> (Self, JoinHandle<()>)
    where
        S: AuditSink + Send + Sync + 'static,
    {
        let (logger, worker) = Self::channel(capacity);
        let handle = tokio::spawn(worker.run(sink));
        (logger, handle)
    }

    /// Submit an entry without waiting.
    ///
    /// Returns whether the entry was queued. The result is informational;
    /// handlers ignore it.
    pub fn record(&self, entry: AuthAuditEntry) -> bool {
        match self.tx.try_send(entry) {
            Ok(()) => true,
            Err(TrySendError::Full(entry)) => {
                tracing::warn!(
                    action = %entry.action,
                    email = %entry.email,
                    "Audit queue full, entry dropped"
                );
                false
            }
            Err(TrySendError::Closed(entry)) => {
                tracing::warn!(
                    action = %entry.action,
                    email = %entry.email,
                    "Audit worker stopped, entry dropped"
                );
                false
            }
        }
    }
}

impl AuditWorker {
    /// Drain entries into `sink` until every [`AuditLogger`] is dropped.
    pub async fn run<S>(mut self, sink: S)
    where
        S: AuditSink + Send + Sync,
    {
        while let Some(entry) = self.rx.recv().await {
            if let Err(e) = sink.write(&entry).await {
                tracing::error!(
                    error = %e,
                    action = %entry.action,
                    email = %entry.email,
                    "Failed to persist audit entry"
                );
            }
        }

        tracing::debug!("Audit worker stopped");
    }
}
