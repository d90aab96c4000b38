//! Request/response correlation by numeric id

use godot_docs_core::{DocsError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, oneshot};

/// Table of in-flight requests awaiting a correlated reply.
///
/// Ids are process-wide monotonic starting at 1 and never reused while
/// pending; there is no wraparound handling since the counter is bounded
/// by process lifetime.
pub struct Correlator {
    next_id: AtomicU64,
    pending: Mutex<HashMap<u64, oneshot::Sender<Result<Value>>>>,
}

impl Correlator {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Allocate the next id and register a pending entry for it
    pub async fn register(&self) -> (u64, oneshot::Receiver<Result<Value>>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);
        (id, rx)
    }

    /// Resolve the pending entry for `id`, removing it.
    ///
    /// Returns false if the id is unknown (already timed out, already
    /// answered, or never sent) — such replies are ignored by callers.
    pub async fn complete(&self, id: u64, outcome: Result<Value>) -> bool {
        match self.pending.lock().await.remove(&id) {
            Some(tx) => {
                let _ = tx.send(outcome);
                true
            }
            None => false,
        }
    }

    /// Drop the pending entry for `id` without resolving it (timeout path)
    pub async fn remove(&self, id: u64) -> bool {
        self.pending.lock().await.remove(&id).is_some()
    }

    /// Fail every outstanding request (connection lost)
    pub async fn fail_all(&self) {
        let mut pending = self.pending.lock().await;
        for (_, tx) in pending.drain() {
            let _ = tx.send(Err(DocsError::SocketError("connection lost".to_string())));
        }
    }

    /// Number of outstanding requests
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new()
    }
}
