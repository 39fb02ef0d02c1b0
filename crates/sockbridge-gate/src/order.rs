use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-socket delivery permit.
///
/// Holding the permit serializes events raised for one socket so they
/// resolve in delivery order; distinct sockets are never serialized
/// against each other. The underlying mutex is FIFO-fair, which is what
/// turns "serialized" into "ordered". Map entries are removed with the
/// last outstanding guard.
#[derive(Clone, Debug, Default)]
pub(crate) struct SocketOrdering {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SocketOrdering {
    pub(crate) fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }

    pub(crate) async fn acquire(&self, socket_id: &str) -> OrderingGuard {
        let lock = self
            .locks
            .entry(socket_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.clone().lock_owned().await;
        OrderingGuard {
            socket_id: socket_id.to_string(),
            lock,
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
        }
    }
}

pub(crate) struct OrderingGuard {
    socket_id: String,
    lock: Arc<Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl Drop for OrderingGuard {
    fn drop(&mut self) {
        self.guard = None;
        if Arc::strong_count(&self.lock) == 1 {
            self.locks.remove(&self.socket_id);
        }
    }
}
