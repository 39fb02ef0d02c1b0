//! In-process doubles for exercising bridge events without a live
//! transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use crate::socket::TransportSocket;

/// Minimal socket double: a stable id and an open flag.
#[derive(Debug)]
pub struct StubSocket {
    id: String,
    open: AtomicBool,
}

impl StubSocket {
    pub fn new() -> Arc<Self> {
        Self::named(format!("sock-{}", Uuid::new_v4()))
    }

    pub fn named(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            open: AtomicBool::new(true),
        })
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}

impl TransportSocket for StubSocket {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}
