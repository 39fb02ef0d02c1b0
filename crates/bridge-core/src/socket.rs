use std::fmt;
use std::sync::Arc;

/// Live transport connection as seen from a bridge event.
///
/// Implementations live with the transport layer. The bridge side only
/// observes a connection; it never writes to it or closes it. A reference
/// may legitimately outlive the connection it names, in which case
/// `is_open` reports false and transport-side operations fail on their own
/// terms.
pub trait TransportSocket: Send + Sync + fmt::Debug {
    /// Stable identifier for the connection.
    fn id(&self) -> &str;

    /// Whether the transport still considers the connection open.
    fn is_open(&self) -> bool;

    /// Remote peer, when the transport knows it.
    fn remote_address(&self) -> Option<String> {
        None
    }
}

/// Shared, observe-only handle to a [`TransportSocket`].
///
/// Handles compare by referent identity: two handles are equal only when
/// they name the same underlying connection object, regardless of field
/// values.
#[derive(Clone, Debug)]
pub struct SocketHandle {
    inner: Arc<dyn TransportSocket>,
}

impl SocketHandle {
    pub fn new(socket: Arc<dyn TransportSocket>) -> Self {
        Self { inner: socket }
    }

    pub fn id(&self) -> &str {
        self.inner.id()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    pub fn remote_address(&self) -> Option<String> {
        self.inner.remote_address()
    }

    /// Identity comparison against another handle.
    pub fn same(&self, other: &SocketHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SocketHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for SocketHandle {}
