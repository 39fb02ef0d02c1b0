use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::completion::{Completion, CompletionError, Outcome};
use crate::error::EventError;
use crate::kind::EventKind;
use crate::message::RawMessage;
use crate::socket::{SocketHandle, TransportSocket};

/// A single occurrence crossing the event-bus bridge.
///
/// The record is immutable once constructed: the kind never changes, the
/// payload is the frame as delivered, and the socket reference is shared
/// with the transport layer. Derived views are computed at most once per
/// event; repeat accessor calls return the identical cached result, so the
/// view stays stable for the duration of handling. An event is handed to
/// exactly one consumer and discarded once its completion is resolved.
#[derive(Debug)]
pub struct BridgeEvent {
    kind: EventKind,
    payload: Option<Value>,
    socket: Arc<dyn TransportSocket>,
    completion: Completion,
    message_view: OnceCell<Option<RawMessage>>,
    socket_view: OnceCell<SocketHandle>,
}

impl BridgeEvent {
    /// Build a `SOCKET_CREATED` or `SOCKET_CLOSED` event.
    pub fn lifecycle(
        kind: EventKind,
        socket: Arc<dyn TransportSocket>,
    ) -> Result<Self, EventError> {
        if kind.expects_payload() {
            return Err(EventError::PayloadMissing(kind));
        }
        Ok(Self::assemble(kind, None, socket))
    }

    /// Build a message-bearing event from the raw frame.
    pub fn with_message(
        kind: EventKind,
        payload: Value,
        socket: Arc<dyn TransportSocket>,
    ) -> Result<Self, EventError> {
        if kind.is_lifecycle() {
            return Err(EventError::PayloadUnexpected(kind));
        }
        if !payload.is_object() {
            return Err(EventError::PayloadNotObject);
        }
        Ok(Self::assemble(kind, Some(payload), socket))
    }

    fn assemble(kind: EventKind, payload: Option<Value>, socket: Arc<dyn TransportSocket>) -> Self {
        Self {
            kind,
            payload,
            socket,
            completion: Completion::new(),
            message_view: OnceCell::new(),
            socket_view: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Typed view over the raw frame, or `None` for lifecycle events.
    /// Derived on first call; later calls return the same cached view.
    pub fn raw_message(&self) -> Option<&RawMessage> {
        self.message_view
            .get_or_init(|| match &self.payload {
                Some(Value::Object(doc)) => Some(RawMessage::new(doc.clone())),
                _ => None,
            })
            .as_ref()
    }

    /// Handle to the transport connection this event concerns. Wrapped on
    /// first access and cached; repeat calls return the identical handle.
    pub fn socket(&self) -> SocketHandle {
        self.socket_view
            .get_or_init(|| SocketHandle::new(Arc::clone(&self.socket)))
            .clone()
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    /// Shorthand for resolving the completion signal.
    pub fn resolve(&self, outcome: Outcome) -> Result<(), CompletionError> {
        self.completion.resolve(outcome)
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }
}
