use thiserror::Error;

use crate::kind::EventKind;

/// Construction-time usage errors. These are programmer errors on the
/// engine side and fail fast instead of producing an event whose payload
/// contradicts its kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("bridge event kind {0} requires a message payload")]
    PayloadMissing(EventKind),
    #[error("bridge event kind {0} does not carry a message payload")]
    PayloadUnexpected(EventKind),
    #[error("bridge message payload must be a JSON object")]
    PayloadNotObject,
}
