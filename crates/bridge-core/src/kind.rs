use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a bridge occurrence.
///
/// `SocketCreated` and `SocketClosed` mark transport lifecycle activity and
/// carry no message. The remaining kinds describe an attempted bus
/// operation and always carry the raw frame that triggered them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    SocketCreated,
    SocketClosed,
    Send,
    Publish,
    Receive,
    Register,
    Unregister,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::SocketCreated,
        EventKind::SocketClosed,
        EventKind::Send,
        EventKind::Publish,
        EventKind::Receive,
        EventKind::Register,
        EventKind::Unregister,
    ];

    pub fn is_lifecycle(self) -> bool {
        matches!(self, EventKind::SocketCreated | EventKind::SocketClosed)
    }

    pub fn expects_payload(self) -> bool {
        !self.is_lifecycle()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::SocketCreated => "SOCKET_CREATED",
            EventKind::SocketClosed => "SOCKET_CLOSED",
            EventKind::Send => "SEND",
            EventKind::Publish => "PUBLISH",
            EventKind::Receive => "RECEIVE",
            EventKind::Register => "REGISTER",
            EventKind::Unregister => "UNREGISTER",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown bridge event kind: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownEventKind(value.to_string()))
    }
}
