use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EventError;

/// Raw bridge frame as delivered by the transport.
///
/// The document is passed through unchanged; the only requirement is that
/// it is a JSON object. The projections below cover the well-known frame
/// fields without constraining what else the frame may carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMessage {
    doc: Map<String, Value>,
}

impl RawMessage {
    pub fn new(doc: Map<String, Value>) -> Self {
        Self { doc }
    }

    pub fn from_value(value: Value) -> Result<Self, EventError> {
        match value {
            Value::Object(doc) => Ok(Self { doc }),
            _ => Err(EventError::PayloadNotObject),
        }
    }

    /// Destination address of the frame, when present.
    pub fn address(&self) -> Option<&str> {
        self.doc.get("address").and_then(Value::as_str)
    }

    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.doc.get("headers").and_then(Value::as_object)
    }

    pub fn body(&self) -> Option<&Value> {
        self.doc.get("body")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.doc.get(field)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.doc
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.doc.clone())
    }
}

impl From<Map<String, Value>> for RawMessage {
    fn from(doc: Map<String, Value>) -> Self {
        Self::new(doc)
    }
}

impl TryFrom<Value> for RawMessage {
    type Error = EventError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn projections_read_well_known_fields() {
        let message = RawMessage::from_value(json!({
            "address": "orders.incoming",
            "headers": { "trace": "abc" },
            "body": { "qty": 3 },
        }))
        .expect("object payload");
        assert_eq!(message.address(), Some("orders.incoming"));
        assert_eq!(
            message.headers().and_then(|headers| headers.get("trace")),
            Some(&json!("abc"))
        );
        assert_eq!(message.body(), Some(&json!({ "qty": 3 })));
        assert!(message.get("reply_address").is_none());
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        for value in [json!(null), json!(42), json!("frame"), json!([1, 2])] {
            assert_eq!(
                RawMessage::from_value(value),
                Err(EventError::PayloadNotObject)
            );
        }
    }

    #[test]
    fn document_round_trips_unchanged() {
        let doc = json!({ "address": "a", "body": { "x": 1 }, "custom": [true] });
        let message = RawMessage::from_value(doc.clone()).expect("object payload");
        assert_eq!(message.to_value(), doc);
    }
}
