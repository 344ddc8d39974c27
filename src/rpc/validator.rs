//! Subscribe-request validation.
//!
//! Validates structured subscribe requests field by field rather than
//! deserializing blindly, so each type, range, and enum violation maps
//! to a distinct error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The only message type a subscribe request may carry.
const SUBSCRIBE_MSG_TYPE: &str = "subscribe";

/// Errors raised when a subscribe request violates the schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request is not a JSON object.
    #[error("subscribe request must be an object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field carries the wrong JSON type.
    #[error("field `{field}` has wrong type: expected {expected}")]
    WrongType {
        /// The offending field name.
        field: &'static str,
        /// The expected JSON type.
        expected: &'static str,
    },

    /// A numeric field is outside its representable range.
    #[error("field `{0}` is out of range")]
    OutOfRange(&'static str),

    /// The message type is not `subscribe`.
    #[error("unsupported message type `{0}`")]
    UnsupportedMessageType(String),

    /// The topic string is empty.
    #[error("topic must not be empty")]
    EmptyTopic,
}

/// A validated subscribe request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// Message type; always `"subscribe"` after validation.
    pub msg_type: String,
    /// Caller-chosen request correlation id.
    pub request_id: u64,
    /// Subscription options, an arbitrary object.
    pub options: Map<String, Value>,
    /// Dotted topic name to subscribe to.
    pub topic: String,
}

impl SubscribeRequest {
    /// Validates a structured request, returning the typed view.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] naming the first violated constraint.
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let msg_type = require_str(object, "msg_type")?;
        if msg_type != SUBSCRIBE_MSG_TYPE {
            return Err(ValidationError::UnsupportedMessageType(
                msg_type.to_owned(),
            ));
        }

        let request_id_value = object
            .get("request_id")
            .ok_or(ValidationError::MissingField("request_id"))?;
        if !request_id_value.is_number() {
            return Err(ValidationError::WrongType {
                field: "request_id",
                expected: "unsigned integer",
            });
        }
        // Numbers that are negative, fractional, or too wide for u64
        // are range violations, not type violations.
        let request_id = request_id_value
            .as_u64()
            .ok_or(ValidationError::OutOfRange("request_id"))?;

        let options = object
            .get("options")
            .ok_or(ValidationError::MissingField("options"))?
            .as_object()
            .ok_or(ValidationError::WrongType {
                field: "options",
                expected: "object",
            })?
            .clone();

        let topic = require_str(object, "topic")?;
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }

        Ok(Self {
            msg_type: msg_type.to_owned(),
            request_id,
            options,
            topic: topic.to_owned(),
        })
    }
}

fn require_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?
        .as_str()
        .ok_or(ValidationError::WrongType {
            field,
            expected: "string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical() -> Value {
        json!({
            "msg_type": "subscribe",
            "request_id": 192_340_425u64,
            "options": {},
            "topic": "com.example.chat"
        })
    }

    #[test]
    fn test_canonical_request_accepted() {
        let request = SubscribeRequest::validate(&canonical()).unwrap();

        assert_eq!(request.msg_type, "subscribe");
        assert_eq!(request.request_id, 192_340_425);
        assert!(request.options.is_empty());
        assert_eq!(request.topic, "com.example.chat");
    }

    #[test]
    fn test_oversized_request_id_rejected() {
        let mut value = canonical();
        // Wider than u64: comes through JSON as a float.
        value["request_id"] = json!(1.923_404_25e21);

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::OutOfRange("request_id"))
        ));
    }

    #[test]
    fn test_negative_request_id_rejected() {
        let mut value = canonical();
        value["request_id"] = json!(-5);

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::OutOfRange("request_id"))
        ));
    }

    #[test]
    fn test_wrong_msg_type_rejected() {
        let mut value = canonical();
        value["msg_type"] = json!("subscribes");

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::UnsupportedMessageType(t)) if t == "subscribes"
        ));
    }

    #[test]
    fn test_non_object_options_rejected() {
        let mut value = canonical();
        value["options"] = json!(44);

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::WrongType {
                field: "options",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let value = json!({ "msg_type": "subscribe" });

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::MissingField("request_id"))
        ));
    }

    #[test]
    fn test_non_object_request_rejected() {
        assert!(matches!(
            SubscribeRequest::validate(&json!([1, 2, 3])),
            Err(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn test_empty_topic_rejected() {
        let mut value = canonical();
        value["topic"] = json!("");

        assert!(matches!(
            SubscribeRequest::validate(&value),
            Err(ValidationError::EmptyTopic)
        ));
    }
}
