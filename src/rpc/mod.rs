//! Message-schema validation for the publish/subscribe RPC protocol.

mod validator;

pub use validator::{SubscribeRequest, ValidationError};
