//! Response envelope value object.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Standardized response envelope: status code, human message, payload.
///
/// Immutable once constructed; a controller creates one per request and it is
/// consumed by serialization. The `success` flag is derived from the status
/// code (`status_code < 400`), never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status_code: u16,
    message: String,
    data: serde_json::Value,
}

impl ApiResponse {
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        data: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            status_code,
            message: message.into(),
            data: data.into(),
        }
    }

    /// Shorthand for a `200` envelope.
    pub fn ok(message: impl Into<String>, data: impl Into<serde_json::Value>) -> Self {
        Self::new(200, message, data)
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Status codes below 400 count as success; 400 itself does not.
    pub fn success(&self) -> bool {
        self.status_code < 400
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ApiResponse", 4)?;
        s.serialize_field("statusCode", &self.status_code)?;
        s.serialize_field("message", &self.message)?;
        s.serialize_field("data", &self.data)?;
        s.serialize_field("success", &self.success())?;
        s.end()
    }
}
