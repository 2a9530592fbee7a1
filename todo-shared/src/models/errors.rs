use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional error body returned by the backend on a failed request.
///
/// Different frameworks put the human readable text in different fields,
/// so all three common ones are probed in order: `detail`, `message`,
/// `error`. Values are kept as raw JSON because `detail` is a list of
/// validation issues on 422 responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// FastAPI style detail, a string or a list of validation issues.
    #[serde(default)]
    pub detail: Option<Value>,
    /// Generic message field.
    #[serde(default)]
    pub message: Option<Value>,
    /// Generic error field.
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorResponse {
    /// The first human readable message found in the body, if any.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        [&self.detail, &self.message, &self.error]
            .into_iter()
            .flatten()
            .find_map(describe)
    }
}

/// Render a single error field as text.
fn describe(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.as_str()),
                    Value::Object(fields) => fields.get("msg").and_then(Value::as_str),
                    _ => None,
                })
                .filter(|text| !text.trim().is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Pull a human readable message out of a raw error body.
///
/// Returns `None` when the body is not a JSON object or none of the
/// conventional fields carries usable text.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()?
        .user_message()
}

/// Generic message used when the body has nothing better to offer.
#[must_use]
pub fn request_failed_message(status: u16) -> String {
    format!("Request failed: {status}")
}
