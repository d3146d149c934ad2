//! Inbound prompt validation
//!
//! Pure functions that turn the raw body of a `/generate` request into a
//! prompt ready to forward, or reject it.

use serde::Serialize;

/// Message returned to clients that send no usable prompt.
pub const MISSING_PROMPT: &str = "Prompt is missing";

/// Error body returned with a client-error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn missing_prompt() -> Self {
        Self {
            error: MISSING_PROMPT.to_string(),
        }
    }
}

/// Extract the trimmed prompt from a request body.
///
/// The body is read as JSON whatever its declared content type. Returns `None`
/// when the body is not a JSON object, has no string `prompt`, or the prompt is
/// blank after trimming.
pub fn extract_prompt(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let prompt = value.as_object()?.get("prompt")?.as_str()?.trim();

    if prompt.is_empty() {
        None
    } else {
        Some(prompt.to_string())
    }
}
