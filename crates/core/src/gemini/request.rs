use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};

/// Instruction sent as the first turn of every conversation.
///
/// The completion service is asked to answer with exactly this key set; the
/// wording is part of the integration and must not drift.
pub const SYSTEM_INSTRUCTION: &str = "You are an assistant that decides if the user wants to run code. \
Respond only in JSON format with keys: run_code (true/false), \
file_name, location, editor (optional), install_cmd (optional), and code. \
Do not wrap JSON in markdown. Escape all backslashes properly for valid JSON.";

/// Role attached to both conversation turns.
pub const USER_ROLE: &str = "user";

/// MIME type requested for the model output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Header that carries the API key (`X-goog-api-key`).
pub const API_KEY_HEADER: &str = "x-goog-api-key";

fn user_turn(text: &str) -> Content {
    Content {
        role: Some(USER_ROLE.to_string()),
        parts: vec![Part {
            text: Some(text.to_string()),
        }],
    }
}

/// Build the `generateContent` body for a prompt.
///
/// The system instruction goes first, then the prompt, both as user turns,
/// and JSON output is requested.
pub fn build_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![user_turn(SYSTEM_INSTRUCTION), user_turn(prompt)],
        generation_config: GenerationConfig {
            response_mime_type: JSON_MIME_TYPE.to_string(),
        },
    }
}

/// Build the `generateContent` URL for a model.
///
/// `base_url` is the versioned API root, e.g.
/// `https://generativelanguage.googleapis.com/v1beta`.
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}
