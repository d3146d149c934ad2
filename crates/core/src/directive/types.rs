use serde::{Deserialize, Serialize};

/// File name suggested by the fallback used when the completion service is unreachable.
pub const UNREACHABLE_FILE_NAME: &str = "script.py";

/// Placeholder script returned when the completion service is unreachable.
pub const UNREACHABLE_CODE: &str =
    "# Fallback code – Gemini is unreachable.\nprint('Hello from fallback!')\n";

/// File name suggested by the fallback used when the model reply is not JSON.
pub const INVALID_FILE_NAME: &str = "invalid.json";

/// Comment returned as code when the model reply is not JSON.
pub const INVALID_CODE: &str = "# ❌ Failed to parse Gemini JSON response";

/// Directory suggested when the model does not name one.
pub const DEFAULT_LOCATION: &str = ".";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Describes whether the caller should run code, and which code to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDirective {
    /// Whether the client should execute the code.
    pub run_code: bool,
    /// Suggested file name for the generated code.
    pub file_name: String,
    /// Suggested directory for the file.
    #[serde(default = "default_location")]
    pub location: String,
    /// Editor the client should open the file with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Shell command that installs the code's dependencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_cmd: Option<String>,
    /// The code (or text) payload.
    pub code: String,
}

impl CodeDirective {
    /// Directive substituted when the completion service cannot be reached.
    ///
    /// Asks the client to run a trivial placeholder script locally.
    pub fn unreachable() -> Self {
        Self::fallback(true, UNREACHABLE_FILE_NAME, UNREACHABLE_CODE)
    }

    /// Directive substituted when the model reply is not valid JSON.
    pub fn invalid() -> Self {
        Self::fallback(false, INVALID_FILE_NAME, INVALID_CODE)
    }

    fn fallback(run_code: bool, file_name: &str, code: &str) -> Self {
        Self {
            run_code,
            file_name: file_name.to_string(),
            location: default_location(),
            editor: Some(String::new()),
            install_cmd: Some(String::new()),
            code: code.to_string(),
        }
    }

    /// Typed view over an arbitrary JSON value.
    ///
    /// Returns `None` when the value does not have the directive shape.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// What the relay hands back for a prompt.
///
/// Serializes transparently: a model reply is emitted exactly as parsed and a
/// fallback is emitted as its directive fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DirectiveReply {
    /// JSON produced by the model, unchanged.
    Model(serde_json::Value),
    /// Fixed directive substituted because the model output was unusable.
    Fallback(CodeDirective),
}

impl DirectiveReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DirectiveReply::Fallback(_))
    }

    /// The `run_code` flag, when the reply carries a boolean one.
    pub fn run_code(&self) -> Option<bool> {
        match self {
            DirectiveReply::Model(value) => value.get("run_code").and_then(|v| v.as_bool()),
            DirectiveReply::Fallback(directive) => Some(directive.run_code),
        }
    }

    /// Typed view of the reply, if it has the directive shape.
    pub fn directive(&self) -> Option<CodeDirective> {
        match self {
            DirectiveReply::Model(value) => CodeDirective::from_value(value),
            DirectiveReply::Fallback(directive) => Some(directive.clone()),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        match self {
            DirectiveReply::Model(value) => value.clone(),
            DirectiveReply::Fallback(directive) => {
                serde_json::to_value(directive).unwrap_or(serde_json::Value::Null)
            }
        }
    }
}
