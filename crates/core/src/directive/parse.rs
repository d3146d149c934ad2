use super::types::{CodeDirective, DirectiveReply};

/// Parse the text of a model reply into a directive reply.
///
/// Any valid JSON passes through untouched, whatever its keys. Numbers keep
/// their exact digits. Text that is not JSON is replaced by
/// [`CodeDirective::invalid`].
pub fn parse_directive(text: &str) -> DirectiveReply {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => DirectiveReply::Model(value),
        Err(_) => DirectiveReply::Fallback(CodeDirective::invalid()),
    }
}
