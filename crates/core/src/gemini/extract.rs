use super::types::GenerateContentResponse;

/// Text of the first part of the first candidate, if there is one.
pub fn first_candidate_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()
}
