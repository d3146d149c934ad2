/// Ways an outbound completion call can fail.
///
/// None of these reach the inbound client; each one makes the relay answer
/// with the unreachable fallback.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Completion request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Completion service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Unexpected completion reply: {0}")]
    Envelope(String),
}
