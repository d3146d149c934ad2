pub mod extract;
pub mod request;
pub mod types;

pub use extract::first_candidate_text;
pub use request::{build_request, generate_content_url, API_KEY_HEADER, SYSTEM_INSTRUCTION};
pub use types::{GenerateContentRequest, GenerateContentResponse};
