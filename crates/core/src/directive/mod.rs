pub mod parse;
pub mod types;

pub use parse::parse_directive;
pub use types::{CodeDirective, DirectiveReply};
