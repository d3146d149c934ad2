//! Core library for coderelay
//!
//! This crate is the **Functional Core** of the coderelay service: every
//! transformation between the inbound request, the completion service wire
//! format and the directive returned to clients, with zero I/O.
//!
//! - **`coderelay_core`** (this crate): pure transformation functions
//! - **`coderelay`**: the HTTP server, the outbound client and the CLI
//!
//! # Module Organization
//!
//! - [`prompt`]: validation of the inbound `/generate` body
//! - [`gemini`]: `generateContent` request building and reply envelope reading
//! - [`directive`]: the Code Directive, its fallbacks and the reply parser
//!
//! # Example Usage
//!
//! ```rust
//! use coderelay_core::directive::{parse_directive, CodeDirective, DirectiveReply};
//!
//! let reply = parse_directive("not json");
//! assert_eq!(reply, DirectiveReply::Fallback(CodeDirective::invalid()));
//! ```

pub mod directive;
pub mod gemini;
pub mod prompt;
