pub mod document;
pub mod error;
pub mod io;
pub mod reflow;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::reflow_document;
pub use error::WrapError;
pub use reflow::{Segment, Token, columns, reconstruct, tokenize, wrap, wrap_tokens};
