//! Error types for the tokenizer.
//!
//! Every failure a caller can observe is an [`errors::Error`]: an
//! [`errors::ErrorImpl`] describing what went wrong, plus the position of
//! the token (or line) that caused it. Errors never invalidate the
//! tokenizer's cursor.

pub mod errors;
