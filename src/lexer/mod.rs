//! Lexical analysis for the language.
//!
//! This module contains the tokenizer that turns source text into a stream
//! of classified tokens for parsing. It handles:
//!
//! - Pulling the source one line at a time and trimming it
//! - Skipping line comments and multi-line comments that span lines
//! - Splitting glued lexemes such as `x;` or `*/foo`
//! - Classifying each lexeme as keyword, symbol, identifier, integer or string

pub mod classify;
pub mod normalize;
pub mod tokenizer;
pub mod tokens;
