//! Stateless classification of a single lexeme.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::tokens::{KeywordType, TokenType, MAX_INT_CONST, RESERVED_LOOKUP, SYMBOLS};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref STRING_CONST: Regex = Regex::new("^\"[^\"\n]+\"$").unwrap();
}

/// Decides which of the five categories `token` belongs to.
///
/// Keywords are tested before identifiers; that ordering is what keeps a
/// reserved word from being read as a name. The remaining categories cannot
/// overlap because their first characters differ.
pub fn token_type(token: &str) -> Result<TokenType, ErrorImpl> {
    if is_keyword(token) {
        return Ok(TokenType::Keyword);
    }

    if is_symbol(token) {
        return Ok(TokenType::Symbol);
    }

    if is_int_const(token) {
        return Ok(TokenType::IntConst);
    }

    if is_string_const(token) {
        return Ok(TokenType::StringConst);
    }

    if is_identifier(token) {
        return Ok(TokenType::Identifier);
    }

    Err(ErrorImpl::InvalidToken {
        token: token.to_string(),
    })
}

/// Resolves a reserved word. Only meaningful once `token_type` has said
/// `Keyword`, but guarded regardless.
pub fn keyword(token: &str) -> Result<KeywordType, ErrorImpl> {
    RESERVED_LOOKUP
        .get(token)
        .copied()
        .ok_or_else(|| ErrorImpl::InvalidKeyword {
            token: token.to_string(),
        })
}

pub fn is_keyword(token: &str) -> bool {
    RESERVED_LOOKUP.contains_key(token)
}

pub fn is_symbol(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SYMBOLS.contains(&c),
        _ => false,
    }
}

/// Decimal in `0..=32767`, optionally with a leading `+`. The tokenizer
/// never produces a signed lexeme since `+` and `-` are symbols.
pub fn is_int_const(token: &str) -> bool {
    let digits = token.strip_prefix('+').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match digits.parse::<u64>() {
        Ok(value) => value <= MAX_INT_CONST as u64,
        Err(_) => false,
    }
}

pub fn is_string_const(token: &str) -> bool {
    STRING_CONST.is_match(token)
}

pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}
