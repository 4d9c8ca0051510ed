//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public tokenizer API the way a parser would: check
//! `has_more_tokens`, `advance`, then read the current token through a typed
//! accessor.

use jack_compiler::lexer::{
    classify::token_type,
    tokenizer::{tokenize, tokenize_file, Tokenizer},
    tokens::{KeywordType, TokenType, RESERVED_LOOKUP},
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::path::Path;

fn kinds_and_values(source: &str) -> Vec<(TokenType, String)> {
    tokenize(source, Some("test.jack".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

#[test]
fn test_let_statement_then_comment() {
    let mut tokenizer = Tokenizer::from_source("let x = 5;\n// done\n", None).unwrap();

    assert!(tokenizer.has_more_tokens());
    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.keyword().unwrap(), KeywordType::Let);

    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.identifier().unwrap(), "x");

    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.symbol().unwrap(), "=");

    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.int_val().unwrap(), 5);

    assert!(tokenizer.has_more_tokens());
    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.symbol().unwrap(), ";");

    assert!(!tokenizer.has_more_tokens());
}

#[test]
fn test_string_constant_statement() {
    let mut tokenizer = Tokenizer::from_source("let s = \"hi\";", None).unwrap();
    for _ in 0..4 {
        tokenizer.advance().unwrap();
    }

    assert_eq!(tokenizer.token_type().unwrap(), TokenType::StringConst);
    assert_eq!(tokenizer.string_val().unwrap(), "\"hi\"");
}

#[test]
fn test_comment_spanning_three_lines() {
    let source = "/* one\ntwo\nthree */foo\nbar";
    assert_eq!(
        kinds_and_values(source),
        vec![
            (TokenType::Identifier, "foo".to_string()),
            (TokenType::Identifier, "bar".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_square_fixture() {
    let tokens = tokenize_file(Path::new("tests/fixtures/Square.jack")).unwrap();
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(
        values[..20],
        [
            "class", "Square", "{", "field", "int", "x", ",", "y", ";", "field", "int", "size",
            ";", "constructor", "Square", "new", "(", "int", "Ax", ",",
        ]
    );
    assert_eq!(values.last(), Some(&"}"));

    assert_eq!(tokens[0].position.0, 7);
    assert_eq!(tokens[13].position.0, 13);

    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenType::IntConst && token.value == "510"));
    assert!(!values.iter().any(|value| value.contains("pixels")));
}

#[test]
fn test_tokenize_greeting_fixture() {
    let tokens = tokenize_file(Path::new("tests/fixtures/Greeting.jack")).unwrap();
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(
        values,
        vec![
            "class", "Main", "{", "function", "void", "main", "(", ")", "{", "var", "String",
            "s", ";", "let", "s", "=", "\"Hello world\"", ";", "do", "Output", ".",
            "printString", "(", "s", ")", ";", "do", "Output", ".", "printInt", "(", "32767",
            ")", ";", "return", ";", "}", "}",
        ]
    );
    assert_eq!(tokens[0].position.0, 2);
    assert_eq!(tokens[16].kind, TokenType::StringConst);
}

#[test]
fn test_tokenize_broken_fixture() {
    let error = tokenize_file(Path::new("tests/fixtures/Broken.jack")).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidToken");
    assert_eq!(error.kind().token(), Some("40000"));
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_tokenize_missing_file() {
    let error = tokenize_file(Path::new("tests/fixtures/Missing.jack")).unwrap_err();
    assert_eq!(error.get_error_name(), "Io");
}

#[test]
fn test_iterator_stops_after_last_token() {
    let tokenizer = Tokenizer::from_source("return;\n\n/* tail */\n", None).unwrap();
    let tokens: Vec<_> = tokenizer.collect::<Result<_, _>>().unwrap();

    assert_eq!(tokens.len(), 2);
}

proptest! {
    #[test]
    fn prop_int_consts_round_trip(n in 0u16..=32767) {
        let source = n.to_string();
        prop_assert_eq!(token_type(&source), Ok(TokenType::IntConst));

        let mut tokenizer = Tokenizer::from_source(&source, None).unwrap();
        tokenizer.advance().unwrap();
        prop_assert_eq!(tokenizer.int_val().unwrap(), n);
    }

    #[test]
    fn prop_out_of_range_ints_are_not_int_consts(n in 32768u32..1_000_000) {
        prop_assert!(token_type(&n.to_string()).is_err());
    }

    #[test]
    fn prop_keywords_win_over_identifiers(word in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
        let expected = if RESERVED_LOOKUP.contains_key(word.as_str()) {
            TokenType::Keyword
        } else {
            TokenType::Identifier
        };
        prop_assert_eq!(token_type(&word), Ok(expected));
    }

    #[test]
    fn prop_accessors_are_idempotent(word in "[a-z]{1,8}|[0-9]{1,4}|\"[a-z ]{1,8}\"|[{}();=+]") {
        let mut tokenizer = Tokenizer::from_source(&word, None).unwrap();
        tokenizer.advance().unwrap();

        let first = tokenizer.token().unwrap();
        let second = tokenizer.token().unwrap();
        prop_assert_eq!(&first, &second);

        match first.kind {
            TokenType::Keyword => prop_assert_eq!(tokenizer.keyword().unwrap(), tokenizer.keyword().unwrap()),
            TokenType::Symbol => prop_assert_eq!(tokenizer.symbol().unwrap(), tokenizer.symbol().unwrap()),
            TokenType::Identifier => prop_assert_eq!(tokenizer.identifier().unwrap(), tokenizer.identifier().unwrap()),
            TokenType::IntConst => prop_assert_eq!(tokenizer.int_val().unwrap(), tokenizer.int_val().unwrap()),
            TokenType::StringConst => prop_assert_eq!(tokenizer.string_val().unwrap(), tokenizer.string_val().unwrap()),
        }
    }

    #[test]
    fn prop_blank_input_has_no_tokens(lines in prop::collection::vec("[ \t]{0,6}", 0..50)) {
        let source = lines.join("\n");
        let tokenizer = Tokenizer::from_source(&source, None).unwrap();

        prop_assert!(!tokenizer.has_more_tokens());
        prop_assert!(tokenizer.current_token().is_none());
    }
}
