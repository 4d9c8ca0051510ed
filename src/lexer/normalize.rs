//! Line-level helpers: whitespace trimming and lexeme boundaries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A quoted run is one lexeme so string constants may contain spaces.
    static ref LEADING_LEXEME: Regex = Regex::new(
        r#"^(?:"[^"]*"|[A-Za-z0-9_]+|[{}()\[\].,;+\-*/&|<>=~]|[^ \tA-Za-z0-9_{}()\[\].,;+\-*/&|<>=~"]+|")"#
    )
    .unwrap();
}

pub fn is_space_or_tab(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Strips leading and trailing spaces and tabs, in any mix.
///
/// ```
/// use jack_compiler::lexer::normalize::trim_space_and_tab;
///
/// assert_eq!(trim_space_and_tab(" \t let x \t"), "let x");
/// assert_eq!(trim_space_and_tab("\t \t"), "");
/// ```
pub fn trim_space_and_tab(line: &str) -> &str {
    line.trim_matches(is_space_or_tab)
}

/// Splits `text` into its first lexeme and whatever follows it.
///
/// A word run, a quoted run or a single symbol each form one lexeme. Runs of
/// characters that belong to none of those are returned whole so the
/// classifier can reject them. Whitespace always ends a lexeme.
pub fn split_leading_lexeme(text: &str) -> (&str, &str) {
    match LEADING_LEXEME.find(text) {
        Some(m) if m.end() > 0 => text.split_at(m.end()),
        _ => {
            let end = text.find(is_space_or_tab).unwrap_or(text.len());
            text.split_at(end)
        }
    }
}
