#![allow(clippy::module_inception)]

use std::{fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based source line, the file it came from and the 1-based byte column
/// of the lexeme. Line 0 means nothing has been read yet; column 0 means the
/// position is not tied to a lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>, pub u32);

pub fn get_line_at_position(file: &Path, line: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    let index = (line as usize).checked_sub(1)?;
    content.lines().nth(index).map(String::from)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokenizer::Tokenizer,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let file = std::path::PathBuf::from("tests/fixtures/Square.jack");

        let line = super::get_line_at_position(&file, 1).unwrap();
        assert_eq!(line, "// Draws a square and moves it around.");

        let line = super::get_line_at_position(&file, 9).unwrap();
        assert_eq!(line, "    field int x, y;");

        assert!(super::get_line_at_position(&file, 0).is_none());
        assert!(super::get_line_at_position(&file, 10_000).is_none());
    }

    #[test]
    fn test_error_underline_uses_column() {
        let mut tokenizer = Tokenizer::from_source("    let a = a;", None).unwrap();
        for _ in 0..4 {
            tokenizer.advance().unwrap();
        }

        let error = tokenizer.keyword().unwrap_err();
        assert_eq!(error.get_position().2, 13);
        assert_eq!(super::error_underline(&error, 4), Some((8, 1)));
    }

    #[test]
    fn test_error_underline_without_column() {
        let error = Error::new(
            ErrorImpl::InvalidToken {
                token: "$".to_string(),
            },
            Position(1, Rc::new("test.jack".to_string()), 0),
        );
        assert_eq!(super::error_underline(&error, 0), None);
    }
}

pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: InvalidToken (`#` is not a keyword, ...)
        -> Main.jack
           |
        20 | let a = #;
           |         ^
    */

    let position = error.get_position();
    let line_str = position.0.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error.kind());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());

    let Some(line_text) = get_line_at_position(file, position.0) else {
        return;
    };

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    match error_underline(error, removed_whitespace) {
        Some((indent, width)) => {
            eprintln!("{:>padding$} {}{}", "|", " ".repeat(indent), "^".repeat(width));
        }
        None => eprintln!("{:>padding$}", "|"),
    }
}

/// Indent (relative to the line with `removed_whitespace` leading blanks
/// stripped) and width of the caret run under the failing lexeme.
pub fn error_underline(error: &Error, removed_whitespace: usize) -> Option<(usize, usize)> {
    let token = error.kind().token()?;
    let column = (error.get_position().2 as usize).checked_sub(1)?;
    Some((column.saturating_sub(removed_whitespace), token.len()))
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
