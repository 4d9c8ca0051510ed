use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_LEXEME_ACCESSOR, MK_TOKEN,
};

use super::{
    classify,
    normalize::{is_space_or_tab, split_leading_lexeme, trim_space_and_tab},
    tokens::{KeywordType, Token, TokenType},
};

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_START: &str = "/*";
const BLOCK_COMMENT_END: &str = "*/";

/// Cursor over a line-oriented source.
///
/// The unconsumed part of the current line always starts with the next
/// genuine lexeme (or the tokenizer is done), so `has_more_tokens` is exact:
/// a trailing comment or blank lines never produce a phantom token.
///
/// ```
/// use jack_compiler::lexer::{tokenizer::Tokenizer, tokens::TokenType};
///
/// let mut tokenizer = Tokenizer::from_source("let x = 5; // five", None).unwrap();
/// let mut kinds = vec![];
/// while tokenizer.has_more_tokens() {
///     tokenizer.advance().unwrap();
///     kinds.push(tokenizer.token_type().unwrap());
/// }
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[3], TokenType::IntConst);
/// ```
pub struct Tokenizer<R: BufRead> {
    input: R,
    file: Rc<String>,
    line: String,
    line_number: u32,
    // Unconsumed text is `line[cursor..line_end]`; it never starts with
    // whitespace and `line_end` excludes trailing whitespace.
    cursor: usize,
    line_end: usize,
    is_done: bool,
    current_token: Option<String>,
    current_line: u32,
    current_column: u32,
    is_in_multi_line_comment: bool,
}

impl<'a> Tokenizer<&'a [u8]> {
    pub fn from_source(source: &'a str, file: Option<String>) -> Result<Self, Error> {
        Tokenizer::new(source.as_bytes(), file)
    }
}

impl<R: BufRead> Tokenizer<R> {
    /// Wraps `input` and reads ahead to the first lexeme.
    pub fn new(input: R, file: Option<String>) -> Result<Self, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        let mut tokenizer = Tokenizer {
            input,
            file: file_name,
            line: String::new(),
            line_number: 0,
            cursor: 0,
            line_end: 0,
            is_done: false,
            current_token: None,
            current_line: 0,
            current_column: 0,
            is_in_multi_line_comment: false,
        };

        tokenizer.seek_lexeme()?;
        Ok(tokenizer)
    }

    pub fn has_more_tokens(&self) -> bool {
        !self.is_done
    }

    /// Stages the next lexeme as the current token. A no-op once done.
    ///
    /// An `Err` means the input failed while reading ahead; the lexeme that
    /// was just staged is still readable, but no further tokens follow.
    pub fn advance(&mut self) -> Result<(), Error> {
        if self.is_done {
            return Ok(());
        }

        let (lexeme, _) = split_leading_lexeme(self.rest());
        let lexeme = lexeme.to_string();

        trace!(line = self.line_number, lexeme = %lexeme, "staged token");
        self.current_line = self.line_number;
        self.current_column = self.cursor as u32 + 1;
        self.consume(lexeme.len());
        self.current_token = Some(lexeme);

        self.seek_lexeme()
    }

    /// The lexeme staged by the last `advance`, if any.
    pub fn current_token(&self) -> Option<&str> {
        self.current_token.as_deref()
    }

    /// Position of the current token, or of the last line read if none is staged.
    pub fn position(&self) -> Position {
        if self.current_token.is_some() {
            Position(self.current_line, Rc::clone(&self.file), self.current_column)
        } else {
            Position(self.line_number, Rc::clone(&self.file), 0)
        }
    }

    pub fn token_type(&self) -> Result<TokenType, Error> {
        let token = self.current()?;
        classify::token_type(token).map_err(|error| self.error(error))
    }

    pub fn token(&self) -> Result<Token, Error> {
        let kind = self.token_type()?;
        let value = self.current()?.to_string();
        Ok(MK_TOKEN!(kind, value, self.position()))
    }

    pub fn keyword(&self) -> Result<KeywordType, Error> {
        let token = self.expect(TokenType::Keyword)?;
        classify::keyword(token).map_err(|error| self.error(error))
    }

    MK_LEXEME_ACCESSOR!(symbol, TokenType::Symbol);
    MK_LEXEME_ACCESSOR!(identifier, TokenType::Identifier);
    MK_LEXEME_ACCESSOR!(
        /// The string constant exactly as written, surrounding quotes included.
        string_val,
        TokenType::StringConst
    );

    pub fn int_val(&self) -> Result<u16, Error> {
        let token = self.expect(TokenType::IntConst)?;
        token.parse::<u16>().map_err(|_| {
            self.error(ErrorImpl::NumberParseError {
                token: token.to_string(),
            })
        })
    }

    fn current(&self) -> Result<&str, Error> {
        self.current_token
            .as_deref()
            .ok_or_else(|| self.error(ErrorImpl::NoCurrentToken))
    }

    fn expect(&self, expected: TokenType) -> Result<&str, Error> {
        let received = self.token_type()?;
        let token = self.current()?;

        if received != expected {
            return Err(self.error(ErrorImpl::TokenTypeMismatch {
                expected,
                received,
                token: token.to_string(),
            }));
        }

        Ok(token)
    }

    fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.position())
    }

    fn rest(&self) -> &str {
        &self.line[self.cursor..self.line_end]
    }

    /// Moves past `len` bytes and any whitespace that follows them.
    fn consume(&mut self, len: usize) {
        self.cursor += len;
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start_matches(is_space_or_tab).len();
        self.cursor += skipped;
    }

    fn skip_line(&mut self) {
        self.cursor = self.line_end;
    }

    /// Drops blank lines and comments until the unconsumed text starts with
    /// a lexeme or the input is exhausted.
    fn seek_lexeme(&mut self) -> Result<(), Error> {
        while !self.is_done {
            if self.rest().is_empty() {
                self.pull_line()?;
                continue;
            }

            if self.is_in_multi_line_comment {
                self.skip_multi_line_comment();
                continue;
            }

            if self.rest().starts_with(BLOCK_COMMENT_START) {
                debug!(line = self.line_number, "multi-line comment opened");
                self.is_in_multi_line_comment = true;
                self.consume(BLOCK_COMMENT_START.len());
                continue;
            }

            if self.rest().starts_with(LINE_COMMENT) {
                self.skip_line();
                continue;
            }

            return Ok(());
        }

        Ok(())
    }

    /// Reads the next physical line. Bytes that are not UTF-8 are replaced
    /// rather than rejected, so they only matter if they end up in a lexeme.
    fn pull_line(&mut self) -> Result<(), Error> {
        let mut buffer = Vec::new();
        match self.input.read_until(b'\n', &mut buffer) {
            Err(error) => {
                self.is_done = true;
                Err(Error::new(
                    ErrorImpl::Io {
                        message: error.to_string(),
                    },
                    Position(self.line_number + 1, Rc::clone(&self.file), 0),
                ))
            }
            Ok(0) => {
                debug!(lines = self.line_number, "input exhausted");
                self.is_done = true;
                Ok(())
            }
            Ok(_) => {
                if buffer.last() == Some(&b'\n') {
                    buffer.pop();
                }
                if buffer.last() == Some(&b'\r') {
                    buffer.pop();
                }

                self.line_number += 1;
                self.line = String::from_utf8_lossy(&buffer).into_owned();
                trace!(line = self.line_number, text = %self.line, "pulled line");

                let trimmed = trim_space_and_tab(&self.line);
                self.cursor = self.line.len() - self.line.trim_start_matches(is_space_or_tab).len();
                self.line_end = self.cursor + trimmed.len();
                Ok(())
            }
        }
    }

    /// Looks for the end of the open comment on the current line. Text right
    /// after the terminator becomes the next lexeme; without a terminator the
    /// whole line is consumed.
    fn skip_multi_line_comment(&mut self) {
        let Some(index) = self.rest().find(BLOCK_COMMENT_END) else {
            self.skip_line();
            return;
        };

        debug!(line = self.line_number, "multi-line comment closed");
        self.is_in_multi_line_comment = false;
        self.consume(index + BLOCK_COMMENT_END.len());
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more_tokens() {
            return None;
        }

        if let Err(error) = self.advance() {
            return Some(Err(error));
        }

        Some(self.token())
    }
}

/// Tokenizes `source` completely, stopping at the first lexeme that fits no
/// category.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    Tokenizer::from_source(source, file)?.collect()
}

pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, Error> {
    let name = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|error| {
        Error::new(
            ErrorImpl::Io {
                message: error.to_string(),
            },
            Position(0, Rc::new(name.clone()), 0),
        )
    })?;

    Tokenizer::new(BufReader::new(file), Some(name))?.collect()
}
