//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LEXEME_ACCESSOR!` - Creates a typed accessor that returns the raw lexeme

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$value` - The token's lexeme
/// * `$position` - Where the lexeme was read
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::IntConst, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a tokenizer accessor that checks the current token's category and
/// hands back the lexeme unchanged.
///
/// # Arguments
///
/// * `$name` - The accessor's method name
/// * `$kind` - The TokenType the current token must have
///
/// # Example
///
/// ```ignore
/// impl<R: BufRead> Tokenizer<R> {
///     MK_LEXEME_ACCESSOR!(symbol, TokenType::Symbol);
/// }
/// ```
#[macro_export]
macro_rules! MK_LEXEME_ACCESSOR {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<&str, Error> {
            self.expect($kind)
        }
    };
}
