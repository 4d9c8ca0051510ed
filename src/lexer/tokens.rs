use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, KeywordType> = {
        let mut map = HashMap::new();
        map.insert("class", KeywordType::Class);
        map.insert("constructor", KeywordType::Constructor);
        map.insert("function", KeywordType::Function);
        map.insert("method", KeywordType::Method);
        map.insert("field", KeywordType::Field);
        map.insert("static", KeywordType::Static);
        map.insert("var", KeywordType::Var);
        map.insert("int", KeywordType::Int);
        map.insert("char", KeywordType::Char);
        map.insert("boolean", KeywordType::Boolean);
        map.insert("void", KeywordType::Void);
        map.insert("true", KeywordType::True);
        map.insert("false", KeywordType::False);
        map.insert("null", KeywordType::Null);
        map.insert("this", KeywordType::This);
        map.insert("let", KeywordType::Let);
        map.insert("do", KeywordType::Do);
        map.insert("if", KeywordType::If);
        map.insert("else", KeywordType::Else);
        map.insert("while", KeywordType::While);
        map.insert("return", KeywordType::Return);
        map
    };
}

/// Single-character symbols of the language.
pub const SYMBOLS: [char; 19] = [
    '{', '}', '(', ')', '[', ']', '.', ',', ';', '+', '-', '*', '/', '&', '|', '<', '>', '=', '~',
];

/// Largest integer constant the target VM's 16-bit word can hold.
pub const MAX_INT_CONST: u16 = 32767;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Keyword,
    Symbol,
    Identifier,
    IntConst,
    StringConst,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenType::Keyword => "keyword",
            TokenType::Symbol => "symbol",
            TokenType::Identifier => "identifier",
            TokenType::IntConst => "integerConstant",
            TokenType::StringConst => "stringConstant",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeywordType {
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,
    Int,
    Char,
    Boolean,
    Void,
    True,
    False,
    Null,
    This,
    Let,
    Do,
    If,
    Else,
    While,
    Return,
}

impl KeywordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordType::Class => "class",
            KeywordType::Constructor => "constructor",
            KeywordType::Function => "function",
            KeywordType::Method => "method",
            KeywordType::Field => "field",
            KeywordType::Static => "static",
            KeywordType::Var => "var",
            KeywordType::Int => "int",
            KeywordType::Char => "char",
            KeywordType::Boolean => "boolean",
            KeywordType::Void => "void",
            KeywordType::True => "true",
            KeywordType::False => "false",
            KeywordType::Null => "null",
            KeywordType::This => "this",
            KeywordType::Let => "let",
            KeywordType::Do => "do",
            KeywordType::If => "if",
            KeywordType::Else => "else",
            KeywordType::While => "while",
            KeywordType::Return => "return",
        }
    }
}

impl Display for KeywordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lexeme paired with its category. Built on demand from the tokenizer's
/// current position; the tokenizer itself only stores the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.kind, self.value)
    }
}

