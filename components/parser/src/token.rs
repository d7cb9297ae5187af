//! Token model produced by the scanner

use std::fmt;

use core_types::Number;

/// Token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal (`3`, `2.5`)
    Number,
    /// Register reference (`r0`, `rv`, `rc`)
    Register,
    /// Command word (`set`, `cplt`)
    Command,
    /// End of a source line
    LineEnd,
    /// End of input
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "Number",
            TokenKind::Register => "Register",
            TokenKind::Command => "Command",
            TokenKind::LineEnd => "LineEnd",
            TokenKind::EndOfInput => "EndOfInput",
        };
        write!(f, "{}", name)
    }
}

/// Value carried by a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Parsed numeric literal
    Number(Number),
    /// General register index, not yet bounds-checked
    RegisterIndex(u64),
    /// Special register letter (`v` or `c`)
    SpecialRegister(char),
    /// Command word as written
    Command(String),
}

/// A scanned token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type
    pub kind: TokenKind,
    /// Source text of the token
    pub lexeme: String,
    /// Parsed value, if the kind has one
    pub value: Option<TokenValue>,
    /// 1-based source line
    pub line: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, value: Option<TokenValue>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value,
            line,
        }
    }

    /// Check if the token ends a line or the input
    pub fn is_terminator(&self) -> bool {
        matches!(self.kind, TokenKind::LineEnd | TokenKind::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.lexeme.escape_debug(), self.kind)
    }
}

/// Format a run of tokens for diagnostics
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let parts: Vec<String> = tokens.iter().map(Token::to_string).collect();
    format!("[{}]", parts.join(", "))
}
