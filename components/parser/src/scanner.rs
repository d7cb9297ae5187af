//! Sparr scanner - tokenizes source code into tokens

use core_types::SparrResult;

use crate::error::lex_error;
use crate::token::{Token, TokenKind, TokenValue};

const COMMENT_CHAR: char = '#';
const REGISTER_PREFIX: char = 'r';

/// Scanner for sparr source code
///
/// Produces a flat token sequence: each line's tokens followed by a
/// `LineEnd`, then a single `EndOfInput`.
///
/// # Example
///
/// ```
/// use parser::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("set 3\nwrt rv").scan_tokens().unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Command,
///         TokenKind::Number,
///         TokenKind::LineEnd,
///         TokenKind::Command,
///         TokenKind::Register,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
pub struct Scanner {
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: u32,
}

impl Scanner {
    /// Create a new scanner for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the whole source
    ///
    /// Either returns every token, terminated by `EndOfInput`, or the first
    /// lex error.
    pub fn scan_tokens(mut self) -> SparrResult<Vec<Token>> {
        while !self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::EndOfInput, "", None, self.line));
        tracing::debug!(tokens = self.tokens.len(), lines = self.line, "scanned source");

        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> SparrResult<()> {
        let c = self.advance();
        match c {
            // Whitespace separates operands
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.add_token(TokenKind::LineEnd, None);
                self.line += 1;
            }
            COMMENT_CHAR => {
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
            }
            REGISTER_PREFIX => self.register()?,
            c if c.is_ascii_digit() => self.number()?,
            c if is_cased(c) => self.command(),
            other => {
                return Err(lex_error(
                    format!("unexpected character '{}'", other.escape_debug()),
                    self.line,
                ));
            }
        }
        Ok(())
    }

    fn register(&mut self) -> SparrResult<()> {
        if self.peek().is_ascii_digit() {
            while self.peek().is_ascii_digit() {
                self.advance();
            }
            let digits: String = self.chars[self.start + 1..self.current].iter().collect();
            // Bounds are checked by the parser; overflowing indices are
            // simply out of range.
            let index = digits.parse::<u64>().unwrap_or(u64::MAX);
            self.add_token(TokenKind::Register, Some(TokenValue::RegisterIndex(index)));
            Ok(())
        } else if self.match_char('v') || self.match_char('c') {
            let letter = self.chars[self.current - 1];
            self.add_token(TokenKind::Register, Some(TokenValue::SpecialRegister(letter)));
            Ok(())
        } else {
            let found = if self.is_at_end() {
                "end of input".to_string()
            } else {
                format!("'{}'", self.peek().escape_debug())
            };
            Err(lex_error(
                format!("invalid register: 'r' followed by {}", found),
                self.line,
            ))
        }
    }

    fn number(&mut self) -> SparrResult<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Look for a fractional part.
        if self.peek() == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            // Consume the "."
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        let value = text
            .parse::<f64>()
            .map_err(|_| lex_error(format!("invalid number '{}'", text), self.line))?;
        self.add_token(TokenKind::Number, Some(TokenValue::Number(value)));
        Ok(())
    }

    fn command(&mut self) {
        while !self.is_at_end() && self.peek() != COMMENT_CHAR && is_cased(self.peek()) {
            self.advance();
        }
        let word = self.lexeme();
        self.add_token(TokenKind::Command, Some(TokenValue::Command(word)));
    }

    fn add_token(&mut self, kind: TokenKind, value: Option<TokenValue>) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, value, self.line));
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }
}

/// Check if a character is a letter with distinct upper and lower case forms.
///
/// This is the alphabet test for command words; it accepts any cased Unicode
/// letter, not just ASCII.
fn is_cased(c: char) -> bool {
    c.to_uppercase().ne(c.to_lowercase())
}
