//! Sparr parser - groups tokens by line and builds instructions
//!
//! Each non-empty source line holds one command followed by its operands.
//! The parser validates arity and operand shape and tags every instruction
//! with its line so the program table can be addressed by line number.

use core_types::{Register, SparrResult};
use instruction_set::{Condition, Instruction, Operand, Operation};

use crate::error::{arity_mismatch, parse_error};
use crate::token::{tokens_to_string, Token, TokenKind, TokenValue};

const COPY_PREFIX: &str = "cp";

/// Parser for a scanned token stream
///
/// # Example
///
/// ```
/// use parser::{Parser, Scanner};
///
/// let tokens = Scanner::new("set 3\n\nwrt rv").scan_tokens().unwrap();
/// let instructions = Parser::new(tokens).parse().unwrap();
///
/// assert_eq!(instructions.len(), 2);
/// assert_eq!(instructions[1].line(), 3);
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    /// Create a new parser over scanner output
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Parse every line into an instruction
    ///
    /// Fails on the first malformed line; the error names the line's tokens.
    pub fn parse(&mut self) -> SparrResult<Vec<Instruction>> {
        let mut instructions = Vec::new();

        while !self.at_end() {
            let parts = self.next_line();
            // Blank and comment-only lines produce no tokens
            if parts.is_empty() {
                continue;
            }

            let instruction = Self::command(&parts).map_err(|mut err| {
                tracing::debug!(tokens = %tokens_to_string(&parts), "parse error");
                err.message = format!("{} while parsing {}", err.message, tokens_to_string(&parts));
                err
            })?;
            instructions.push(instruction);
        }

        tracing::debug!(instructions = instructions.len(), "parsed program");
        Ok(instructions)
    }

    /// Collect the tokens of the next line and skip the line ends after it
    fn next_line(&mut self) -> Vec<Token> {
        let mut parts = Vec::new();
        while let Some(token) = self.peek() {
            if token.is_terminator() {
                break;
            }
            parts.push(token.clone());
            self.index += 1;
        }

        // Handle multiple consecutive empty lines
        while self.peek().is_some_and(|t| t.kind == TokenKind::LineEnd) {
            self.index += 1;
        }
        parts
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn at_end(&self) -> bool {
        self.peek().map_or(true, |t| t.kind == TokenKind::EndOfInput)
    }

    fn command(parts: &[Token]) -> SparrResult<Instruction> {
        let Some((action, rest)) = parts.split_first() else {
            return Err(parse_error("expected command, got empty line", 0));
        };
        let line = action.line;

        if action.kind != TokenKind::Command {
            return Err(parse_error(
                format!("expected command, got {}", action),
                line,
            ));
        }

        let args = rest
            .iter()
            .map(token_to_operand)
            .collect::<SparrResult<Vec<Operand>>>()?;
        let name = action.lexeme.to_lowercase();

        let operation = match name.as_str() {
            "set" => {
                require_args(&args, 1, &name, line)?;
                Operation::Set(args[0])
            }
            "push" => {
                require_args(&args, 0, &name, line)?;
                Operation::Push
            }
            "pop" => {
                require_args(&args, 0, &name, line)?;
                Operation::Pop
            }
            "cp" => {
                require_args(&args, 2, &name, line)?;
                Operation::Copy {
                    src: args[0],
                    dst: destination(args[1], "cp", line)?,
                }
            }
            "add" => {
                require_args(&args, 2, &name, line)?;
                Operation::Add(args[0], args[1])
            }
            "sub" => {
                require_args(&args, 2, &name, line)?;
                Operation::Sub(args[0], args[1])
            }
            "mul" => {
                require_args(&args, 2, &name, line)?;
                Operation::Mul(args[0], args[1])
            }
            "div" => {
                require_args(&args, 2, &name, line)?;
                Operation::Div(args[0], args[1])
            }
            "wrt" => {
                require_args(&args, 1, &name, line)?;
                Operation::Write(args[0])
            }
            "wrts" => {
                require_args(&args, 0, &name, line)?;
                Operation::WriteStack
            }
            "wrtc" => {
                require_args(&args, 1, &name, line)?;
                Operation::WriteChar(args[0])
            }
            "wrtsc" => {
                require_args(&args, 0, &name, line)?;
                Operation::WriteStackChars
            }
            conditional if conditional.starts_with(COPY_PREFIX) => {
                conditional_copy(conditional, &action.lexeme, &args, line)?
            }
            _ => {
                return Err(parse_error(
                    format!("unknown command \"{}\"", action.lexeme),
                    line,
                ));
            }
        };

        Ok(Instruction::new(operation, line))
    }
}

/// Build a conditional copy; the condition is the command suffix after `cp`
fn conditional_copy(name: &str, word: &str, args: &[Operand], line: u32) -> SparrResult<Operation> {
    require_args(args, 4, name, line)?;
    let suffix = &name[COPY_PREFIX.len()..];
    let condition = Condition::from_suffix(suffix).ok_or_else(|| {
        parse_error(
            format!(
                "invalid conditional copy condition \"{}\" in \"{}\", expected GT, LT or EQ",
                suffix.to_uppercase(),
                word
            ),
            line,
        )
    })?;
    Ok(Operation::ConditionalCopy {
        condition,
        a: args[0],
        b: args[1],
        src: args[2],
        dst: destination(args[3], word, line)?,
    })
}

fn require_args(args: &[Operand], expected: usize, command: &str, line: u32) -> SparrResult<()> {
    if args.len() != expected {
        return Err(arity_mismatch(command, expected, args.len(), line));
    }
    Ok(())
}

/// Copy targets must be writable registers
fn destination(operand: Operand, command: &str, line: u32) -> SparrResult<Register> {
    match operand {
        Operand::Register(register) => Ok(register),
        Operand::Literal(value) => Err(parse_error(
            format!(
                "destination of {} must be a register, got literal {}",
                command,
                core_types::format_number(value)
            ),
            line,
        )),
    }
}

fn token_to_operand(token: &Token) -> SparrResult<Operand> {
    match (&token.kind, &token.value) {
        (TokenKind::Number, Some(TokenValue::Number(value))) => Ok(Operand::Literal(*value)),
        (TokenKind::Register, Some(TokenValue::RegisterIndex(index))) => Register::general(*index)
            .map(Operand::Register)
            .ok_or_else(|| {
                parse_error(
                    format!("invalid general register value {}, expected 0-9", index),
                    token.line,
                )
            }),
        (TokenKind::Register, Some(TokenValue::SpecialRegister(letter))) => Register::special(*letter)
            .map(Operand::Register)
            .ok_or_else(|| {
                parse_error(format!("invalid special register r{}", letter), token.line)
            }),
        _ => Err(parse_error(
            format!("invalid value {}, expected register or number", token),
            token.line,
        )),
    }
}
