//! Evaluation of basic arithmetic expressions.
//!
//! Supported: decimal literals, `+`, `-`, `*`, `/`, unary signs and
//! parentheses. Integers stay integers under `+`, `-` and `*`; division and
//! any operation involving a decimal literal produce a float.

use std::{fmt, iter::Peekable, str::CharIndices};

use thiserror::Error;

/// The result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A whole number.
    Int(i64),
    /// A floating point number.
    Float(f64),
}

impl Value {
    /// The value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{i}"),
            // keep a fractional digit so that floats read as floats ("2.0")
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Why an expression could not be evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Nothing to evaluate.
    #[error("expression is empty")]
    Empty,
    /// A character that is not part of the expression language.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset in the input.
        position: usize,
    },
    /// A numeric literal that could not be read.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A token appeared where it is not allowed.
    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken {
        /// The token as written.
        token: String,
        /// Byte offset in the input.
        position: usize,
    },
    /// The input ended in the middle of an expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// A `(` without its `)`.
    #[error("missing ')' for '(' at position {0}")]
    UnclosedParenthesis(usize),
    /// Division by zero.
    #[error("Cannot divide by 0")]
    DivisionByZero,
    /// Integer arithmetic overflowed.
    #[error("integer overflow")]
    Overflow,
    /// Parentheses, or a run of signs, nested deeper than [`MAX_DEPTH`].
    #[error("expression nested deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Deepest parenthesis nesting, and longest run of unary signs, the
/// evaluator accepts.
pub const MAX_DEPTH: usize = 256;

impl CalcError {
    /// The short message shown in place of a result.
    #[must_use]
    pub const fn short_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by 0",
            _ => "Error",
        }
    }
}

/// Evaluate an arithmetic expression.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing by zero, and another
/// [`CalcError`] for malformed input or integer overflow.
pub fn evaluate(expression: &str) -> Result<Value, CalcError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        next: 0,
        depth: 0,
    };
    let value = parser.expression()?;

    match parser.peek() {
        None => Ok(value),
        Some(token) => Err(token.unexpected()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TokenKind {
    Number(Value),
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

impl Token {
    fn unexpected(&self) -> CalcError {
        CalcError::UnexpectedToken {
            token: self.text.clone(),
            position: self.position,
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        let kind = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let text = take_number(&mut chars);
                let value = parse_number(&text)?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    text,
                    position,
                });
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            ch => return Err(CalcError::UnexpectedCharacter { ch, position }),
        };
        chars.next();
        tokens.push(Token {
            kind,
            text: ch.to_string(),
            position,
        });
    }

    Ok(tokens)
}

fn take_number(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut text = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            text.push(c);
            chars.next();
        } else {
            break;
        }
    }
    text
}

fn parse_number(text: &str) -> Result<Value, CalcError> {
    if text.contains('.') {
        if text == "." || text.matches('.').count() > 1 {
            return Err(CalcError::InvalidNumber(text.to_string()));
        }
        text.parse()
            .map(Value::Float)
            .map_err(|_| CalcError::InvalidNumber(text.to_string()))
    } else {
        text.parse().map(Value::Int).map_err(|_| CalcError::Overflow)
    }
}

/// Recursive descent over the token stream.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := ('+' | '-')* primary
/// primary    := number | '(' expression ')'
/// ```
struct Parser<'a> {
    tokens: &'a [Token],
    next: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.next)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.next)?;
        self.next += 1;
        Some(token)
    }

    fn expression(&mut self) -> Result<Value, CalcError> {
        let mut value = self.term()?;
        while let Some(kind) = self.peek().map(|t| t.kind) {
            let op = match kind {
                TokenKind::Plus => add,
                TokenKind::Minus => subtract,
                _ => break,
            };
            self.next += 1;
            value = op(value, self.term()?)?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<Value, CalcError> {
        let mut value = self.unary()?;
        while let Some(kind) = self.peek().map(|t| t.kind) {
            let op = match kind {
                TokenKind::Star => multiply,
                TokenKind::Slash => divide,
                _ => break,
            };
            self.next += 1;
            value = op(value, self.unary()?)?;
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<Value, CalcError> {
        let mut negative = false;
        let mut signs = 0;
        while let Some(kind) = self.peek().map(|t| t.kind) {
            match kind {
                TokenKind::Plus => {}
                TokenKind::Minus => negative = !negative,
                _ => break,
            }
            signs += 1;
            if signs > MAX_DEPTH {
                return Err(CalcError::TooDeep);
            }
            self.next += 1;
        }

        let value = self.primary()?;
        if negative { negate(value) } else { Ok(value) }
    }

    fn primary(&mut self) -> Result<Value, CalcError> {
        let token = self.advance().ok_or(CalcError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            TokenKind::Open => {
                let open = token.position;
                if self.depth == MAX_DEPTH {
                    return Err(CalcError::TooDeep);
                }
                self.depth += 1;
                let value = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::Close,
                        ..
                    }) => Ok(value),
                    Some(token) => Err(token.unexpected()),
                    None => Err(CalcError::UnclosedParenthesis(open)),
                }
            }
            _ => Err(token.unexpected()),
        }
    }
}

fn negate(value: Value) -> Result<Value, CalcError> {
    match value {
        Value::Int(i) => i.checked_neg().map(Value::Int).ok_or(CalcError::Overflow),
        Value::Float(f) => Ok(Value::Float(-f)),
    }
}

fn add(lhs: Value, rhs: Value) -> Result<Value, CalcError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.checked_add(b).map(Value::Int).ok_or(CalcError::Overflow),
        _ => Ok(Value::Float(lhs.as_f64() + rhs.as_f64())),
    }
}

fn subtract(lhs: Value, rhs: Value) -> Result<Value, CalcError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.checked_sub(b).map(Value::Int).ok_or(CalcError::Overflow),
        _ => Ok(Value::Float(lhs.as_f64() - rhs.as_f64())),
    }
}

fn multiply(lhs: Value, rhs: Value) -> Result<Value, CalcError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.checked_mul(b).map(Value::Int).ok_or(CalcError::Overflow),
        _ => Ok(Value::Float(lhs.as_f64() * rhs.as_f64())),
    }
}

fn divide(lhs: Value, rhs: Value) -> Result<Value, CalcError> {
    let divisor = rhs.as_f64();
    if divisor == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(Value::Float(lhs.as_f64() / divisor))
}
