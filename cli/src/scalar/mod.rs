// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Parser for scalar expressions accepted on the command line and in requirement files.
//!
//! Expressions are evaluated exactly in the field Q(sqrt(2))(ln(2)). The grammar is:
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := '-' unary | power
//! power := atom ('^' unary)?
//! atom  := number | ident '(' expr ')' | '(' expr ')'
//! ```
//!
//! Numbers are integers, fractions are written with `/`, and decimals such as `0.25` are read
//! as exact rationals. Exponents must evaluate to integers. `sqrt(r)` is supported for
//! rationals r whose square root lies in Q(sqrt(2)), and `ln(r)` for r = 2^k.

use core::{fmt, str::FromStr};

use interpolator::math::{
    fields::{Ln2, QuadExtension, Rational, RationalFunction, Sqrt2},
    ElementParsingError, ExtensionOf, FieldElement,
};
use num_traits::{Signed, ToPrimitive};
use thiserror::Error;


/// Largest absolute value accepted as an exponent.
const MAX_EXPONENT: u64 = 1024;

// SCALAR
// ================================================================================================

/// Exact scalars handled by the command-line tool: elements of Q(sqrt(2))(ln(2)).
pub type Scalar = RationalFunction<QuadExtension<Rational, Sqrt2>, Ln2>;

/// Parses a scalar expression.
pub fn parse_scalar(source: &str) -> Result<Scalar, ParseScalarError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, position: 0 };
    let value = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(token) => Err(ParseScalarError::UnexpectedToken(token.to_string())),
    }
}

/// Renders a scalar so that [parse_scalar()] reads back the same value.
pub fn format_scalar(value: &Scalar) -> String {
    value.to_string()
}

// ERRORS
// ================================================================================================

/// Errors which can occur while parsing a scalar expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseScalarError {
    #[error("expression is empty")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error(transparent)]
    InvalidLiteral(#[from] ElementParsingError),
    #[error("unknown function '{0}'; only sqrt and ln are supported")]
    UnknownFunction(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("exponent {0} is not an integer")]
    NonIntegerExponent(String),
    #[error("exponent {0} is too large")]
    ExponentTooLarge(String),
    #[error("sqrt({0}) is not supported; the argument must be r^2 or 2*r^2 for a rational r")]
    UnsupportedSqrt(String),
    #[error("ln({0}) is not supported; the argument must be a power of two")]
    UnsupportedLog(String),
}

// TOKENS
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(String),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) | Self::Ident(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

fn tokenize(source: &str) -> Result<Vec<Token>, ParseScalarError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut literal = String::new();
            while let Some(&c) = chars.peek().filter(|c| c.is_ascii_digit() || **c == '.') {
                literal.push(c);
                chars.next();
            }
            tokens.push(Token::Number(literal));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut name = String::new();
            while let Some(&c) = chars.peek().filter(|c| c.is_ascii_alphanumeric() || **c == '_') {
                name.push(c);
                chars.next();
            }
            tokens.push(Token::Ident(name));
            continue;
        }

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(ParseScalarError::UnexpectedCharacter(c)),
        };
        tokens.push(token);
        chars.next();
    }

    if tokens.is_empty() {
        return Err(ParseScalarError::Empty);
    }
    Ok(tokens)
}

// PARSER
// ================================================================================================

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position += 1;
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseScalarError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(ParseScalarError::UnexpectedToken(token.to_string())),
            None => Err(ParseScalarError::UnexpectedEnd),
        }
    }

    fn parse_expr(&mut self) -> Result<Scalar, ParseScalarError> {
        let mut result = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.next();
                    result += self.parse_term()?;
                },
                Some(Token::Minus) => {
                    self.next();
                    result -= self.parse_term()?;
                },
                _ => return Ok(result),
            }
        }
    }

    fn parse_term(&mut self) -> Result<Scalar, ParseScalarError> {
        let mut result = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    result *= self.parse_unary()?;
                },
                Some(Token::Slash) => {
                    self.next();
                    let divisor = self.parse_unary()?;
                    if divisor.is_zero() {
                        return Err(ParseScalarError::DivisionByZero);
                    }
                    result /= divisor;
                },
                _ => return Ok(result),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Scalar, ParseScalarError> {
        if self.peek() == Some(&Token::Minus) {
            self.next();
            return Ok(-self.parse_unary()?);
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Scalar, ParseScalarError> {
        let base = self.parse_atom()?;
        if self.peek() != Some(&Token::Caret) {
            return Ok(base);
        }
        self.next();

        let exponent = self.parse_unary()?;
        let exponent = as_integer(&exponent)
            .ok_or_else(|| ParseScalarError::NonIntegerExponent(format_scalar(&exponent)))?;
        if exponent.unsigned_abs() > MAX_EXPONENT {
            return Err(ParseScalarError::ExponentTooLarge(exponent.to_string()));
        }

        let power = base.exp(exponent.unsigned_abs() as u32);
        if exponent >= 0 {
            Ok(power)
        } else if power.is_zero() {
            Err(ParseScalarError::DivisionByZero)
        } else {
            Ok(power.inv())
        }
    }

    fn parse_atom(&mut self) -> Result<Scalar, ParseScalarError> {
        match self.next() {
            Some(Token::Number(literal)) => Ok(Scalar::from(Rational::from_str(&literal)?)),
            Some(Token::LParen) => {
                let value = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(value)
            },
            Some(Token::Ident(name)) => {
                self.expect(Token::LParen)?;
                let argument = self.parse_expr()?;
                self.expect(Token::RParen)?;
                match name.as_str() {
                    "sqrt" => sqrt(&argument),
                    "ln" => ln(&argument),
                    _ => Err(ParseScalarError::UnknownFunction(name)),
                }
            },
            Some(token) => Err(ParseScalarError::UnexpectedToken(token.to_string())),
            None => Err(ParseScalarError::UnexpectedEnd),
        }
    }
}

// FUNCTIONS
// ================================================================================================

/// Returns the value as a rational if it lies in Q.
fn as_rational(value: &Scalar) -> Option<Rational> {
    value.as_base().filter(|v| v.is_base()).map(|v| v.base_part().clone())
}

fn as_integer(value: &Scalar) -> Option<i64> {
    as_rational(value).filter(|v| v.is_integer()).and_then(|v| v.numer().to_i64())
}

/// Computes sqrt(r) for rationals r of the form q^2 or 2*q^2.
fn sqrt(argument: &Scalar) -> Result<Scalar, ParseScalarError> {
    let unsupported = || ParseScalarError::UnsupportedSqrt(format_scalar(argument));
    let value = as_rational(argument).ok_or_else(unsupported)?;

    if let Some(root) = value.sqrt() {
        return Ok(Scalar::from(root));
    }
    let root = (value / Rational::from(2u64)).sqrt().ok_or_else(unsupported)?;
    let root = QuadExtension::<Rational, Sqrt2>::root().mul_base(&root);
    Ok(Scalar::from_base(root))
}

/// Computes ln(2^k) = k * ln(2) for integer k.
fn ln(argument: &Scalar) -> Result<Scalar, ParseScalarError> {
    let unsupported = || ParseScalarError::UnsupportedLog(format_scalar(argument));
    let value = as_rational(argument).filter(|v| v.numer().is_positive()).ok_or_else(unsupported)?;

    let exponent = match (log2_exact(value.numer()), log2_exact(value.denom())) {
        (Some(k), Some(0)) => k as i64,
        (Some(0), Some(k)) => -(k as i64),
        _ => return Err(unsupported()),
    };
    Ok(Scalar::indeterminate() * Scalar::from(exponent))
}

/// Returns k if `value` = 2^k.
fn log2_exact(value: &num_bigint::BigInt) -> Option<u64> {
    let zeros = value.trailing_zeros()?;
    (value.is_positive() && value.bits() == zeros + 1).then_some(zeros)
}
