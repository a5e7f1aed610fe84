//! Recursive-descent evaluator.
//!
//! Precedence, lowest to highest:
//!
//! | level       | operators     | associativity  |
//! |-------------|---------------|----------------|
//! | additive    | `+` `-`       | left           |
//! | multiplicative | `*` `/` `%` | left          |
//! | unary       | prefix `-` `+`| right          |
//! | power       | `^`           | left           |
//!
//! so `-2^2` is `-4` and `2^3^2` is `64`. The exponent of `^` may carry
//! its own sign (`2^-1`).

use super::error::EvalError;
use super::lexer::{Token, TokenKind};
use std::f64::consts::{E, PI};

/// Deepest nesting of groups and prefix signs the parser will follow.
pub const MAX_DEPTH: usize = 256;

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the whole token stream as one expression.
    pub(crate) fn evaluate(mut self) -> Result<f64, EvalError> {
        if self.tokens.is_empty() {
            return Err(EvalError::UnexpectedEnd);
        }
        let value = self.expression()?;
        match self.peek() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::RParen => {
                Err(EvalError::UnbalancedParentheses)
            }
            Some(token) => Err(unexpected(token)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if &token.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<f64, EvalError>,
    ) -> Result<f64, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            if self.eat(&TokenKind::Plus) {
                value += self.term()?;
            } else if self.eat(&TokenKind::Minus) {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            if self.eat(&TokenKind::Star) {
                value *= self.unary()?;
            } else if self.eat(&TokenKind::Slash) {
                value /= self.unary()?;
            } else if self.eat(&TokenKind::Percent) {
                value %= self.unary()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if self.eat(&TokenKind::Minus) {
            return Ok(-self.nested(Self::unary)?);
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::unary);
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let mut value = self.primary()?;
        while self.eat(&TokenKind::Caret) {
            value = value.powf(self.exponent()?);
        }
        Ok(value)
    }

    fn exponent(&mut self) -> Result<f64, EvalError> {
        if self.eat(&TokenKind::Minus) {
            return Ok(-self.nested(Self::exponent)?);
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::exponent);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let token = self.next().ok_or(EvalError::UnexpectedEnd)?;
        match &token.kind {
            TokenKind::Number(value) => Ok(*value),
            TokenKind::LParen => self.group(),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let argument = self.group()?;
                    apply_function(name, argument)
                } else {
                    constant(name)
                }
            }
            _ => Err(unexpected(token)),
        }
    }

    /// Parse the inside of a parenthesized group; the `(` is already consumed.
    fn group(&mut self) -> Result<f64, EvalError> {
        let value = self.nested(Self::expression)?;
        if self.eat(&TokenKind::RParen) {
            Ok(value)
        } else {
            match self.peek() {
                None => Err(EvalError::UnbalancedParentheses),
                Some(token) => Err(unexpected(token)),
            }
        }
    }
}

fn unexpected(token: &Token) -> EvalError {
    EvalError::UnexpectedToken {
        found: token.kind.describe(),
        position: token.position,
    }
}

fn constant(name: &str) -> Result<f64, EvalError> {
    match name {
        "pi" | "π" => Ok(PI),
        "e" => Ok(E),
        _ => Err(EvalError::UnknownIdentifier(name.to_string())),
    }
}

/// Apply a named function. Trigonometric functions take radians.
fn apply_function(name: &str, x: f64) -> Result<f64, EvalError> {
    let value = match name {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "asin" => x.asin(),
        "acos" => x.acos(),
        "atan" => x.atan(),
        "sinh" => x.sinh(),
        "cosh" => x.cosh(),
        "tanh" => x.tanh(),
        "asinh" => x.asinh(),
        "acosh" => x.acosh(),
        "atanh" => x.atanh(),
        "sqrt" => x.sqrt(),
        "cbrt" => x.cbrt(),
        "abs" => x.abs(),
        "exp" => x.exp(),
        "ln" => x.ln(),
        "log" => x.log10(),
        _ => return Err(EvalError::UnknownIdentifier(name.to_string())),
    };
    Ok(value)
}
