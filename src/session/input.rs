//! Input vocabulary: operators, parentheses and named constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator accepted by the expression buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// Symbol written into the expression.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Power => '^',
        }
    }

    /// Parse an operator symbol, accepting the display glyphs `×`, `÷`, `−`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Power),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    pub fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            _ => None,
        }
    }
}

/// Named constants offered on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Pi,
    E,
    /// Golden ratio
    Phi,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::Phi => (1.0 + 5f64.sqrt()) / 2.0,
        }
    }
}
