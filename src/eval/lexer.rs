//! Tokenizer for arithmetic expressions.

use super::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

impl TokenKind {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Ident(name) => name.clone(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::Percent => "%".into(),
            Self::Caret => "^".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Character offset of the token's first character
    pub position: usize,
}

/// Split `input` into tokens.
///
/// Numbers accept an optional fractional part and an exponent (`1.5e+16`),
/// so formatted display values can be fed back in. Identifiers are runs of
/// letters, digits and underscores starting with a letter; `π` is an
/// identifier on its own.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        let kind = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            'π' => TokenKind::Ident("π".to_string()),
            c if c.is_ascii_digit() || c == '.' => {
                i = scan_number(&chars, i);
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(text.clone()))?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
                continue;
            }
            c if c.is_alphabetic() => {
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(chars[start..i].iter().collect()),
                    position: start,
                });
                continue;
            }
            other => {
                return Err(EvalError::InvalidCharacter {
                    ch: other,
                    position: start,
                })
            }
        };

        tokens.push(Token {
            kind,
            position: start,
        });
        i += 1;
    }

    Ok(tokens)
}

/// Return the index just past the number starting at `start`.
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    // Exponent only when followed by digits, so `2e` stays `2` then `e`.
    if i < chars.len() && matches!(chars[i], 'e' | 'E') {
        let mut j = i + 1;
        if j < chars.len() && matches!(chars[j], '+' | '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    i
}
