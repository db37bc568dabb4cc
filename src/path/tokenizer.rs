//! Tokenizer for path expressions
//!
//! Produces a flat token list with byte positions so the parser can
//! report precise locations. Identifier characters follow Unicode XID
//! with `_` and `-` allowed, which covers the field names that show up
//! in real JSON payloads without forcing the quoted form.

use super::error::{ParseResult, PathParseError};

/// A token of the path-expression grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'input> {
    /// Root anchor ($)
    Dollar,
    /// Field access operator (.)
    Dot,
    /// Left square bracket [
    LeftBracket,
    /// Right square bracket ]
    RightBracket,
    /// Integer literal, possibly negative (e.g. 0, -1)
    Integer(i64),
    /// Quoted string literal with escapes resolved
    String(String),
    /// Bare field name
    Identifier(&'input str),
}

impl Token<'_> {
    /// Short human-readable form used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Dollar => "$".into(),
            Token::Dot => ".".into(),
            Token::LeftBracket => "[".into(),
            Token::RightBracket => "]".into(),
            Token::Integer(value) => value.to_string(),
            Token::String(value) => format!("'{value}'"),
            Token::Identifier(name) => (*name).to_string(),
        }
    }
}

/// A value with source location information
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    /// The value
    pub value: T,
    /// Start position in the input
    pub start: usize,
    /// End position in the input
    pub end: usize,
}

impl<T> Spanned<T> {
    /// Create a new spanned value
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self { value, start, end }
    }
}

/// Check if a character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_start(c) || c == '_'
}

/// Check if a character can continue an identifier
pub fn is_identifier_continue(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_continue(c) || c == '_' || c == '-'
}

/// Tokenize a path expression into spanned tokens
pub fn tokenize(input: &str) -> ParseResult<Vec<Spanned<Token<'_>>>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '$' => {
                chars.next();
                tokens.push(Spanned::new(Token::Dollar, start, start + 1));
            }
            '.' => {
                chars.next();
                tokens.push(Spanned::new(Token::Dot, start, start + 1));
            }
            '[' => {
                chars.next();
                tokens.push(Spanned::new(Token::LeftBracket, start, start + 1));
            }
            ']' => {
                chars.next();
                tokens.push(Spanned::new(Token::RightBracket, start, start + 1));
            }
            '\'' | '"' => {
                tokens.push(scan_string(&mut chars, start, c)?);
            }
            c if c.is_ascii_digit() || c == '-' => {
                tokens.push(scan_integer(input, &mut chars, start)?);
            }
            c if is_identifier_start(c) => {
                tokens.push(scan_identifier(input, &mut chars, start));
            }
            other => {
                return Err(PathParseError::UnexpectedToken {
                    token: other.to_string(),
                    position: start,
                });
            }
        }
    }

    Ok(tokens)
}

fn scan_string<'input>(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'input>>,
    start: usize,
    quote: char,
) -> ParseResult<Spanned<Token<'input>>> {
    chars.next();
    let mut value = String::new();

    while let Some((index, c)) = chars.next() {
        match c {
            c if c == quote => {
                return Ok(Spanned::new(Token::String(value), start, index + 1));
            }
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => return Err(PathParseError::UnclosedString { position: start }),
            },
            other => value.push(other),
        }
    }

    Err(PathParseError::UnclosedString { position: start })
}

fn scan_integer<'input>(
    input: &'input str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'input>>,
    start: usize,
) -> ParseResult<Spanned<Token<'input>>> {
    let mut end = start;
    if let Some(&(_, '-')) = chars.peek() {
        chars.next();
        end += 1;
    }
    while let Some(&(index, c)) = chars.peek() {
        if c.is_ascii_digit() {
            chars.next();
            end = index + 1;
        } else {
            break;
        }
    }

    let text = &input[start..end];
    let value = text
        .parse::<i64>()
        .map_err(|_| PathParseError::InvalidLiteral {
            literal_type: "integer".into(),
            value: text.to_string(),
            position: start,
        })?;
    Ok(Spanned::new(Token::Integer(value), start, end))
}

fn scan_identifier<'input>(
    input: &'input str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'input>>,
    start: usize,
) -> Spanned<Token<'input>> {
    let mut end = start;
    while let Some(&(index, c)) = chars.peek() {
        if is_identifier_continue(c) {
            chars.next();
            end = index + c.len_utf8();
        } else {
            break;
        }
    }
    Spanned::new(Token::Identifier(&input[start..end]), start, end)
}
