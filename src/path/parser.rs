//! Parser for path expressions
//!
//! Grammar:
//!
//! ```text
//! expr    := '$'? step*
//! step    := '.' identifier
//!          | '[' integer ']'
//!          | '[' quoted-string ']'
//! ```
//!
//! An expression with no steps (a bare `$`) selects the root document.

use super::ast::{PathExpr, Step};
use super::error::{ParseResult, PathParseError};
use super::tokenizer::{Spanned, Token, tokenize};

/// Parse a path expression string into an AST
pub fn parse(input: &str) -> ParseResult<PathExpr> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse_expr()
}

/// Token stream cursor over the tokenized input
struct Parser<'input> {
    tokens: Vec<Spanned<Token<'input>>>,
    position: usize,
}

impl<'input> Parser<'input> {
    fn new(tokens: Vec<Spanned<Token<'input>>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&Spanned<Token<'input>>> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<Spanned<Token<'input>>> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn is_eof(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn parse_expr(&mut self) -> ParseResult<PathExpr> {
        if self.is_eof() {
            return Err(PathParseError::UnexpectedEof);
        }

        if matches!(self.peek().map(|t| &t.value), Some(Token::Dollar)) {
            self.next();
        }

        let mut steps = Vec::new();
        while let Some(token) = self.next() {
            match token.value {
                Token::Dot => steps.push(self.parse_field(token.end)?),
                Token::LeftBracket => steps.push(self.parse_bracket(token.end)?),
                other => {
                    return Err(PathParseError::UnexpectedToken {
                        token: other.describe(),
                        position: token.start,
                    });
                }
            }
        }

        Ok(PathExpr { steps })
    }

    fn parse_field(&mut self, after_dot: usize) -> ParseResult<Step> {
        match self.next() {
            Some(Spanned {
                value: Token::Identifier(name),
                ..
            }) => Ok(Step::Field(name.to_string())),
            Some(token) => Err(PathParseError::UnexpectedToken {
                token: token.value.describe(),
                position: token.start,
            }),
            None => Err(PathParseError::ExpectedToken {
                expected: "field name".into(),
                position: after_dot,
            }),
        }
    }

    fn parse_bracket(&mut self, after_bracket: usize) -> ParseResult<Step> {
        let step = match self.next() {
            Some(Spanned {
                value: Token::Integer(index),
                ..
            }) => Step::Index(index),
            Some(Spanned {
                value: Token::String(name),
                ..
            }) => Step::Field(name),
            Some(token) => {
                return Err(PathParseError::UnexpectedToken {
                    token: token.value.describe(),
                    position: token.start,
                });
            }
            None => {
                return Err(PathParseError::ExpectedToken {
                    expected: "index or quoted field name".into(),
                    position: after_bracket,
                });
            }
        };

        match self.next() {
            Some(Spanned {
                value: Token::RightBracket,
                ..
            }) => Ok(step),
            Some(token) => Err(PathParseError::ExpectedToken {
                expected: "']'".into(),
                position: token.start,
            }),
            None => Err(PathParseError::UnexpectedEof),
        }
    }
}
