//! Recursive descent parser for token-level boolean expressions.
//!
//! # Grammar
//!
//! ```text
//! expr    := or_expr
//! or_expr := and_expr ('|' and_expr)*
//! and_expr:= atom ('&' atom)*
//! atom    := literal | '(' or_expr ')'
//! literal := [\p{L}\p{Nd}]+
//! ```
//!
//! Whitespace between lexemes is ignored. Chains of the same operator come out
//! as a single `And`/`Or` node.

use super::ast::Expr;
use crate::error::ParseError;
use crate::token::leading_token;

/// Parenthesis nesting limit; keeps the recursion bounded for hostile input.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok<'a> {
    Literal(&'a str),
    And,
    Or,
    Open,
    Close,
    Eof,
}

#[derive(Debug, Clone, Copy)]
struct Lexeme<'a> {
    tok: Tok<'a>,
    position: usize,
}

/// What the parser consumed right before it asked for an operand.
#[derive(Debug, Clone, Copy)]
enum After {
    Start,
    Operator(char, usize),
    Open(usize),
}

fn lex(input: &str) -> Result<Vec<Lexeme<'_>>, ParseError> {
    let mut out = Vec::new();
    let mut position = 0;
    while let Some(c) = input[position..].chars().next() {
        let tok = match c {
            c if c.is_whitespace() => {
                position += c.len_utf8();
                continue;
            }
            '&' => Tok::And,
            '|' => Tok::Or,
            '(' => Tok::Open,
            ')' => Tok::Close,
            _ => match leading_token(&input[position..]) {
                Some(literal) => {
                    out.push(Lexeme { tok: Tok::Literal(literal), position });
                    position += literal.len();
                    continue;
                }
                None => return Err(ParseError::InvalidCharacter { found: c, position }),
            },
        };
        out.push(Lexeme { tok, position });
        position += 1;
    }
    out.push(Lexeme { tok: Tok::Eof, position: input.len() });
    Ok(out)
}

fn describe(tok: Tok<'_>) -> String {
    match tok {
        Tok::Literal(t) => format!("literal '{t}'"),
        Tok::And => "'&'".to_string(),
        Tok::Or => "'|'".to_string(),
        Tok::Open => "'('".to_string(),
        Tok::Close => "')'".to_string(),
        Tok::Eof => "end of input".to_string(),
    }
}

/// Parse a boolean expression into an [`Expr`] tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let lexemes = lex(input)?;
    if lexemes.len() == 1 {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser { lexemes, cursor: 0, depth: 0 };
    let expr = parser.parse_or(After::Start)?;

    let next = parser.peek();
    match next.tok {
        Tok::Eof => Ok(expr),
        Tok::Close => Err(ParseError::UnbalancedParenthesis { position: next.position }),
        other => Err(ParseError::UnexpectedToken { found: describe(other), position: next.position }),
    }
}

struct Parser<'a> {
    lexemes: Vec<Lexeme<'a>>,
    cursor: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Lexeme<'a> {
        // The trailing Eof is never consumed, so the cursor stays in bounds.
        self.lexemes[self.cursor]
    }

    fn bump(&mut self) -> Lexeme<'a> {
        let lexeme = self.peek();
        if lexeme.tok != Tok::Eof {
            self.cursor += 1;
        }
        lexeme
    }

    /// or_expr := and_expr ('|' and_expr)*
    fn parse_or(&mut self, after: After) -> Result<Expr, ParseError> {
        let mut children = vec![self.parse_and(after)?];
        while self.peek().tok == Tok::Or {
            let op = self.bump();
            children.push(self.parse_and(After::Operator('|', op.position))?);
        }
        Ok(Expr::or(children))
    }

    /// and_expr := atom ('&' atom)*
    fn parse_and(&mut self, after: After) -> Result<Expr, ParseError> {
        let mut children = vec![self.parse_atom(after)?];
        while self.peek().tok == Tok::And {
            let op = self.bump();
            children.push(self.parse_atom(After::Operator('&', op.position))?);
        }
        Ok(Expr::and(children))
    }

    /// atom := literal | '(' or_expr ')'
    fn parse_atom(&mut self, after: After) -> Result<Expr, ParseError> {
        let Lexeme { tok, position } = self.peek();
        match tok {
            Tok::Literal(token) => {
                self.bump();
                Ok(Expr::literal(token))
            }
            Tok::Open => {
                self.bump();
                if self.depth >= MAX_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_DEPTH });
                }
                self.depth += 1;
                let inner = self.parse_or(After::Open(position))?;
                self.depth -= 1;

                let next = self.peek();
                match next.tok {
                    Tok::Close => {
                        self.bump();
                        Ok(inner)
                    }
                    Tok::Eof => Err(ParseError::UnbalancedParenthesis { position }),
                    other => Err(ParseError::UnexpectedToken { found: describe(other), position: next.position }),
                }
            }
            Tok::And | Tok::Or | Tok::Close | Tok::Eof => Err(missing_operand(after, tok, position)),
        }
    }
}

fn missing_operand(after: After, found: Tok<'_>, position: usize) -> ParseError {
    match (after, found) {
        (After::Operator(operator, at), _) => ParseError::MissingOperand { operator, position: at },
        (After::Open(at), Tok::Close) => ParseError::EmptyGroup { position: at },
        (After::Open(at), Tok::Eof) => ParseError::UnbalancedParenthesis { position: at },
        (_, Tok::And) => ParseError::MissingOperand { operator: '&', position },
        (_, Tok::Or) => ParseError::MissingOperand { operator: '|', position },
        (_, Tok::Close) => ParseError::UnbalancedParenthesis { position },
        _ => ParseError::Empty,
    }
}
