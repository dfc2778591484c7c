use crate::error::{EngineError, ValidationError};
use crate::query::QueryResult;
use crate::token::is_token;
use crate::{DocId, Token};
use std::fmt;

/// A validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `index <id> <token> [<token>...]`
    Index { id: DocId, tokens: Vec<Token> },
    /// `query <expression>`; the expression is parsed later, by the query pipeline.
    Query { expression: String },
}

impl Command {
    /// Parse and validate one input line. Keywords are case-sensitive and must
    /// be followed by a space.
    pub fn parse(line: &str) -> Result<Command, EngineError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(args) = line.strip_prefix("index ") {
            let mut args = args.split_whitespace();
            let id = validate_id(args.next().ok_or(ValidationError::MissingId)?)?;
            let tokens = validate_tokens(args)?;
            Ok(Command::Index { id, tokens })
        } else if let Some(expression) = line.strip_prefix("query ") {
            Ok(Command::Query { expression: expression.to_string() })
        } else {
            Err(EngineError::InvalidCommand)
        }
    }
}

pub fn validate_id(raw: &str) -> Result<DocId, ValidationError> {
    raw.parse::<DocId>().map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// At least one token, each a run of letters and digits.
pub fn validate_tokens<'a, I>(raw: I) -> Result<Vec<Token>, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = Vec::new();
    for token in raw {
        if !is_token(token) {
            return Err(ValidationError::NonAlphanumericToken(token.to_string()));
        }
        tokens.push(token.to_string());
    }
    if tokens.is_empty() {
        return Err(ValidationError::MissingTokens);
    }
    Ok(tokens)
}

/// Outcome of one command, rendered as a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Indexed(DocId),
    Results(QueryResult),
    IndexFailed(String),
    QueryFailed(String),
    InvalidCommand,
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::IndexFailed(_) | Reply::QueryFailed(_) | Reply::InvalidCommand)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Indexed(id) => write!(f, "index ok {id}"),
            Reply::Results(ids) => {
                f.write_str("query results [")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{id}")?;
                }
                f.write_str("]")
            }
            Reply::IndexFailed(message) => write!(f, "index error {message}"),
            Reply::QueryFailed(message) => write!(f, "query error {message}"),
            Reply::InvalidCommand => f.write_str("invalid command"),
        }
    }
}
