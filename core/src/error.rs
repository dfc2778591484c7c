use crate::DocId;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected `index` arguments. Nothing reaches the index when one of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a document id is required")]
    MissingId,

    #[error("{0} is not an integer")]
    InvalidId(String),

    #[error("token {0} is not alphanumeric")]
    NonAlphanumericToken(String),

    #[error("at least one token is required")]
    MissingTokens,
}

/// Malformed boolean expression. Positions are byte offsets into the query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("operator '{operator}' at position {position} is missing an operand")]
    MissingOperand { operator: char, position: usize },

    #[error("empty parentheses at position {position}")]
    EmptyGroup { position: usize },

    #[error("invalid character '{found}' at position {position}")]
    InvalidCharacter { found: char, position: usize },

    #[error("unexpected {found} at position {position}, expected an operator")]
    UnexpectedToken { found: String, position: usize },

    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Failure to write a document record.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("cannot prepare document directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("cannot write document {id} to {path}: {source}")]
    Write { id: DocId, path: PathBuf, source: std::io::Error },

    #[error("cannot encode document {id}: {source}")]
    Encode { id: DocId, source: serde_json::Error },
}

/// Every way a command can fail. None of them is fatal to the caller's loop.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid command")]
    InvalidCommand,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Short machine-readable label, used by the HTTP surface.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidCommand => "invalid_command",
            EngineError::Validation(_) => "validation",
            EngineError::Parse(_) => "parse",
            EngineError::Persistence(_) => "persistence",
        }
    }
}
