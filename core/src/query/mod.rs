//! Boolean queries: parse, normalize to DNF, evaluate against the index.

pub mod ast;
pub mod dnf;
pub mod eval;
pub mod parser;

pub use ast::Expr;
pub use dnf::{normalize, Conjunction, Dnf};
pub use eval::{evaluate, QueryResult};
pub use parser::parse;

use crate::error::ParseError;
use crate::InvertedIndex;

/// Parse, normalize and evaluate `input`. A parse failure yields no result at all.
pub fn search(input: &str, index: &InvertedIndex) -> Result<QueryResult, ParseError> {
    let expr = parse(input)?;
    let dnf = normalize(&expr);
    let result = evaluate(&dnf, index);
    tracing::debug!(query = input, dnf = %dnf, groups = dnf.groups().len(), hits = result.len(), "evaluated query");
    Ok(result)
}
