use crate::Token;
use std::fmt;

/// Boolean expression over tokens.
///
/// `And` and `Or` always hold at least two children and never hold a child of
/// their own kind; build them through [`Expr::and`] and [`Expr::or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Token),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn literal(token: impl Into<Token>) -> Self { Expr::Literal(token.into()) }

    /// Conjunction of `children`, splicing nested conjunctions into one node.
    /// A single child is returned as is.
    ///
    /// # Panics
    /// If `children` is empty.
    pub fn and(children: Vec<Expr>) -> Self {
        Self::combine(children, true)
    }

    /// Disjunction of `children`, splicing nested disjunctions into one node.
    /// A single child is returned as is.
    ///
    /// # Panics
    /// If `children` is empty.
    pub fn or(children: Vec<Expr>) -> Self {
        Self::combine(children, false)
    }

    fn combine(children: Vec<Expr>, conjunction: bool) -> Self {
        assert!(!children.is_empty(), "boolean node needs at least one child");
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Expr::And(grand) if conjunction => flat.extend(grand),
                Expr::Or(grand) if !conjunction => flat.extend(grand),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            return flat.swap_remove(0);
        }
        if conjunction { Expr::And(flat) } else { Expr::Or(flat) }
    }

    /// Truth value of the expression when each literal is `truth(token)`.
    pub fn holds<F: Fn(&str) -> bool>(&self, truth: &F) -> bool {
        match self {
            Expr::Literal(token) => truth(token),
            Expr::And(children) => children.iter().all(|c| c.holds(truth)),
            Expr::Or(children) => children.iter().any(|c| c.holds(truth)),
        }
    }

    /// Distinct literals in first-seen order.
    pub fn literals(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(token) => {
                if !out.contains(&token.as_str()) {
                    out.push(token);
                }
            }
            Expr::And(children) | Expr::Or(children) => {
                for child in children {
                    child.collect_literals(out);
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(token) => f.write_str(token),
            Expr::And(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 { f.write_str(" & ")?; }
                    match child {
                        Expr::Or(_) => write!(f, "({child})")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
            Expr::Or(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 { f.write_str(" | ")?; }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_flatten_same_operator() {
        let nested = Expr::and(vec![
            Expr::and(vec![Expr::literal("a"), Expr::literal("b")]),
            Expr::literal("c"),
        ]);
        assert_eq!(nested, Expr::And(vec![Expr::literal("a"), Expr::literal("b"), Expr::literal("c")]));

        let mixed = Expr::or(vec![Expr::and(vec![Expr::literal("a"), Expr::literal("b")]), Expr::literal("c")]);
        assert!(matches!(&mixed, Expr::Or(children) if children.len() == 2));
    }

    #[test]
    fn single_child_collapses() {
        assert_eq!(Expr::or(vec![Expr::literal("a")]), Expr::literal("a"));
    }

    #[test]
    fn display_parenthesises_disjunctions_under_and() {
        let expr = Expr::and(vec![
            Expr::or(vec![Expr::literal("a"), Expr::literal("b")]),
            Expr::literal("c"),
        ]);
        assert_eq!(expr.to_string(), "(a | b) & c");
    }

    #[test]
    fn holds_follows_boolean_semantics() {
        let expr = Expr::or(vec![
            Expr::and(vec![Expr::literal("a"), Expr::literal("b")]),
            Expr::literal("c"),
        ]);
        assert!(expr.holds(&|t: &str| t == "c"));
        assert!(expr.holds(&|t: &str| t == "a" || t == "b"));
        assert!(!expr.holds(&|t: &str| t == "a"));
        assert_eq!(expr.literals(), vec!["a", "b", "c"]);
    }
}
