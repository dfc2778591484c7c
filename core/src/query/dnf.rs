use super::ast::Expr;
use crate::Token;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// One AND-group of a [`Dnf`]: literals in first-seen order, no duplicates.
pub type Conjunction = Vec<Token>;

/// Disjunction of conjunctions of literals. Always holds at least one group,
/// and every group holds at least one literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dnf {
    groups: Vec<Conjunction>,
}

impl Dnf {
    pub fn groups(&self) -> &[Conjunction] { &self.groups }

    /// The lone literal when the form is exactly one group of one literal.
    pub fn single_literal(&self) -> Option<&str> {
        match self.groups.as_slice() {
            [group] if group.len() == 1 => Some(group[0].as_str()),
            _ => None,
        }
    }

    /// True when there is no disjunction left, i.e. a single group.
    pub fn is_conjunction(&self) -> bool { self.groups.len() == 1 }

    /// Truth value when each literal is `truth(token)`.
    pub fn holds<F: Fn(&str) -> bool>(&self, truth: &F) -> bool {
        self.groups.iter().any(|group| group.iter().all(|token| truth(token)))
    }
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 { f.write_str(" | ")?; }
            f.write_str(&group.join(" & "))?;
        }
        Ok(())
    }
}

/// Rewrite `expr` into disjunctive normal form by distributing `&` over `|`.
///
/// The size of the result is the product of the group counts of every
/// conjunction's children, so deeply alternating inputs grow quickly.
pub fn normalize(expr: &Expr) -> Dnf {
    let mut seen: HashSet<BTreeSet<Token>> = HashSet::new();
    let groups = expand(expr)
        .into_iter()
        .filter(|group| seen.insert(group.iter().cloned().collect()))
        .collect();
    Dnf { groups }
}

fn expand(expr: &Expr) -> Vec<Conjunction> {
    match expr {
        Expr::Literal(token) => vec![vec![token.clone()]],
        Expr::Or(children) => children.iter().flat_map(expand).collect(),
        Expr::And(children) => children.iter().fold(vec![Vec::new()], |acc, child| {
            let right = expand(child);
            let mut product = Vec::with_capacity(acc.len() * right.len());
            for left in &acc {
                for group in &right {
                    let mut merged = left.clone();
                    for token in group {
                        if !merged.contains(token) {
                            merged.push(token.clone());
                        }
                    }
                    product.push(merged);
                }
            }
            product
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse;

    fn dnf(input: &str) -> Dnf { normalize(&parse(input).unwrap()) }

    fn groups(input: &str) -> Vec<Conjunction> { dnf(input).groups().to_vec() }

    fn expected(groups: &[&[&str]]) -> Vec<Conjunction> {
        groups.iter().map(|g| g.iter().map(|t| t.to_string()).collect()).collect()
    }

    #[test]
    fn literal_is_one_group_of_one() {
        let form = dnf("cat");
        assert_eq!(form.single_literal(), Some("cat"));
        assert!(form.is_conjunction());
    }

    #[test]
    fn pure_conjunction_is_one_group() {
        let form = dnf("a & b & c");
        assert!(form.is_conjunction());
        assert_eq!(form.single_literal(), None);
        assert_eq!(groups("a & b & c"), expected(&[&["a", "b", "c"]]));
    }

    #[test]
    fn disjunction_concatenates_groups() {
        assert_eq!(groups("a | b & c | d"), expected(&[&["a"], &["b", "c"], &["d"]]));
    }

    #[test]
    fn conjunction_distributes_over_disjunction() {
        assert_eq!(
            groups("(a | b) & (c | d)"),
            expected(&[&["a", "c"], &["a", "d"], &["b", "c"], &["b", "d"]])
        );
        assert_eq!(groups("a & (b | c & (d | e))"), expected(&[&["a", "b"], &["a", "c", "d"], &["a", "c", "e"]]));
    }

    #[test]
    fn duplicate_literals_collapse_within_group() {
        assert_eq!(groups("a & b & a"), expected(&[&["a", "b"]]));
        assert_eq!(dnf("cat & cat").single_literal(), Some("cat"));
    }

    #[test]
    fn equivalent_groups_are_dropped() {
        assert_eq!(groups("a & b | b & a | a"), expected(&[&["a", "b"], &["a"]]));
        assert_eq!(groups("(a | b) & (a | b)"), expected(&[&["a"], &["a", "b"], &["b"]]));
    }

    #[test]
    fn display_lists_groups() {
        assert_eq!(dnf("(a | b) & c").to_string(), "a & c | b & c");
    }
}
