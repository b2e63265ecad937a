//! Eligibility rules as boolean expression trees over criterion ids.
//!
//! A rule is data, not code: it can be evaluated, described, explained
//! clause by clause, and serialized alongside the catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A set of satisfied criterion ids.
pub type Selection = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Rule {
    /// Every listed id must be selected.
    All { ids: Vec<String> },
    /// At least one listed id must be selected.
    Any { ids: Vec<String> },
    /// At least `k` of the listed ids must be selected.
    AtLeast { k: usize, ids: Vec<String> },
    /// Every child rule must hold.
    And { rules: Vec<Rule> },
    /// At least one child rule must hold.
    Or { rules: Vec<Rule> },
}

impl Rule {
    pub fn all(ids: &[&str]) -> Self {
        Self::All { ids: owned(ids) }
    }

    pub fn any(ids: &[&str]) -> Self {
        Self::Any { ids: owned(ids) }
    }

    pub fn at_least(k: usize, ids: &[&str]) -> Self {
        Self::AtLeast { k, ids: owned(ids) }
    }

    pub fn and(rules: Vec<Rule>) -> Self {
        Self::And { rules }
    }

    pub fn or(rules: Vec<Rule>) -> Self {
        Self::Or { rules }
    }

    /// Evaluate the rule against a selection. Ids the rule does not mention
    /// have no effect.
    pub fn evaluate(&self, selected: &Selection) -> bool {
        match self {
            Self::All { ids } => ids.iter().all(|id| selected.contains(id)),
            Self::Any { ids } => ids.iter().any(|id| selected.contains(id)),
            Self::AtLeast { k, ids } => count_selected(ids, selected) >= *k,
            Self::And { rules } => rules.iter().all(|r| r.evaluate(selected)),
            Self::Or { rules } => rules.iter().any(|r| r.evaluate(selected)),
        }
    }

    /// Every criterion id mentioned anywhere in the tree, deduplicated, in
    /// first-mention order.
    pub fn referenced_ids(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::All { ids } | Self::Any { ids } | Self::AtLeast { ids, .. } => {
                for id in ids {
                    if !out.contains(&id.as_str()) {
                        out.push(id.as_str());
                    }
                }
            }
            Self::And { rules } | Self::Or { rules } => {
                for rule in rules {
                    rule.collect_ids(out);
                }
            }
        }
    }

    /// Human-readable description derived from the tree.
    ///
    /// `(1) + (2)` is a conjunction, `any of [(3)(4)]` a disjunction over
    /// ids, `at least 2 of [...]` a threshold, and alternatives are joined
    /// with `or`, each bracketed when it has more than one term.
    pub fn describe(&self) -> String {
        match self {
            Self::All { ids } => ids.iter().map(|id| term(id)).collect::<Vec<_>>().join(" + "),
            Self::Any { ids } => describe_choice(1, ids),
            Self::AtLeast { k, ids } => describe_choice(*k, ids),
            Self::And { rules } => rules
                .iter()
                .map(|r| match r {
                    Self::Or { .. } => format!("[{}]", r.describe()),
                    _ => r.describe(),
                })
                .collect::<Vec<_>>()
                .join(" + "),
            Self::Or { rules } => rules
                .iter()
                .map(|r| {
                    if r.is_compound() {
                        format!("[{}]", r.describe())
                    } else {
                        r.describe()
                    }
                })
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }

    /// True when the description of this node contains a top-level `+` or
    /// `or` that would be ambiguous inside an alternative.
    fn is_compound(&self) -> bool {
        match self {
            Self::All { ids } => ids.len() > 1,
            Self::And { rules } | Self::Or { rules } => rules.len() > 1,
            Self::AtLeast { k, ids } => *k == ids.len() && ids.len() > 1,
            Self::Any { .. } => false,
        }
    }

    /// Break the rule into its top-level conjuncts and report each one
    /// against the selection.
    pub fn explain(&self, selected: &Selection) -> Explanation {
        let mut clauses = Vec::new();
        self.push_clauses(selected, &mut clauses);
        Explanation {
            satisfied: self.evaluate(selected),
            clauses,
        }
    }

    fn push_clauses(&self, selected: &Selection, out: &mut Vec<Clause>) {
        match self {
            Self::And { rules } => {
                for rule in rules {
                    rule.push_clauses(selected, out);
                }
            }
            Self::All { ids } => {
                for id in ids {
                    let satisfied = selected.contains(id);
                    out.push(Clause {
                        description: term(id),
                        satisfied,
                        missing: if satisfied { Vec::new() } else { vec![id.clone()] },
                    });
                }
            }
            other => out.push(Clause {
                description: other.describe(),
                satisfied: other.evaluate(selected),
                missing: other
                    .referenced_ids()
                    .into_iter()
                    .filter(|id| !selected.contains(*id))
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }
}

/// Clause-by-clause view of a rule against a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Explanation {
    pub satisfied: bool,
    pub clauses: Vec<Clause>,
}

impl Explanation {
    pub fn unmet(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|c| !c.satisfied)
    }
}

/// One top-level conjunct of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clause {
    pub description: String,
    pub satisfied: bool,
    /// Ids in this clause that are not selected. For a choice clause any
    /// of them may close the gap.
    pub missing: Vec<String>,
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn count_selected(ids: &[String], selected: &Selection) -> usize {
    ids.iter().filter(|id| selected.contains(*id)).count()
}

fn term(id: &str) -> String {
    format!("({id})")
}

fn describe_choice(k: usize, ids: &[String]) -> String {
    if ids.len() == 1 {
        return term(&ids[0]);
    }
    let terms: String = ids.iter().map(|id| term(id)).collect();
    if k == ids.len() {
        ids.iter().map(|id| term(id)).collect::<Vec<_>>().join(" + ")
    } else if k <= 1 {
        format!("any of [{terms}]")
    } else {
        format!("at least {k} of [{terms}]")
    }
}
