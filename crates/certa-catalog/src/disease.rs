use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rule::{Explanation, Rule, Selection};

/// A single piece of required evidence. Ids are only unique within their
/// disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub description: String,
}

/// One admission rule of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disease {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub criteria: Vec<Criterion>,
    /// Authoritative eligibility predicate.
    pub rule: Rule,
    /// Published display text of the rule. Not authoritative.
    pub logic_description: String,
}

impl Disease {
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn has_criterion(&self, id: &str) -> bool {
        self.criterion(id).is_some()
    }

    pub fn criterion_ids(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|c| c.id.as_str())
    }

    /// Whether the selection satisfies this disease's rule. Ids that are
    /// not criteria of this disease are ignored.
    pub fn evaluate(&self, selected: &Selection) -> bool {
        self.rule.evaluate(&self.own_selection(selected))
    }

    pub fn explain(&self, selected: &Selection) -> Explanation {
        self.rule.explain(&self.own_selection(selected))
    }

    /// Rule description derived from the expression tree.
    pub fn derived_logic(&self) -> String {
        self.rule.describe()
    }

    /// The selected ids that belong to this disease, in catalog order.
    pub fn ordered_selection(&self, selected: &Selection) -> Vec<String> {
        self.criteria
            .iter()
            .filter(|c| selected.contains(&c.id))
            .map(|c| c.id.clone())
            .collect()
    }

    fn own_selection(&self, selected: &Selection) -> Selection {
        selected
            .iter()
            .filter(|id| self.has_criterion(id))
            .cloned()
            .collect()
    }
}
