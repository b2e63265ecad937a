//! Structural checks over a catalog. An issue here is a defect in the
//! catalog data, never a runtime condition of a review.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::disease::Disease;
use crate::rule::{Rule, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogIssue {
    DuplicateDisease { disease_id: u32 },
    DuplicateCriterion { disease_id: u32, criterion_id: String },
    NoCriteria { disease_id: u32 },
    UnknownReference { disease_id: u32, criterion_id: String },
    EmptyClause { disease_id: u32 },
    ThresholdOutOfRange { disease_id: u32, k: usize, n: usize },
    VacuousRule { disease_id: u32 },
    UnreachableRule { disease_id: u32 },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDisease { disease_id } => {
                write!(f, "disease id {disease_id} appears more than once")
            }
            Self::DuplicateCriterion {
                disease_id,
                criterion_id,
            } => write!(f, "disease {disease_id}: criterion '{criterion_id}' is duplicated"),
            Self::NoCriteria { disease_id } => write!(f, "disease {disease_id} has no criteria"),
            Self::UnknownReference {
                disease_id,
                criterion_id,
            } => write!(
                f,
                "disease {disease_id}: rule references unknown criterion '{criterion_id}'"
            ),
            Self::EmptyClause { disease_id } => {
                write!(f, "disease {disease_id}: rule contains an empty clause")
            }
            Self::ThresholdOutOfRange { disease_id, k, n } => {
                write!(f, "disease {disease_id}: threshold {k} of {n} is out of range")
            }
            Self::VacuousRule { disease_id } => {
                write!(f, "disease {disease_id}: rule is satisfied by an empty selection")
            }
            Self::UnreachableRule { disease_id } => write!(
                f,
                "disease {disease_id}: rule is not satisfied even with every criterion selected"
            ),
        }
    }
}

pub fn validate_diseases(diseases: &[Disease]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for disease in diseases {
        if !seen.insert(disease.id) {
            issues.push(CatalogIssue::DuplicateDisease {
                disease_id: disease.id,
            });
        }
        validate_disease(disease, &mut issues);
    }

    issues
}

fn validate_disease(disease: &Disease, issues: &mut Vec<CatalogIssue>) {
    let disease_id = disease.id;

    if disease.criteria.is_empty() {
        issues.push(CatalogIssue::NoCriteria { disease_id });
    }

    let mut ids = HashSet::new();
    for criterion in &disease.criteria {
        if !ids.insert(criterion.id.as_str()) {
            issues.push(CatalogIssue::DuplicateCriterion {
                disease_id,
                criterion_id: criterion.id.clone(),
            });
        }
    }

    for id in disease.rule.referenced_ids() {
        if !ids.contains(id) {
            issues.push(CatalogIssue::UnknownReference {
                disease_id,
                criterion_id: id.to_string(),
            });
        }
    }

    check_shape(disease_id, &disease.rule, issues);

    if disease.rule.evaluate(&Selection::new()) {
        issues.push(CatalogIssue::VacuousRule { disease_id });
    }

    let everything: Selection = disease.criteria.iter().map(|c| c.id.clone()).collect();
    if !disease.rule.evaluate(&everything) {
        issues.push(CatalogIssue::UnreachableRule { disease_id });
    }
}

fn check_shape(disease_id: u32, rule: &Rule, issues: &mut Vec<CatalogIssue>) {
    match rule {
        Rule::All { ids } | Rule::Any { ids } => {
            if ids.is_empty() {
                issues.push(CatalogIssue::EmptyClause { disease_id });
            }
        }
        Rule::AtLeast { k, ids } => {
            if ids.is_empty() {
                issues.push(CatalogIssue::EmptyClause { disease_id });
            } else if *k == 0 || *k > ids.len() {
                issues.push(CatalogIssue::ThresholdOutOfRange {
                    disease_id,
                    k: *k,
                    n: ids.len(),
                });
            }
        }
        Rule::And { rules } | Rule::Or { rules } => {
            if rules.is_empty() {
                issues.push(CatalogIssue::EmptyClause { disease_id });
            }
            for child in rules {
                check_shape(disease_id, child, issues);
            }
        }
    }
}
