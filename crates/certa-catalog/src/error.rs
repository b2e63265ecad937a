use thiserror::Error;

use crate::validate::CatalogIssue;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog {version} failed validation: {}", format_issues(.issues))]
    Invalid {
        version: String,
        issues: Vec<CatalogIssue>,
    },
}

fn format_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
