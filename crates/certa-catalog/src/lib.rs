//! certa-catalog
//!
//! The admission-rule catalog for outpatient chronic and special diseases.
//! Pure data: each disease carries its ordered evidence criteria and an
//! eligibility rule expressed as a boolean expression tree.

pub mod disease;
pub mod error;
pub mod registry;
pub mod rule;
pub mod validate;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use disease::Disease;
use error::CatalogError;
use validate::CatalogIssue;

/// Version of the built-in catalog. Bump whenever a rule or criterion text
/// changes so persisted records can be traced to the rules they were
/// decided under.
pub const CATALOG_VERSION: &str = "jiangxi-2024.1";

/// An ordered, read-only collection of diseases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    diseases: Vec<Disease>,
}

impl Catalog {
    /// Build a catalog from diseases, in the given order.
    pub fn new(version: impl Into<String>, diseases: Vec<Disease>) -> Self {
        Self {
            version: version.into(),
            diseases,
        }
    }

    /// The built-in Jiangxi outpatient chronic/special disease catalog.
    pub fn jiangxi() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> =
            LazyLock::new(|| Catalog::new(CATALOG_VERSION, registry::jiangxi_diseases()));
        &CATALOG
    }

    /// Parse a catalog file and reject it if it has structural issues.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        let issues = catalog.validate();
        if !issues.is_empty() {
            return Err(CatalogError::Invalid {
                version: catalog.version,
                issues,
            });
        }
        Ok(catalog)
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn get(&self, id: u32) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    /// Case-insensitive substring search over disease names, in catalog
    /// order. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Disease> {
        let needle = term.trim().to_lowercase();
        self.diseases
            .iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for disease in &self.diseases {
            if !out.contains(&disease.category.as_str()) {
                out.push(&disease.category);
            }
        }
        out
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate::validate_diseases(&self.diseases)
    }
}
