use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Applicant identity as extracted from an application form.
///
/// Both fields are optional: the document-understanding service may find
/// one, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApplicantInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "idNumber")]
    pub id_number: Option<String>,
}

impl ApplicantInfo {
    /// Trimmed name, if present and non-blank.
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Trimmed id number, if present and non-blank.
    pub fn id_number(&self) -> Option<&str> {
        non_blank(self.id_number.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Mask an identity number for logs, keeping only the last four characters.
pub fn mask_id_number(id_number: &str) -> String {
    let chars: Vec<char> = id_number.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}
