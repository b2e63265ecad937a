//! certa-core
//!
//! Pure domain types shared by every Certa crate: audit records, evidence
//! suggestions, uploaded documents, the review error taxonomy, and S3 key
//! conventions. No AWS SDK dependency.

pub mod error;
pub mod models;
pub mod s3_keys;
