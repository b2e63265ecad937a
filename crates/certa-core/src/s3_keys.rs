//! S3 key/path conventions.
//!
//! Pure string constants. These define the canonical layout of objects in
//! the Certa bucket.

/// Default key of the persisted audit trail.
pub const AUDIT_TRAIL: &str = "audit/trail.json";
