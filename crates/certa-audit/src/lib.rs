//! certa-audit
//!
//! The review lifecycle: the live audit session, the one-way merge of
//! machine suggestions, the append-only audit trail, and its persistence.

pub mod desk;
pub mod error;
pub mod events;
pub mod merge;
pub mod persistence;
pub mod session;
pub mod trail;
