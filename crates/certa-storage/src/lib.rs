//! certa-storage
//!
//! S3 operations for durable review state. Thin wrapper around the AWS S3
//! SDK.

pub mod client;
pub mod error;
pub mod state;
