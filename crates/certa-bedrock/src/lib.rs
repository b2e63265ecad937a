//! certa-bedrock
//!
//! Document understanding via the Bedrock Converse API: builds the review
//! prompt, sends the supporting documents, and parses the model's
//! structured per-criterion findings.

pub mod analyze;
pub mod client;
pub mod documents;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod tokens;
