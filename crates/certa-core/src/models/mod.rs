pub mod analysis;
pub mod applicant;
pub mod document;
pub mod record;
pub mod suggestion;
