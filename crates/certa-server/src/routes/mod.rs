pub mod analysis;
pub mod diseases;
pub mod health;
pub mod records;
pub mod session;
