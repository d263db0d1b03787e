pub mod inventory;
pub mod sale;
