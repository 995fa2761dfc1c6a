pub mod events;
pub mod reports;
