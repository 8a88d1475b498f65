pub mod gender;
pub mod stage;
pub mod user;
