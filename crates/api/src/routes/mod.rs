pub mod availability;
pub mod health;
pub mod holiday;
pub mod prescription;
pub mod session;
