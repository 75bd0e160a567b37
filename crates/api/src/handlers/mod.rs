pub mod availability;
pub mod holiday;
pub mod prescription;
pub mod session;
