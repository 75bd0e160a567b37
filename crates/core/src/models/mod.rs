pub mod appointment;
pub mod holiday;
pub mod prescription;
pub mod response;
pub mod session;
pub mod slot;
