pub mod appointment;
pub mod encounter;
pub mod holiday;
pub mod prescription;
pub mod session;
