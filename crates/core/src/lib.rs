//! # ClinicDesk Core
//!
//! Domain types and scheduling logic shared by the database and API crates.
//! Nothing in here talks to PostgreSQL or HTTP directly; persistence is
//! reached through the [`store::AvailabilityStore`] trait and notifications
//! through [`notify::Notifier`].

pub mod availability;
pub mod clock;
pub mod errors;
pub mod holiday;
pub mod mock;
pub mod models;
pub mod notify;
pub mod permissions;
pub mod store;
