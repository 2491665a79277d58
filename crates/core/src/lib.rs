//! Domain logic for the league backend.
//!
//! This crate has no database or HTTP dependencies. Repositories and handlers
//! load data and pass it in; everything here is pure and unit-tested.

pub mod attribution;
pub mod error;
pub mod match_status;
pub mod report;
pub mod roles;
pub mod types;
