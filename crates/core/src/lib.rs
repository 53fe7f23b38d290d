//! Pure domain logic for the taskboard backend.
//!
//! No I/O lives here: the ordering engine, the project color palette,
//! task filtering, and field validation are all plain functions the
//! `db` and `api` crates build on.

pub mod error;
pub mod filter;
pub mod ordering;
pub mod palette;
pub mod types;
pub mod validation;
