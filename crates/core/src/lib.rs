//! Domain building blocks shared by the database and HTTP crates.
//!
//! Nothing in here performs I/O: the error taxonomy and the input checks
//! run before any store access.

pub mod error;
pub mod validation;
