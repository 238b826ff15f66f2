//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod checkout;
pub mod load_catalog;
