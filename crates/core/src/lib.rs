//! Shared domain types, error definitions, and request validation rules
//! used by the `bbs-db` and `bbs-api` crates.

pub mod error;
pub mod types;
pub mod validation;
