//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - A `Serialize` DTO carrying the external wire shape

pub mod comment;
pub mod member;
pub mod post;
