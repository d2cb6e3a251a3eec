//! JSON API request handlers, one module per resource.

pub mod comments;
pub mod members;
pub mod posts;
