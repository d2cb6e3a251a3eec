//! Data access layer.
//!
//! Each repository is a zero-sized struct with static async methods that
//! take the pool explicitly. Queries use a `COLUMNS` constant per table so
//! the select list stays in one place.

pub mod comment_repo;
pub mod member_repo;
pub mod post_repo;

pub use comment_repo::CommentRepo;
pub use member_repo::MemberRepo;
pub use post_repo::PostRepo;
