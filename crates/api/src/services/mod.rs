//! Application services coordinating repositories and domain rules.

pub mod member_service;
pub mod post_service;

pub use member_service::MemberService;
pub use post_service::PostService;
