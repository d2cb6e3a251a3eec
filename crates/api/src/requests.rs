//! Request bodies shared by the JSON API and the server-rendered forms.
//!
//! Both surfaces accept the same fields under the same rules, so the
//! bodies live here once instead of per handler.

use serde::Deserialize;
use validator::Validate;

use bbs_core::validation::{not_blank, ValidateRequest, Violation};

/// Title and content for writing or modifying a post.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PostBody {
    #[validate(length(
        min = 2,
        max = 10,
        code = "Size",
        message = "size must be between 2 and 10"
    ))]
    pub title: String,
    #[validate(length(
        min = 2,
        max = 100,
        code = "Size",
        message = "size must be between 2 and 100"
    ))]
    pub content: String,
}

impl ValidateRequest for PostBody {
    fn extra_violations(&self) -> Vec<Violation> {
        [
            not_blank("title", &self.title),
            not_blank("content", &self.content),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Content for writing or modifying a comment.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CommentBody {
    #[validate(length(
        min = 2,
        max = 100,
        code = "Size",
        message = "size must be between 2 and 100"
    ))]
    pub content: String,
}

impl ValidateRequest for CommentBody {
    fn extra_violations(&self) -> Vec<Violation> {
        not_blank("content", &self.content).into_iter().collect()
    }
}
