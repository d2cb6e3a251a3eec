//! Post aggregate: the post entity plus its owned comment collection.

use bbs_core::error::CoreError;
use bbs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::comment::Comment;

/// Full post row from the `posts` table, together with its comments.
///
/// The comment collection is owned by the post and mutated only through
/// the methods below; deleting a post removes its comments with it. The
/// collection is not part of the row itself -- load it with
/// [`attach_comments`] after fetching the comment rows.
///
/// [`attach_comments`]: Post::attach_comments
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(skip)]
    comments: Vec<Comment>,
}

impl Post {
    /// Replace the title and content and refresh `updated_at`.
    pub fn update(&mut self, title: &str, content: &str, now: Timestamp) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.updated_at = now;
    }

    /// Hydrate the comment collection after loading the rows.
    pub fn attach_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    /// The owned comments, in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a stored comment belonging to this post and return it.
    pub fn add_comment(&mut self, comment: Comment) -> &Comment {
        let index = self.comments.len();
        self.comments.push(comment);
        &self.comments[index]
    }

    /// Find an owned comment by id.
    pub fn find_comment_by_id(&self, comment_id: DbId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Update an owned comment in place and return it.
    ///
    /// Fails with [`CoreError::NotFound`] when no owned comment has the
    /// given id -- a valid comment id under a different post is a miss.
    pub fn update_comment(
        &mut self,
        comment_id: DbId,
        content: &str,
        now: Timestamp,
    ) -> Result<&Comment, CoreError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id: comment_id,
            })?;

        comment.update(content, now);
        Ok(comment)
    }

    /// Remove an owned comment and return it.
    ///
    /// Fails with [`CoreError::NotFound`] when no owned comment has the
    /// given id.
    pub fn delete_comment(&mut self, comment_id: DbId) -> Result<Comment, CoreError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id: comment_id,
            })?;

        Ok(self.comments.remove(index))
    }
}

/// DTO for creating a new post.
#[derive(Debug)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

/// Post representation for API responses. Comments are served separately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: DbId,
    pub create_date: Timestamp,
    pub modify_date: Timestamp,
    pub title: String,
    pub content: String,
}

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            create_date: post.created_at,
            modify_date: post.updated_at,
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use super::*;

    fn comment(id: DbId, content: &str) -> Comment {
        let now = Utc::now();
        Comment {
            id,
            post_id: 1,
            author_id: None,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn post() -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "first".to_string(),
            content: "hello".to_string(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    #[test]
    fn add_comment_appends_in_order() {
        let mut post = post();

        post.add_comment(comment(10, "one"));
        post.add_comment(comment(11, "two"));
        let added = post.add_comment(comment(12, "three"));

        assert_eq!(added.id, 12);
        let ids: Vec<DbId> = post.comments().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn find_comment_by_id_returns_first_match() {
        let mut post = post();
        post.attach_comments(vec![comment(10, "one"), comment(11, "two")]);

        assert_eq!(post.find_comment_by_id(11).map(|c| c.content.as_str()), Some("two"));
        assert!(post.find_comment_by_id(99).is_none());
    }

    #[test]
    fn update_comment_mutates_in_place() {
        let mut post = post();
        post.attach_comments(vec![comment(10, "before")]);
        let later = Utc::now() + Duration::seconds(5);

        let updated = post.update_comment(10, "after", later).unwrap();

        assert_eq!(updated.content, "after");
        assert_eq!(updated.updated_at, later);
        assert_eq!(post.comments()[0].content, "after");
    }

    #[test]
    fn update_comment_miss_is_a_typed_not_found() {
        let mut post = post();
        post.attach_comments(vec![comment(10, "one")]);

        let err = post.update_comment(99, "x", Utc::now()).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Comment", id: 99 });
    }

    #[test]
    fn delete_comment_removes_and_returns_it() {
        let mut post = post();
        post.attach_comments(vec![comment(10, "one"), comment(11, "two")]);

        let removed = post.delete_comment(10).unwrap();

        assert_eq!(removed.id, 10);
        let ids: Vec<DbId> = post.comments().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![11]);
    }

    #[test]
    fn delete_comment_miss_is_a_typed_not_found() {
        let mut post = post();

        let err = post.delete_comment(99).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Comment", id: 99 });
    }

    #[test]
    fn update_refreshes_fields_and_timestamp() {
        let mut post = post();
        let later = Utc::now() + Duration::seconds(5);

        post.update("second", "changed", later);

        assert_eq!(post.title, "second");
        assert_eq!(post.content, "changed");
        assert_eq!(post.updated_at, later);
    }
}
