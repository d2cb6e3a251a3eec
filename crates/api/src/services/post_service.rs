use bbs_core::error::CoreError;
use bbs_core::types::DbId;
use bbs_db::models::comment::{Comment, CreateComment};
use bbs_db::models::post::{CreatePost, Post};
use bbs_db::repositories::{CommentRepo, PostRepo};
use bbs_db::DbPool;

use crate::error::AppResult;

pub struct PostService;

impl PostService {
    pub async fn write(pool: &DbPool, title: &str, content: &str) -> AppResult<Post> {
        let post = PostRepo::create(
            pool,
            CreatePost {
                title: title.to_string(),
                content: content.to_string(),
            },
        )
        .await?;

        Ok(post)
    }

    /// All posts, newest first.
    pub async fn find_all(pool: &DbPool) -> AppResult<Vec<Post>> {
        Ok(PostRepo::list(pool).await?)
    }

    /// Load a post without its comments.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> AppResult<Post> {
        PostRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Post", id }.into())
    }

    /// Load a post together with its comment collection.
    pub async fn find_aggregate(pool: &DbPool, id: DbId) -> AppResult<Post> {
        let mut post = Self::find_by_id(pool, id).await?;
        let comments = CommentRepo::list_by_post(pool, id).await?;
        post.attach_comments(comments);

        Ok(post)
    }

    pub async fn modify(pool: &DbPool, id: DbId, title: &str, content: &str) -> AppResult<Post> {
        let mut post = Self::find_by_id(pool, id).await?;
        post.update(title, content, chrono::Utc::now());
        PostRepo::update(pool, &post).await?;

        Ok(post)
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        if !PostRepo::delete(pool, id).await? {
            return Err(CoreError::NotFound { entity: "Post", id }.into());
        }

        Ok(())
    }

    // --- Comment operations, always reached through the parent post ---
    //
    // Loading the aggregate first means a comment id that exists under a
    // different post is treated as not found, not silently modified.

    pub async fn write_comment(pool: &DbPool, post_id: DbId, content: &str) -> AppResult<Comment> {
        let mut post = Self::find_aggregate(pool, post_id).await?;
        let comment = CommentRepo::create(
            pool,
            CreateComment {
                post_id: post.id,
                author_id: None,
                content: content.to_string(),
            },
        )
        .await?;

        Ok(post.add_comment(comment).clone())
    }

    pub async fn find_comment(pool: &DbPool, post_id: DbId, comment_id: DbId) -> AppResult<Comment> {
        let post = Self::find_aggregate(pool, post_id).await?;

        post.find_comment_by_id(comment_id)
            .cloned()
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Comment",
                    id: comment_id,
                }
                .into()
            })
    }

    pub async fn modify_comment(
        pool: &DbPool,
        post_id: DbId,
        comment_id: DbId,
        content: &str,
    ) -> AppResult<Comment> {
        let mut post = Self::find_aggregate(pool, post_id).await?;
        let comment = post
            .update_comment(comment_id, content, chrono::Utc::now())?
            .clone();
        CommentRepo::update(pool, &comment).await?;

        Ok(comment)
    }

    pub async fn delete_comment(
        pool: &DbPool,
        post_id: DbId,
        comment_id: DbId,
    ) -> AppResult<Comment> {
        let mut post = Self::find_aggregate(pool, post_id).await?;
        let comment = post.delete_comment(comment_id)?;
        CommentRepo::delete(pool, comment.id).await?;

        Ok(comment)
    }
}
