use sqlx::Result;

use bbs_core::types::DbId;

use crate::models::comment::{Comment, CreateComment};
use crate::DbPool;

const COLUMNS: &str = "id, post_id, author_id, content, created_at, updated_at";

pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment and return the stored row.
    pub async fn create(pool: &DbPool, comment: CreateComment) -> Result<Comment> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO comments (post_id, author_id, content, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );

        sqlx::query_as(&query)
            .bind(comment.post_id)
            .bind(comment.author_id)
            .bind(&comment.content)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// All comments under a post, oldest first.
    pub async fn list_by_post(pool: &DbPool, post_id: DbId) -> Result<Vec<Comment>> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE post_id = ? ORDER BY id ASC");

        sqlx::query_as(&query).bind(post_id).fetch_all(pool).await
    }

    /// Persist the mutable fields of an already-loaded comment.
    pub async fn update(pool: &DbPool, comment: &Comment) -> Result<()> {
        sqlx::query("UPDATE comments SET content = ?, updated_at = ? WHERE id = ?")
            .bind(&comment.content)
            .bind(comment.updated_at)
            .bind(comment.id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a comment. Returns whether a row was actually removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
