use sqlx::Result;

use bbs_core::types::DbId;

use crate::models::post::{CreatePost, Post};
use crate::DbPool;

const COLUMNS: &str = "id, title, content, created_at, updated_at";

pub struct PostRepo;

impl PostRepo {
    /// Insert a new post and return the stored row.
    pub async fn create(pool: &DbPool, post: CreatePost) -> Result<Post> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO posts (title, content, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );

        sqlx::query_as(&query)
            .bind(&post.title)
            .bind(&post.content)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Post>> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = ?");

        sqlx::query_as(&query).bind(id).fetch_optional(pool).await
    }

    /// All posts, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Post>> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id DESC");

        sqlx::query_as(&query).fetch_all(pool).await
    }

    /// Persist the mutable fields of an already-loaded post.
    pub async fn update(pool: &DbPool, post: &Post) -> Result<()> {
        sqlx::query("UPDATE posts SET title = ?, content = ?, updated_at = ? WHERE id = ?")
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.updated_at)
            .bind(post.id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a post. Comments go with it via `ON DELETE CASCADE`.
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
