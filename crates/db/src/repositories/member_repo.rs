use sqlx::Result;

use bbs_core::types::DbId;

use crate::models::member::{CreateMember, Member};
use crate::DbPool;

const COLUMNS: &str = "id, username, password, nickname, api_key, created_at, updated_at";

pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member and return the stored row.
    ///
    /// The `username` column carries a unique index; a duplicate insert
    /// surfaces as a database error the caller maps to a conflict.
    pub async fn create(pool: &DbPool, member: CreateMember) -> Result<Member> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO members (username, password, nickname, api_key, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );

        sqlx::query_as(&query)
            .bind(&member.username)
            .bind(&member.password)
            .bind(&member.nickname)
            .bind(&member.api_key)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Member>> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = ?");

        sqlx::query_as(&query).bind(id).fetch_optional(pool).await
    }

    pub async fn find_by_username(pool: &DbPool, username: &str) -> Result<Option<Member>> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE username = ?");

        sqlx::query_as(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
