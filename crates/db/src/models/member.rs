//! Member entity model and DTOs.

use bbs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full member row from the `members` table.
///
/// Contains the stored password -- NEVER serialize this to API responses
/// directly. Use [`MemberDto`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub nickname: String,
    /// Opaque per-member API key, assigned once at join time.
    pub api_key: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new member.
#[derive(Debug)]
pub struct CreateMember {
    pub username: String,
    pub password: String,
    pub nickname: String,
    pub api_key: String,
}

/// Safe member representation for API responses.
///
/// `name` carries the nickname; username and password stay internal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: DbId,
    pub create_date: Timestamp,
    pub modify_date: Timestamp,
    pub name: String,
}

impl From<&Member> for MemberDto {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            create_date: member.created_at,
            modify_date: member.updated_at,
            name: member.nickname.clone(),
        }
    }
}
