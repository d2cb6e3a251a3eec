use bbs_core::error::CoreError;
use bbs_db::models::member::{CreateMember, Member};
use bbs_db::repositories::MemberRepo;
use bbs_db::DbPool;

use crate::error::{AppError, AppResult};

pub struct MemberService;

impl MemberService {
    /// Register a new member with a freshly issued API key.
    ///
    /// The username is checked before the insert so a duplicate fails
    /// with `409-1` instead of a raw constraint error.
    pub async fn join(
        pool: &DbPool,
        username: &str,
        password: &str,
        nickname: &str,
    ) -> AppResult<Member> {
        if MemberRepo::find_by_username(pool, username)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("That username is already in use.".to_string()).into());
        }

        let member = MemberRepo::create(
            pool,
            CreateMember {
                username: username.to_string(),
                password: password.to_string(),
                nickname: nickname.to_string(),
                api_key: uuid::Uuid::new_v4().to_string(),
            },
        )
        .await?;

        Ok(member)
    }

    pub async fn find_by_username(pool: &DbPool, username: &str) -> AppResult<Option<Member>> {
        Ok(MemberRepo::find_by_username(pool, username).await?)
    }

    /// Check credentials and return the matching member.
    ///
    /// An unknown username fails with `401-1`, a wrong password with
    /// `401-2`. Passwords are stored and compared as plain text.
    pub async fn login(pool: &DbPool, username: &str, password: &str) -> AppResult<Member> {
        // 1. Look up the member by username.
        let member = MemberRepo::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::Service {
                code: "401-1",
                msg: "No such username exists.".to_string(),
            })?;

        // 2. Compare the stored password.
        if member.password != password {
            return Err(AppError::Service {
                code: "401-2",
                msg: "Password does not match.".to_string(),
            });
        }

        Ok(member)
    }
}
