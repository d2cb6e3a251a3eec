//! Handlers for the `/members` resource (join, login).

use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use validator::Validate;

use bbs_core::validation::{not_blank, ValidateRequest, Violation};
use bbs_db::models::member::MemberDto;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::services::MemberService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/v1/members`.
#[derive(Debug, Deserialize, Validate)]
pub struct JoinRequest {
    #[validate(length(
        min = 2,
        max = 30,
        code = "Size",
        message = "size must be between 2 and 30"
    ))]
    pub username: String,
    #[validate(length(
        min = 2,
        max = 30,
        code = "Size",
        message = "size must be between 2 and 30"
    ))]
    pub password: String,
    #[validate(length(
        min = 2,
        max = 30,
        code = "Size",
        message = "size must be between 2 and 30"
    ))]
    pub nickname: String,
}

impl ValidateRequest for JoinRequest {
    fn extra_violations(&self) -> Vec<Violation> {
        [
            not_blank("username", &self.username),
            not_blank("password", &self.password),
            not_blank("nickname", &self.nickname),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Request body for `POST /api/v1/members/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(
        min = 2,
        max = 30,
        code = "Size",
        message = "size must be between 2 and 30"
    ))]
    pub username: String,
    #[validate(length(
        min = 2,
        max = 30,
        code = "Size",
        message = "size must be between 2 and 30"
    ))]
    pub password: String,
}

impl ValidateRequest for LoginRequest {
    fn extra_violations(&self) -> Vec<Violation> {
        [
            not_blank("username", &self.username),
            not_blank("password", &self.password),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Payload for a successful join.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub member_dto: MemberDto,
}

/// Payload for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub member_dto: MemberDto,
    pub api_key: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/members
///
/// Register a new member. A duplicate username fails with `409-1`.
pub async fn join(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<JoinRequest>,
) -> AppResult<impl IntoResponse> {
    let member = MemberService::join(
        &state.pool,
        &input.username,
        &input.password,
        &input.nickname,
    )
    .await?;

    tracing::info!(member_id = member.id, username = %member.username, "Member joined");

    Ok(ApiResponse::new(
        "201-1",
        format!("Sign-up complete. Welcome, {}.", input.nickname),
        JoinResponse {
            member_dto: MemberDto::from(&member),
        },
    ))
}

/// POST /api/v1/members/login
///
/// Check credentials and return the member's API key. An unknown
/// username fails with `401-1`, a wrong password with `401-2`.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let member = MemberService::login(&state.pool, &input.username, &input.password).await?;

    Ok(ApiResponse::new(
        "200-1",
        format!("Welcome, {}.", input.username),
        LoginResponse {
            api_key: member.api_key.clone(),
            member_dto: MemberDto::from(&member),
        },
    ))
}
