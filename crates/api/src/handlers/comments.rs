//! Handlers for the nested `/posts/{post_id}/comments` resource.
//!
//! Every operation loads the parent post first, so a comment id that
//! belongs to a different post answers 404 rather than leaking across
//! the nesting boundary.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use bbs_core::types::DbId;
use bbs_db::models::comment::CommentDto;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::requests::CommentBody;
use crate::response::ApiResponse;
use crate::services::PostService;
use crate::state::AppState;

/// Payload for a successful comment creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreated {
    pub comment_dto: CommentDto,
}

/// GET /api/v1/posts/{post_id}/comments
///
/// All comments under a post, oldest first, as a bare array.
pub async fn get_items(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentDto>>> {
    let post = PostService::find_aggregate(&state.pool, post_id).await?;
    let items = post.comments().iter().map(CommentDto::from).collect();

    Ok(Json(items))
}

/// GET /api/v1/posts/{post_id}/comments/{comment_id}
pub async fn get_item(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<CommentDto>> {
    let comment = PostService::find_comment(&state.pool, post_id, comment_id).await?;

    Ok(Json(CommentDto::from(&comment)))
}

/// POST /api/v1/posts/{post_id}/comments
pub async fn create_item(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    ValidJson(input): ValidJson<CommentBody>,
) -> AppResult<impl IntoResponse> {
    let comment = PostService::write_comment(&state.pool, post_id, &input.content).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment created");

    Ok(ApiResponse::new(
        "201-1",
        format!("Comment {} has been created.", comment.id),
        CommentCreated {
            comment_dto: CommentDto::from(&comment),
        },
    ))
}

/// PUT /api/v1/posts/{post_id}/comments/{comment_id}
pub async fn modify_item(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
    ValidJson(input): ValidJson<CommentBody>,
) -> AppResult<impl IntoResponse> {
    let comment =
        PostService::modify_comment(&state.pool, post_id, comment_id, &input.content).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment modified");

    Ok(ApiResponse::of(
        "200-1",
        format!("Comment {} has been modified.", comment.id),
    ))
}

/// DELETE /api/v1/posts/{post_id}/comments/{comment_id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let comment = PostService::delete_comment(&state.pool, post_id, comment_id).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment deleted");

    Ok(ApiResponse::of(
        "200-1",
        format!("Comment {} has been deleted.", comment.id),
    ))
}
