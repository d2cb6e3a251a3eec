//! Handlers for the `/posts` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use bbs_core::types::DbId;
use bbs_db::models::post::PostDto;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::requests::PostBody;
use crate::response::ApiResponse;
use crate::services::PostService;
use crate::state::AppState;

/// Payload for a successful post creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreated {
    pub post_dto: PostDto,
}

/// GET /api/v1/posts
///
/// All posts, newest first, as a bare array.
pub async fn get_items(State(state): State<AppState>) -> AppResult<Json<Vec<PostDto>>> {
    let posts = PostService::find_all(&state.pool).await?;
    let items = posts.iter().map(PostDto::from).collect();

    Ok(Json(items))
}

/// GET /api/v1/posts/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostDto>> {
    let post = PostService::find_by_id(&state.pool, id).await?;

    Ok(Json(PostDto::from(&post)))
}

/// POST /api/v1/posts
pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<PostBody>,
) -> AppResult<impl IntoResponse> {
    let post = PostService::write(&state.pool, &input.title, &input.content).await?;

    tracing::info!(post_id = post.id, "Post created");

    Ok(ApiResponse::new(
        "201-1",
        format!("Post {} has been created.", post.id),
        PostCreated {
            post_dto: PostDto::from(&post),
        },
    ))
}

/// PUT /api/v1/posts/{id}
pub async fn modify_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<PostBody>,
) -> AppResult<impl IntoResponse> {
    let post = PostService::modify(&state.pool, id, &input.title, &input.content).await?;

    tracing::info!(post_id = post.id, "Post modified");

    Ok(ApiResponse::of(
        "200-1",
        format!("Post {} has been modified.", post.id),
    ))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    PostService::delete(&state.pool, id).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(ApiResponse::of(
        "200-1",
        format!("Post {id} has been deleted."),
    ))
}
