//! Form-flow handlers for posts.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use bbs_core::types::DbId;
use bbs_core::validation::ValidateRequest;

use crate::requests::PostBody;
use crate::services::PostService;
use crate::state::AppState;

use super::{views, PageResult};

/// GET /posts
pub async fn list(State(state): State<AppState>) -> PageResult<Html<String>> {
    let posts = PostService::find_all(&state.pool).await?;

    Ok(Html(views::list_page(&posts)))
}

/// GET /posts/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Html<String>> {
    let post = PostService::find_aggregate(&state.pool, id).await?;

    Ok(Html(views::detail_page(&post)))
}

/// GET /posts/write
pub async fn write() -> Html<String> {
    Html(views::write_page(&PostBody::default(), None))
}

/// POST /posts/write
///
/// On validation failure the form is re-rendered with the violation
/// report and the submitted values.
pub async fn do_write(
    State(state): State<AppState>,
    Form(input): Form<PostBody>,
) -> PageResult<Response> {
    if let Some(report) = input.violation_report() {
        return Ok(Html(views::write_page(&input, Some(&report))).into_response());
    }

    let post = PostService::write(&state.pool, &input.title, &input.content).await?;

    tracing::info!(post_id = post.id, "Post created via form");

    Ok(Redirect::to(&format!("/posts/{}", post.id)).into_response())
}

/// GET /posts/{id}/modify
pub async fn modify(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Html<String>> {
    let post = PostService::find_by_id(&state.pool, id).await?;
    let input = PostBody {
        title: post.title.clone(),
        content: post.content.clone(),
    };

    Ok(Html(views::modify_page(post.id, &input, None)))
}

/// PUT /posts/{id}
pub async fn do_modify(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<PostBody>,
) -> PageResult<Response> {
    // Load first so a bad id answers 404 even when the body is invalid.
    let post = PostService::find_by_id(&state.pool, id).await?;

    if let Some(report) = input.violation_report() {
        return Ok(Html(views::modify_page(post.id, &input, Some(&report))).into_response());
    }

    let post = PostService::modify(&state.pool, id, &input.title, &input.content).await?;

    tracing::info!(post_id = post.id, "Post modified via form");

    Ok(Redirect::to(&format!("/posts/{}", post.id)).into_response())
}

/// DELETE /posts/{id}
pub async fn do_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Redirect> {
    PostService::delete(&state.pool, id).await?;

    tracing::info!(post_id = id, "Post deleted via form");

    Ok(Redirect::to("/posts"))
}
