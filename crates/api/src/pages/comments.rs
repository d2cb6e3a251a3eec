//! Form-flow handlers for comments.
//!
//! Comment forms live on the post detail page, so successful
//! submissions redirect back to `/posts/{post_id}`.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use bbs_core::types::DbId;
use bbs_core::validation::ValidateRequest;

use crate::requests::CommentBody;
use crate::services::PostService;
use crate::state::AppState;

use super::{views, PageResult};

/// POST /posts/{post_id}/comments/write
pub async fn do_write(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Form(input): Form<CommentBody>,
) -> PageResult<Redirect> {
    input.validate_request()?;

    let comment = PostService::write_comment(&state.pool, post_id, &input.content).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment created via form");

    Ok(Redirect::to(&format!("/posts/{post_id}")))
}

/// GET /posts/{post_id}/comments/{comment_id}/modify
pub async fn modify(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
) -> PageResult<Html<String>> {
    let comment = PostService::find_comment(&state.pool, post_id, comment_id).await?;
    let input = CommentBody {
        content: comment.content.clone(),
    };

    Ok(Html(views::comment_modify_page(
        post_id, comment_id, &input, None,
    )))
}

/// PUT /posts/{post_id}/comments/{comment_id}
pub async fn do_modify(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
    Form(input): Form<CommentBody>,
) -> PageResult<Response> {
    // Load first so a bad id answers 404 even when the body is invalid.
    PostService::find_comment(&state.pool, post_id, comment_id).await?;

    if let Some(report) = input.violation_report() {
        return Ok(Html(views::comment_modify_page(
            post_id,
            comment_id,
            &input,
            Some(&report),
        ))
        .into_response());
    }

    let comment =
        PostService::modify_comment(&state.pool, post_id, comment_id, &input.content).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment modified via form");

    Ok(Redirect::to(&format!("/posts/{post_id}")).into_response())
}

/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn do_delete(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
) -> PageResult<Redirect> {
    let comment = PostService::delete_comment(&state.pool, post_id, comment_id).await?;

    tracing::info!(post_id, comment_id = comment.id, "Comment deleted via form");

    Ok(Redirect::to(&format!("/posts/{post_id}")))
}
