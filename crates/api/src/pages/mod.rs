//! Server-rendered HTML pages for posts and comments.
//!
//! These routes mirror the JSON operations through plain HTML forms.
//! Failures render an HTML error page instead of the JSON envelope,
//! using the same result-code mapping.

use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::Router;

use crate::error::AppError;
use crate::response::status_from_result_code;
use crate::state::AppState;

pub mod comments;
pub mod posts;
pub mod views;

/// Error wrapper that renders failures as HTML pages.
#[derive(Debug)]
pub struct PageError(AppError);

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl<E> From<E> for PageError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (code, msg) = self.0.result();
        let status = status_from_result_code(code);

        (status, Html(views::error_page(code, &msg))).into_response()
    }
}

/// Routes for the form flow, mounted at the root.
///
/// Browsers only submit GET and POST, so the modify and delete forms
/// replay their submissions as PUT and DELETE through the `send` helper
/// in the page layout.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list))
        .route("/posts/write", get(posts::write).post(posts::do_write))
        .route(
            "/posts/{id}",
            get(posts::detail)
                .put(posts::do_modify)
                .delete(posts::do_delete),
        )
        .route("/posts/{id}/modify", get(posts::modify))
        .route("/posts/{post_id}/comments/write", post(comments::do_write))
        .route(
            "/posts/{post_id}/comments/{comment_id}",
            put(comments::do_modify).delete(comments::do_delete),
        )
        .route(
            "/posts/{post_id}/comments/{comment_id}/modify",
            get(comments::modify),
        )
}
