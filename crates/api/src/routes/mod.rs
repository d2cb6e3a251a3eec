pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /members                                 join (POST)
/// /members/login                           login (POST)
///
/// /posts                                   list, create
/// /posts/{id}                              get, update, delete
/// /posts/{post_id}/comments                list, create
/// /posts/{post_id}/comments/{comment_id}   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/members", post(handlers::members::join))
        .route("/members/login", post(handlers::members::login))
        .route(
            "/posts",
            get(handlers::posts::get_items).post(handlers::posts::create_item),
        )
        .route(
            "/posts/{id}",
            get(handlers::posts::get_item)
                .put(handlers::posts::modify_item)
                .delete(handlers::posts::delete_item),
        )
        .route(
            "/posts/{post_id}/comments",
            get(handlers::comments::get_items).post(handlers::comments::create_item),
        )
        .route(
            "/posts/{post_id}/comments/{comment_id}",
            get(handlers::comments::get_item)
                .put(handlers::comments::modify_item)
                .delete(handlers::comments::delete_item),
        )
}
