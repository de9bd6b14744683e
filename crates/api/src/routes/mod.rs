pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /Projects                                        list, create
/// /Projects/{id}                                   get, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/Projects", project::router())
}
