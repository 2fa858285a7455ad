//! Route definitions for the `/apartments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::apartments;
use crate::state::AppState;

/// Routes mounted at `/apartments`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(apartments::list).post(apartments::create))
        .route(
            "/{id}",
            get(apartments::get_by_id)
                .patch(apartments::update)
                .delete(apartments::delete),
        )
}
