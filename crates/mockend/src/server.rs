//! The HTTP surface of a mock backend.
//!
//! | Route                    | Success | Not found | Failure |
//! |--------------------------|---------|-----------|---------|
//! | `POST /api/model`        | 201     |           | 400     |
//! | `GET /api/model`         | 200     |           | 500     |
//! | `GET /api/model/{id}`    | 200     | 404       | 500     |
//! | `PUT /api/model/{id}`    | 200     | 404       | 400     |
//! | `DELETE /api/model/{id}` | 200     | 404       | 500     |

mod builder;
pub use builder::Builder;

mod handle;
pub use handle::ServerHandle;

mod routes;

use crate::Db;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Builds the router serving the five CRUD routes over `db`.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/model", post(routes::create).get(routes::find_all))
        .route(
            "/api/model/{id}",
            get(routes::find_by_id)
                .put(routes::update_by_id)
                .delete(routes::delete_by_id),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
