use axum::{routing::get, Router};

use scheduling_cell::handlers::SchedulingState;
use scheduling_cell::router::scheduling_routes;

pub fn create_router(state: SchedulingState) -> Router {
    Router::new()
        .route("/", get(|| async { "Caresched API is running!" }))
        .nest("/scheduling", scheduling_routes(state))
}
