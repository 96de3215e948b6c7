use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, SchedulingState};

pub fn scheduling_routes(state: SchedulingState) -> Router {
    Router::new()
        .route(
            "/doctors/{doctor_id}/available-slots",
            get(handlers::get_available_slots),
        )
        .route(
            "/doctors/{doctor_id}/slot-check",
            post(handlers::check_slot),
        )
        .route(
            "/doctors/{doctor_id}/schedule",
            get(handlers::get_schedule).put(handlers::update_schedule),
        )
        .route(
            "/doctors/{doctor_id}/appointments",
            get(handlers::list_appointments),
        )
        .route("/appointments", post(handlers::book_appointment))
        .with_state(state)
}
