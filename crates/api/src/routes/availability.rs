use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/slots",
            get(handlers::availability::get_slots),
        )
        .route(
            "/api/doctors/:doctor_id/weekly-availability",
            get(handlers::availability::weekly_availability),
        )
}
