use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/clinic-sessions",
            post(handlers::session::create_sessions),
        )
        .route(
            "/api/clinic-sessions/:id",
            delete(handlers::session::delete_session),
        )
        .route(
            "/api/clinics/:clinic_id/sessions",
            get(handlers::session::list_clinic_sessions),
        )
}
