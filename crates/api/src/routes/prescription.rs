use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/prescriptions",
            get(handlers::prescription::list_prescriptions)
                .post(handlers::prescription::save_prescription),
        )
        .route(
            "/api/prescriptions/mail",
            post(handlers::prescription::mail_prescription),
        )
        .route(
            "/api/prescriptions/:id",
            get(handlers::prescription::get_prescription)
                .delete(handlers::prescription::delete_prescription),
        )
}
