use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/holidays",
            get(handlers::holiday::list_holidays).post(handlers::holiday::save_holiday),
        )
        .route(
            "/api/holidays/:id",
            get(handlers::holiday::get_holiday).delete(handlers::holiday::delete_holiday),
        )
}
