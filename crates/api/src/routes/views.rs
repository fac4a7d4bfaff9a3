use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/views/daily", get(handlers::views::daily_view))
        .route("/api/views/week", get(handlers::views::week_view))
}
