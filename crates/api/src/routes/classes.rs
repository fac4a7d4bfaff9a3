use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/classes",
            get(handlers::classes::list_classes)
                .post(handlers::classes::create_classes)
                .delete(handlers::classes::clear_classes),
        )
        .route(
            "/api/classes/:id",
            put(handlers::classes::update_class).delete(handlers::classes::delete_class),
        )
}
