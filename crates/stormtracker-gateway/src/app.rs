use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_storm_handler, get_storm_handler, health_handler, list_storms_handler,
    search_storms_handler,
};
use crate::state::AppState;

/// Base path of the storm collection.
pub const STORMS_PATH: &str = "/api/v1/storms";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                STORMS_PATH,
                get(list_storms_handler).post(create_storm_handler),
            )
            // Static segment wins over the `{id}` capture.
            .route("/api/v1/storms/search", get(search_storms_handler))
            .route("/api/v1/storms/{id}", get(get_storm_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
