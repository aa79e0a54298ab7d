//! HTTP surface for the Storm Tracker service.
//!
//! Exposes a [`StormStore`](stormtracker_core::StormStore) as a REST API
//! under `/api/v1/storms`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::{App, STORMS_PATH};
pub use error::AppError;
pub use state::AppState;
