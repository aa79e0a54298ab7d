mod error;
mod health;
mod storm;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use storm::{CreateStormRequest, SearchQuery, StormResponse};
