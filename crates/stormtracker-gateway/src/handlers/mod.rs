mod health;
mod storm;

pub use health::health_handler;
pub use storm::{
    create_storm_handler, get_storm_handler, list_storms_handler, search_storms_handler,
};
