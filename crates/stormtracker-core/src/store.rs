use crate::error::Result;
use crate::storm::{NewStorm, Storm};
use async_trait::async_trait;

/// Durable storage and retrieval of storm records.
///
/// Records are immutable once created: there is intentionally no update or
/// delete operation.
#[async_trait]
pub trait StormStore: Send + Sync + 'static {
    /// Assigns a new unique id, persists the storm and returns the stored record.
    async fn add(&self, storm: NewStorm) -> Result<Storm>;

    /// Returns every stored storm.
    async fn get_all(&self) -> Result<Vec<Storm>>;

    /// Looks up a storm by id.
    /// Returns `Err(NotFound)` if no record has that id.
    async fn get_by_id(&self, id: i64) -> Result<Storm>;

    /// Returns the storms whose start location equals `location` exactly
    /// (case-sensitive). An empty vector is not an error.
    async fn find_by_start_location(&self, location: &str) -> Result<Vec<Storm>>;

    /// Number of stored storms.
    async fn count(&self) -> Result<u64>;
}
