use async_trait::async_trait;
use dashmap::DashMap;
use stormtracker_core::{IdSequence, NewStorm, Result, StoreError, Storm, StormStore};
use tracing::trace;

/// In-memory implementation of [`StormStore`] using DashMap.
///
/// Ids come from an [`IdSequence`], so assignment needs no lock beyond the
/// atomic counter. Listing results are sorted by id.
#[derive(Debug, Default)]
pub struct InMemoryStormStore {
    storage: DashMap<i64, Storm>,
    sequence: IdSequence,
}

impl InMemoryStormStore {
    /// Creates an empty store whose first id is 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose first id is `offset`.
    /// Fails if `offset` is negative.
    pub fn with_offset(offset: i64) -> Result<Self> {
        Ok(Self {
            storage: DashMap::new(),
            sequence: IdSequence::starting_at(offset)?,
        })
    }

    fn collect_sorted(&self, filter: impl Fn(&Storm) -> bool) -> Vec<Storm> {
        let mut storms: Vec<Storm> = self
            .storage
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        storms.sort_by_key(|storm| storm.id);
        storms
    }
}

#[async_trait]
impl StormStore for InMemoryStormStore {
    async fn add(&self, storm: NewStorm) -> Result<Storm> {
        let id = self.sequence.next_id()?;
        let stored = Storm::from_new(id, storm);
        self.storage.insert(id, stored.clone());
        trace!(id, "stored storm");
        Ok(stored)
    }

    async fn get_all(&self) -> Result<Vec<Storm>> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn get_by_id(&self, id: i64) -> Result<Storm> {
        self.storage
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn find_by_start_location(&self, location: &str) -> Result<Vec<Storm>> {
        Ok(self.collect_sorted(|storm| storm.start_location == location))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.len() as u64)
    }
}
