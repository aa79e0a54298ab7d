use crate::error::Result;
use crate::store::StormStore;
use crate::storm::{NewStorm, Storm};

/// The two reference storms a freshly provisioned deployment starts with.
pub fn sample_storms() -> Vec<NewStorm> {
    vec![
        NewStorm {
            start_date: "10-10-2018".to_string(),
            end_date: "16-10-2018".to_string(),
            start_location: "Gulf of Mexico".to_string(),
            end_location: "Florida Panhandle".to_string(),
            kind: "Hurricane".to_string(),
            intensity: 5,
        },
        NewStorm {
            start_date: "30-08-2019".to_string(),
            end_date: "06-09-2019".to_string(),
            start_location: "Coast of Africa".to_string(),
            end_location: "North Atlantic".to_string(),
            kind: "Hurricane".to_string(),
            intensity: 5,
        },
    ]
}

/// Inserts [`sample_storms`] into `store`, returning the stored records.
pub async fn seed<S: StormStore + ?Sized>(store: &S) -> Result<Vec<Storm>> {
    let mut stored = Vec::new();
    for storm in sample_storms() {
        stored.push(store.add(storm).await?);
    }
    Ok(stored)
}
