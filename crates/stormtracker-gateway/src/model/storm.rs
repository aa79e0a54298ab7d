use serde::{Deserialize, Serialize};
use stormtracker_core::{NewStorm, Storm};

/// Body of `POST /api/v1/storms`. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStormRequest {
    pub start_date: String,
    pub end_date: String,
    pub start_location: String,
    pub end_location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub intensity: i32,
}

impl From<CreateStormRequest> for NewStorm {
    fn from(request: CreateStormRequest) -> Self {
        NewStorm {
            start_date: request.start_date,
            end_date: request.end_date,
            start_location: request.start_location,
            end_location: request.end_location,
            kind: request.kind,
            intensity: request.intensity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StormResponse {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub start_location: String,
    pub end_location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub intensity: i32,
}

impl From<Storm> for StormResponse {
    fn from(storm: Storm) -> Self {
        StormResponse {
            id: storm.id,
            start_date: storm.start_date,
            end_date: storm.end_date,
            start_location: storm.start_location,
            end_location: storm.end_location,
            kind: storm.kind,
            intensity: storm.intensity,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub start_location: String,
}
