/// A storm as supplied by a caller, before the store assigns an id.
///
/// Every field is free-form and stored verbatim; dates are not parsed and
/// intensity carries no range check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStorm {
    pub start_date: String,
    pub end_date: String,
    pub start_location: String,
    pub end_location: String,
    pub kind: String,
    pub intensity: i32,
}

/// A stored storm record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storm {
    /// Assigned by the store on creation and never reused.
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub start_location: String,
    pub end_location: String,
    pub kind: String,
    pub intensity: i32,
}

impl Storm {
    /// Attaches a store-assigned id to a new storm.
    pub fn from_new(id: i64, storm: NewStorm) -> Self {
        Self {
            id,
            start_date: storm.start_date,
            end_date: storm.end_date,
            start_location: storm.start_location,
            end_location: storm.end_location,
            kind: storm.kind,
            intensity: storm.intensity,
        }
    }

    /// Returns the caller-supplied fields without the id.
    pub fn to_new(&self) -> NewStorm {
        NewStorm {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            start_location: self.start_location.clone(),
            end_location: self.end_location.clone(),
            kind: self.kind.clone(),
            intensity: self.intensity,
        }
    }
}
