use crate::models::common::{Coordinate, Weight};
use serde::{Deserialize, Serialize};

/// Represents a bus stop to be visited by one of the buses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    /// A unique stop id.
    pub id: String,
    /// A human readable stop name.
    pub name: String,
    /// A stop location.
    pub coordinate: Coordinate,
    /// A relative passenger demand at this stop. Carried through optimization, but not used
    /// as a clustering or ordering weight.
    pub demand: Weight,
}

impl Stop {
    /// Creates a new instance of `Stop`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinate: Coordinate, demand: Weight) -> Self {
        Self { id: id.into(), name: name.into(), coordinate, demand }
    }
}
