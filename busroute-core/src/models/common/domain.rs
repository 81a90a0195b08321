#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::algorithms::geometry::haversine_distance;
use crate::models::common::Distance;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Represents a geographic coordinate as latitude/longitude degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// A latitude in [-90, 90] degrees.
    #[serde(rename = "lat")]
    pub latitude: Float,
    /// A longitude in [-180, 180] degrees.
    #[serde(rename = "lng")]
    pub longitude: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(latitude: Float, longitude: Float) -> Self {
        Self { latitude, longitude }
    }

    /// Returns a great-circle distance to the other coordinate, in kilometers.
    pub fn distance_to(&self, other: &Self) -> Distance {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}
