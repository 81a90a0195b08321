#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::Coordinate;
use crate::models::problem::Stop;
use serde::{Deserialize, Serialize};

/// Represents an ordered visiting sequence of stops assigned to one bus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// An index of the bus serving this route.
    pub bus_index: usize,
    /// Ids of stops in visiting order.
    pub stop_ids: Vec<String>,
    /// Stop coordinates in visiting order.
    pub coordinates: Vec<Coordinate>,
}

impl Route {
    /// Creates a new instance of `Route` from ordered stops.
    pub fn new(bus_index: usize, stops: &[Stop]) -> Self {
        Self {
            bus_index,
            stop_ids: stops.iter().map(|stop| stop.id.clone()).collect(),
            coordinates: stops.iter().map(|stop| stop.coordinate).collect(),
        }
    }
}
