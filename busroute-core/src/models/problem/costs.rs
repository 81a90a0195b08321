#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Coordinate, Cost};
use crate::models::problem::RoadGraph;
use std::sync::Arc;

/// Provides the way to estimate a travel cost between two locations.
pub trait TransportCost {
    /// Returns an estimated travel cost between two locations. The estimate is always finite,
    /// so downstream route construction never has to deal with a missing cost.
    fn estimate(&self, from: &Coordinate, to: &Coordinate) -> Cost;
}

/// Estimates a travel cost as the great-circle distance between locations, in kilometers.
#[derive(Default)]
pub struct HaversineTransportCost;

impl TransportCost for HaversineTransportCost {
    fn estimate(&self, from: &Coordinate, to: &Coordinate) -> Cost {
        from.distance_to(to)
    }
}

/// Estimates a travel cost as the cheapest road path between locations snapped to the road
/// graph. Falls back to the great-circle distance when snapping fails or no path exists.
pub struct NetworkTransportCost {
    graph: Arc<RoadGraph>,
}

impl NetworkTransportCost {
    /// Creates a new instance of `NetworkTransportCost`.
    pub fn new(graph: Arc<RoadGraph>) -> Self {
        Self { graph }
    }

    fn network_estimate(&self, from: &Coordinate, to: &Coordinate) -> Option<Cost> {
        let from_node = self.graph.snap(from).ok()?;
        let to_node = self.graph.snap(to).ok()?;

        self.graph.shortest_path_cost(from_node.id, to_node.id)
    }
}

impl TransportCost for NetworkTransportCost {
    fn estimate(&self, from: &Coordinate, to: &Coordinate) -> Cost {
        self.network_estimate(from, to).unwrap_or_else(|| from.distance_to(to))
    }
}

/// Creates transport costs based on the road graph availability: road based costs when a
/// graph is present, great-circle distance based costs otherwise.
pub fn create_transport_cost(graph: Option<Arc<RoadGraph>>) -> Arc<dyn TransportCost + Send + Sync> {
    match graph {
        Some(graph) => Arc::new(NetworkTransportCost::new(graph)),
        None => Arc::new(HaversineTransportCost),
    }
}
