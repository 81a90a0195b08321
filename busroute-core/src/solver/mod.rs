//! Contains the route optimizer: the entry point which turns stops and a bus count into
//! per-bus visiting routes.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::clustering::cluster_stops;
use crate::construction::routing::order_stops;
use crate::models::problem::{RoadNetworkProvider, Stop, create_transport_cost};
use crate::models::solution::Route;
use crate::utils::{DefaultRandom, Environment, parallel_into_collect};
use std::fmt;
use std::sync::Arc;

/// A default seed for cluster initialization which keeps repeated optimization calls identical.
const CLUSTERING_SEED: u64 = 42;

/// An error returned when optimization cannot be started for the given input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptimizationError {
    /// The requested amount of buses is zero or exceeds the amount of stops.
    InvalidBusCount {
        /// A requested amount of buses.
        num_buses: usize,
        /// An actual amount of stops.
        num_stops: usize,
    },
    /// No stops were supplied.
    EmptyInput,
}

impl fmt::Display for OptimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBusCount { num_buses, num_stops } => {
                write!(f, "cannot optimize {num_stops} stops with {num_buses} buses")
            }
            Self::EmptyInput => write!(f, "no stops to optimize"),
        }
    }
}

impl std::error::Error for OptimizationError {}

/// Assigns stops to buses by spatial proximity and builds a visiting route for every bus.
pub struct RouteOptimizer {
    network: Arc<dyn RoadNetworkProvider + Send + Sync>,
    environment: Arc<Environment>,
}

impl RouteOptimizer {
    /// Creates a new instance of `RouteOptimizer` with a seeded environment, so that repeated
    /// calls with the same input produce identical routes.
    pub fn new(network: Arc<dyn RoadNetworkProvider + Send + Sync>) -> Self {
        let environment = Environment {
            random: Arc::new(DefaultRandom::new_with_seed(CLUSTERING_SEED)),
            ..Environment::default()
        };

        Self::new_with_environment(network, Arc::new(environment))
    }

    /// Creates a new instance of `RouteOptimizer` with a custom environment. Optimization
    /// stays deterministic as long as the environment carries a seeded random.
    pub fn new_with_environment(
        network: Arc<dyn RoadNetworkProvider + Send + Sync>,
        environment: Arc<Environment>,
    ) -> Self {
        Self { network, environment }
    }

    /// Builds one route per bus from the given stops: clusters stops between `num_buses`
    /// buses and orders every cluster into a visiting sequence. Returns one route per
    /// nonempty cluster, so fewer than `num_buses` routes can be returned.
    pub fn optimize(&self, stops: &[Stop], num_buses: usize) -> Result<Vec<Route>, OptimizationError> {
        if stops.is_empty() {
            return Err(OptimizationError::EmptyInput);
        }

        if num_buses == 0 || num_buses > stops.len() {
            return Err(OptimizationError::InvalidBusCount { num_buses, num_stops: stops.len() });
        }

        let logger = &self.environment.logger;

        let graph = self.network.current_graph();
        match graph.as_ref() {
            Some(graph) => (logger)(&format!(
                "using a road graph with {} nodes and {} edges",
                graph.node_count(),
                graph.edge_count()
            )),
            None => (logger)("no road graph available, falling back to great-circle estimates"),
        }

        let transport = create_transport_cost(graph);

        let clusters = cluster_stops(stops, num_buses, self.environment.random.as_ref());
        (logger)(&format!("assigned {} stops to {} buses", stops.len(), clusters.len()));

        let routes = parallel_into_collect(clusters.into_iter().enumerate().collect(), |(bus_index, cluster)| {
            let ordered = order_stops(cluster, transport.as_ref());
            Route::new(bus_index, &ordered)
        });

        Ok(routes)
    }
}
