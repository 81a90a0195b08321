//! This module reimports commonly used types.

pub use crate::models::common::{Coordinate, Cost, Distance, Weight};

pub use crate::models::problem::{
    EmptyGraphError, HaversineTransportCost, NetworkTransportCost, NoNetworkProvider, Node, NodeId, RoadGraph,
    RoadNetworkProvider, StaticNetworkProvider, Stop, TransportCost, create_transport_cost,
};

pub use crate::models::solution::Route;

pub use crate::solver::{OptimizationError, RouteOptimizer};

pub use crate::utils::{
    DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random, compare_floats,
};
