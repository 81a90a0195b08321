#[cfg(test)]
#[path = "../../../tests/unit/models/problem/graph_test.rs"]
mod graph_test;

use crate::algorithms::pathfinding::{self, AdjacencyList};
use crate::models::common::{Coordinate, Cost};
use crate::utils::{GenericResult, compare_floats};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A road graph node id.
pub type NodeId = u64;

/// Represents a road intersection with its location.
#[derive(Clone, Debug)]
pub struct Node {
    /// A node id.
    pub id: NodeId,
    /// A node location.
    pub coordinate: Coordinate,
}

/// An error returned when a road graph has no nodes to snap to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyGraphError;

impl fmt::Display for EmptyGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot snap a coordinate to a road graph without nodes")
    }
}

impl std::error::Error for EmptyGraphError {}

/// An immutable snapshot of a road network: intersections as nodes and road segments as
/// directed weighted edges. An undirected road is represented by two edges.
pub struct RoadGraph {
    nodes: Vec<Node>,
    node_index: FxHashMap<NodeId, usize>,
    adjacency: AdjacencyList,
}

impl RoadGraph {
    /// Creates a new instance of `RoadGraph` from nodes and directed (source, target, cost)
    /// edges. Edge costs must be non-negative and edge endpoints must be present in nodes.
    pub fn new(nodes: Vec<Node>, edges: Vec<(NodeId, NodeId, Cost)>) -> GenericResult<Self> {
        let node_index = nodes.iter().enumerate().map(|(index, node)| (node.id, index)).collect::<FxHashMap<_, _>>();

        if node_index.len() != nodes.len() {
            return Err("road graph contains duplicate node ids".into());
        }

        let mut adjacency: AdjacencyList = vec![Vec::new(); nodes.len()];

        for (source, target, cost) in edges {
            if cost < 0. {
                return Err(format!("negative cost on road segment: {source} -> {target}").into());
            }

            match (node_index.get(&source), node_index.get(&target)) {
                (Some(&source_idx), Some(&target_idx)) => adjacency[source_idx].push((target_idx, cost)),
                _ => return Err(format!("road segment refers to an unknown node: {source} -> {target}").into()),
            }
        }

        Ok(Self { nodes, node_index, adjacency })
    }

    /// Returns all nodes in a stable order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns the amount of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the amount of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Returns the node nearest to the given coordinate by great-circle distance. Ties are
    /// broken by the first encountered node in the graph's node order.
    pub fn snap(&self, point: &Coordinate) -> Result<&Node, EmptyGraphError> {
        self.nodes
            .iter()
            .min_by(|a, b| compare_floats(point.distance_to(&a.coordinate), point.distance_to(&b.coordinate)))
            .ok_or(EmptyGraphError)
    }

    /// Returns the cost of the cheapest path between two nodes, if any exists.
    pub fn shortest_path_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        let (&from_idx, &to_idx) = (self.node_index.get(&from)?, self.node_index.get(&to)?);

        pathfinding::shortest_path_cost(&self.adjacency, from_idx, to_idx)
    }

    /// Returns the cheapest path between two nodes as visited nodes with the total cost, if
    /// any exists.
    pub fn shortest_path_between(&self, from: NodeId, to: NodeId) -> Option<(Vec<&Node>, Cost)> {
        let (&from_idx, &to_idx) = (self.node_index.get(&from)?, self.node_index.get(&to)?);

        pathfinding::shortest_path(&self.adjacency, from_idx, to_idx)
            .map(|(path, cost)| (path.into_iter().map(|index| &self.nodes[index]).collect(), cost))
    }
}

/// Provides the way to get an actual road network snapshot when one is available. Snapshot
/// refresh and ownership live outside the optimization core.
pub trait RoadNetworkProvider {
    /// Returns the current road graph snapshot, or `None` when no road data is available.
    fn current_graph(&self) -> Option<Arc<RoadGraph>>;
}

/// A provider which serves a fixed road graph snapshot.
pub struct StaticNetworkProvider {
    graph: Arc<RoadGraph>,
}

impl StaticNetworkProvider {
    /// Creates a new instance of `StaticNetworkProvider`.
    pub fn new(graph: Arc<RoadGraph>) -> Self {
        Self { graph }
    }
}

impl RoadNetworkProvider for StaticNetworkProvider {
    fn current_graph(&self) -> Option<Arc<RoadGraph>> {
        Some(self.graph.clone())
    }
}

/// A provider for environments where no road data is available at all.
#[derive(Default)]
pub struct NoNetworkProvider;

impl RoadNetworkProvider for NoNetworkProvider {
    fn current_graph(&self) -> Option<Arc<RoadGraph>> {
        None
    }
}
