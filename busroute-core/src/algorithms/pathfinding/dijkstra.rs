//! This module contains an implementation of Dijkstra's shortest path algorithm.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/pathfinding/dijkstra_test.rs"]
mod dijkstra_test;

use crate::utils::Float;
use nohash_hasher::IntMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An adjacency list of a weighted graph: for each node index, its outgoing (target, cost) pairs.
pub type AdjacencyList = Vec<Vec<(usize, Float)>>;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Float,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // flipped ordering turns the max-heap into a min-heap
        other.cost.total_cmp(&self.cost).then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the cost of the cheapest path between source and target, if any exists.
/// Edge costs must be non-negative.
pub fn shortest_path_cost(adjacency: &AdjacencyList, source: usize, target: usize) -> Option<Float> {
    shortest_path(adjacency, source, target).map(|(_, cost)| cost)
}

/// Returns the cheapest path between source and target as visited node indices with the total
/// cost, if any exists. Edge costs must be non-negative.
pub fn shortest_path(adjacency: &AdjacencyList, source: usize, target: usize) -> Option<(Vec<usize>, Float)> {
    if source >= adjacency.len() || target >= adjacency.len() {
        return None;
    }

    let mut costs: IntMap<usize, Float> = IntMap::default();
    let mut predecessors: IntMap<usize, usize> = IntMap::default();
    let mut heap = BinaryHeap::new();

    costs.insert(source, 0.);
    heap.push(State { cost: 0., node: source });

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            let mut path = vec![target];
            let mut current = target;
            while let Some(&previous) = predecessors.get(&current) {
                path.push(previous);
                current = previous;
            }
            path.reverse();

            return Some((path, cost));
        }

        if costs.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for &(next, edge_cost) in adjacency[node].iter() {
            let next_cost = cost + edge_cost;
            if costs.get(&next).is_none_or(|&best| next_cost < best) {
                costs.insert(next, next_cost);
                predecessors.insert(next, node);
                heap.push(State { cost: next_cost, node: next });
            }
        }
    }

    None
}
