//! Intra-cluster route ordering: turns a group of stops into a visiting sequence.

#[cfg(test)]
#[path = "../../tests/unit/construction/routing_test.rs"]
mod routing_test;

use crate::models::problem::{Stop, TransportCost};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Orders stops into a visiting sequence using a single greedy nearest neighbor pass driven by
/// the given transport costs. The result is a permutation of the input.
///
/// The pass starts from the stop with the lexicographically smallest (latitude, longitude)
/// pair; cost ties between candidates are broken by stop id order.
pub fn order_stops(stops: Vec<Stop>, transport: &dyn TransportCost) -> Vec<Stop> {
    if stops.len() < 2 {
        return stops;
    }

    let mut unvisited = stops;
    let start_idx = unvisited
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| start_order(a, b))
        .map(|(index, _)| index)
        .expect("stops must not be empty");

    let mut ordered = Vec::with_capacity(unvisited.len());
    ordered.push(unvisited.swap_remove(start_idx));

    while !unvisited.is_empty() {
        let current = ordered.last().expect("ordered stops must not be empty");

        let next_idx = unvisited
            .iter()
            .enumerate()
            .map(|(index, stop)| (index, transport.estimate(&current.coordinate, &stop.coordinate)))
            .min_by(|(index_a, cost_a), (index_b, cost_b)| {
                compare_floats(*cost_a, *cost_b).then_with(|| unvisited[*index_a].id.cmp(&unvisited[*index_b].id))
            })
            .map(|(index, _)| index)
            .expect("unvisited stops must not be empty");

        ordered.push(unvisited.swap_remove(next_idx));
    }

    ordered
}

fn start_order(a: &Stop, b: &Stop) -> Ordering {
    compare_floats(a.coordinate.latitude, b.coordinate.latitude)
        .then_with(|| compare_floats(a.coordinate.longitude, b.coordinate.longitude))
        .then_with(|| a.id.cmp(&b.id))
}
