//! Spatial clustering of stops: partitions stops between buses by proximity.

#[cfg(test)]
#[path = "../../tests/unit/construction/clustering_test.rs"]
mod clustering_test;

use crate::algorithms::clustering::create_kmeans;
use crate::algorithms::geometry::Point;
use crate::models::problem::Stop;
use crate::utils::Random;

/// Partitions stops into at most `k` nonempty groups by spatial proximity using K-Means over
/// the (latitude, longitude) space. Demand weights do not affect the partitioning.
///
/// Returned clusters are disjoint, cover all input stops and follow centroid discovery order.
/// Clusters left empty by K-Means are dropped, so fewer than `k` groups can be returned.
pub fn cluster_stops(stops: &[Stop], k: usize, random: &(dyn Random + Send + Sync)) -> Vec<Vec<Stop>> {
    if k == 0 || stops.is_empty() {
        return Vec::default();
    }

    if k == 1 {
        return vec![stops.to_vec()];
    }

    let points =
        stops.iter().map(|stop| Point::new(stop.coordinate.latitude, stop.coordinate.longitude)).collect::<Vec<_>>();

    create_kmeans(&points, k, random)
        .into_iter()
        .filter(|cluster| !cluster.is_empty())
        .map(|cluster| cluster.into_iter().map(|index| stops[index].clone()).collect())
        .collect()
}
