//! This module contains a basic K-Means (Lloyd's algorithm) implementation.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::algorithms::geometry::Point;
use crate::utils::{Float, Random, compare_floats};

/// Creates clusters of 2D points using the K-Means algorithm. Returns, for each centroid,
/// indices of the points assigned to it. Some clusters might be empty, callers are
/// expected to filter them out when needed.
///
/// Centroids are initialized with a random first point and farthest points for the rest,
/// so results are reproducible when a seeded random is supplied.
pub fn create_kmeans(points: &[Point], k: usize, random: &(dyn Random + Send + Sync)) -> Vec<Vec<usize>> {
    const MAX_ITERATIONS: usize = 100;

    if points.is_empty() || k == 0 {
        return Vec::default();
    }

    if k >= points.len() {
        return (0..points.len()).map(|index| vec![index]).collect();
    }

    KMeans::new(k, MAX_ITERATIONS).calculate(points, random)
}

struct KMeans {
    k: usize,
    max_iterations: usize,
}

impl KMeans {
    fn new(k: usize, max_iterations: usize) -> Self {
        Self { k, max_iterations }
    }

    fn initialize_centroids(&self, points: &[Point], random: &(dyn Random + Send + Sync)) -> Vec<Point> {
        let first = random.uniform_int(0, points.len() as i32 - 1) as usize;
        let mut chosen = vec![first];

        // select the remaining centroids as the points farthest from the already chosen ones
        while chosen.len() < self.k {
            let next = (0..points.len())
                .filter(|index| !chosen.contains(index))
                .max_by(|&a, &b| {
                    let min_distance = |point_idx: usize| {
                        chosen
                            .iter()
                            .map(|&chosen_idx| points[point_idx].distance_to_point(&points[chosen_idx]))
                            .fold(Float::INFINITY, Float::min)
                    };

                    compare_floats(min_distance(a), min_distance(b))
                })
                .expect("cluster amount must be less than point amount");

            chosen.push(next);
        }

        chosen.into_iter().map(|index| points[index].clone()).collect()
    }

    fn assign_points_to_centroids(&self, points: &[Point], centroids: &[Point]) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); centroids.len()];

        points.iter().enumerate().for_each(|(point_idx, point)| {
            let centroid_idx = centroids
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| compare_floats(point.distance_to_point(a), point.distance_to_point(b)))
                .map(|(index, _)| index)
                .expect("at least one centroid");

            clusters[centroid_idx].push(point_idx);
        });

        clusters
    }

    fn update_centroids(&self, points: &[Point], centroids: &[Point], clusters: &[Vec<usize>]) -> Vec<Point> {
        clusters
            .iter()
            .zip(centroids.iter())
            .map(|(cluster, old_centroid)| {
                if cluster.is_empty() {
                    // an empty centroid keeps its position to guarantee termination
                    old_centroid.clone()
                } else {
                    let (sum_x, sum_y) =
                        cluster.iter().fold((0., 0.), |(x, y), &index| (x + points[index].x, y + points[index].y));

                    Point::new(sum_x / cluster.len() as Float, sum_y / cluster.len() as Float)
                }
            })
            .collect()
    }

    fn calculate(&self, points: &[Point], random: &(dyn Random + Send + Sync)) -> Vec<Vec<usize>> {
        let mut centroids = self.initialize_centroids(points, random);
        let mut clusters = self.assign_points_to_centroids(points, &centroids);

        for _ in 0..self.max_iterations {
            let new_centroids = self.update_centroids(points, &centroids, &clusters);
            let new_clusters = self.assign_points_to_centroids(points, &new_centroids);

            if new_clusters == clusters {
                break;
            }

            centroids = new_centroids;
            clusters = new_clusters;
        }

        clusters
    }
}
