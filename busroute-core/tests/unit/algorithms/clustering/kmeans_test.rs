use super::*;
use crate::helpers::p;
use crate::utils::DefaultRandom;

fn create_random() -> DefaultRandom {
    DefaultRandom::new_with_seed(123)
}

#[test]
fn can_create_two_clusters_for_separated_groups() {
    let points = vec![p(0., 0.), p(0., 1.), p(1., 0.), p(10., 10.), p(10., 11.), p(11., 10.)];

    let clusters = create_kmeans(&points, 2, &create_random());

    let mut sizes = clusters.iter().map(|cluster| cluster.len()).collect::<Vec<_>>();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 3]);

    clusters.iter().for_each(|cluster| {
        let in_first_group = cluster.iter().filter(|&&index| index < 3).count();
        assert!(in_first_group == 0 || in_first_group == cluster.len());
    });
}

#[test]
fn can_assign_every_point_exactly_once() {
    let points = vec![p(0., 0.), p(2., 1.), p(5., 5.), p(1., 1.), p(9., 3.), p(4., 7.)];

    let clusters = create_kmeans(&points, 3, &create_random());

    let mut assigned = clusters.into_iter().flatten().collect::<Vec<_>>();
    assigned.sort_unstable();
    assert_eq!(assigned, (0..points.len()).collect::<Vec<_>>());
}

#[test]
fn can_create_singleton_clusters_when_k_exceeds_points() {
    let points = vec![p(0., 0.), p(1., 1.)];

    let clusters = create_kmeans(&points, 5, &create_random());

    assert_eq!(clusters, vec![vec![0], vec![1]]);
}

#[test]
fn can_terminate_with_identical_points() {
    let points = vec![p(1., 1.); 4];

    let clusters = create_kmeans(&points, 2, &create_random());

    assert_eq!(clusters.iter().map(|cluster| cluster.len()).sum::<usize>(), 4);
}

#[test]
fn can_return_no_clusters_for_empty_input() {
    assert!(create_kmeans(&[], 3, &create_random()).is_empty());
}

#[test]
fn can_produce_identical_clusters_for_repeated_calls() {
    let points = vec![p(0., 0.), p(0.5, 3.), p(4., 4.), p(2., 2.), p(7., 1.), p(3., 6.)];

    let first = create_kmeans(&points, 2, &create_random());
    let second = create_kmeans(&points, 2, &create_random());

    assert_eq!(first, second);
}
