use super::*;
use crate::helpers::create_test_stop;
use crate::utils::DefaultRandom;
use std::collections::HashSet;

fn create_random() -> DefaultRandom {
    DefaultRandom::new_with_seed(42)
}

fn create_two_group_stops() -> Vec<Stop> {
    vec![
        create_test_stop("a", 0., 0.),
        create_test_stop("b", 0., 0.1),
        create_test_stop("c", 10., 0.),
        create_test_stop("d", 10., 0.1),
    ]
}

#[test]
fn can_partition_all_stops_exactly_once() {
    let stops = (0..10).map(|i| create_test_stop(&i.to_string(), i as f64, (i % 3) as f64)).collect::<Vec<_>>();

    let clusters = cluster_stops(&stops, 3, &create_random());

    let ids = clusters.iter().flatten().map(|stop| stop.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids.len(), stops.len());
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), stops.len());
}

#[test]
fn can_return_single_cluster_for_one_bus() {
    let stops = create_two_group_stops();

    let clusters = cluster_stops(&stops, 1, &create_random());

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), stops.len());
}

#[test]
fn can_return_singleton_clusters_when_buses_match_stops() {
    let stops = create_two_group_stops();

    let clusters = cluster_stops(&stops, stops.len(), &create_random());

    assert_eq!(clusters.len(), stops.len());
    assert!(clusters.iter().all(|cluster| cluster.len() == 1));
}

#[test]
fn can_separate_distant_groups() {
    let stops = create_two_group_stops();

    let clusters = cluster_stops(&stops, 2, &create_random());

    assert_eq!(clusters.len(), 2);
    clusters.iter().for_each(|cluster| {
        let near = cluster.iter().filter(|stop| stop.coordinate.latitude < 5.).count();
        assert!(near == 0 || near == cluster.len());
    });
}

#[test]
fn can_drop_empty_clusters_with_identical_coordinates() {
    let stops =
        vec![create_test_stop("a", 1., 1.), create_test_stop("b", 1., 1.), create_test_stop("c", 1., 1.)];

    let clusters = cluster_stops(&stops, 2, &create_random());

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 3);
}

#[test]
fn can_keep_demand_weights_untouched() {
    let mut stops = create_two_group_stops();
    stops.iter_mut().enumerate().for_each(|(index, stop)| stop.demand = index as f64);

    let clusters = cluster_stops(&stops, 2, &create_random());

    let total_demand = clusters.iter().flatten().map(|stop| stop.demand).sum::<f64>();
    assert_eq!(total_demand, 0. + 1. + 2. + 3.);
}
