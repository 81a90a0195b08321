use super::*;

const BERLIN: (f64, f64) = (52.52, 13.405);
const MUNICH: (f64, f64) = (48.1374, 11.5755);

#[test]
fn can_calculate_known_distance() {
    let distance = haversine_distance(BERLIN.0, BERLIN.1, MUNICH.0, MUNICH.1);

    assert!((distance - 504.).abs() < 2., "unexpected distance: {distance}");
}

#[test]
fn can_keep_distance_symmetric() {
    let there = haversine_distance(BERLIN.0, BERLIN.1, MUNICH.0, MUNICH.1);
    let back = haversine_distance(MUNICH.0, MUNICH.1, BERLIN.0, BERLIN.1);

    assert!((there - back).abs() < 1E-9);
}

#[test]
fn can_return_zero_for_same_point() {
    assert_eq!(haversine_distance(BERLIN.0, BERLIN.1, BERLIN.0, BERLIN.1), 0.);
}
