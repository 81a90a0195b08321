use super::*;

#[test]
fn can_compare_regular_floats() {
    assert_eq!(compare_floats(1., 2.), Ordering::Less);
    assert_eq!(compare_floats(2., 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., 1.), Ordering::Equal);
}

#[test]
fn can_order_nan_values_last() {
    assert_eq!(compare_floats(f64::NAN, 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., f64::NAN), Ordering::Less);
    assert_eq!(compare_floats(f64::NAN, f64::NAN), Ordering::Equal);
}
