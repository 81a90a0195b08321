use super::*;

#[test]
fn can_reproduce_values_with_seed() {
    let random = DefaultRandom::new_with_seed(11);

    assert_eq!(random.uniform_int(0, 100), random.uniform_int(0, 100));
}

#[test]
fn can_return_bounds_for_degenerate_range() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(2., 2.), 2.);
}

#[test]
fn can_respect_range_bounds() {
    let random = DefaultRandom::default();

    let value = random.uniform_int(1, 3);
    assert!((1..=3).contains(&value));

    let value = random.uniform_real(0., 1.);
    assert!((0. ..1.).contains(&value));
}
