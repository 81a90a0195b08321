#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/haversine_test.rs"]
mod haversine_test;

use crate::utils::Float;

/// An average Earth radius, in kilometers.
const EARTH_RADIUS_KM: Float = 6371.;

/// Computes a great-circle distance between two latitude/longitude points, in kilometers.
pub fn haversine_distance(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> Float {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
