use crate::Coordinates;

use super::weights::BASELINE_GEO_POINTS;

/// Reference point for geographic proximity: the Pecém industrial and port
/// complex, where the bulk of the platform's openings are located.
pub const PECEM_HUB: Coordinates = Coordinates {
    lat: -3.6,
    lng: -38.97,
};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates (haversine), in km.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Proximity bonus toward the baseline match score: full points inside the
/// 20 km commute ring around the hub, half inside 50 km, nothing beyond.
pub fn proximity_points(candidate: Coordinates) -> f64 {
    let distance = haversine_km(candidate, PECEM_HUB);

    if distance < 20.0 {
        BASELINE_GEO_POINTS
    } else if distance < 50.0 {
        BASELINE_GEO_POINTS / 2.0
    } else {
        0.0
    }
}
