use time::{OffsetDateTime, format_description};
use super::particles::Vector2;

/// Current UTC time formatted for console messages ("2024.01.31 23:59:59")
pub fn utc_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    match format_description::parse("[year].[month].[day] [hour]:[minute]:[second]") {
        Ok(description) => now.format(&description).unwrap_or_else(|_| now.to_string()),
        Err(_) => now.to_string(),
    }
}

/// Eccentricity vector of a Keplerian (inverse-square) orbit in the plane,
/// given GM and the position/velocity relative to the attracting body.
/// Only meaningful for dropoff = 2.
pub fn calculate_eccentricity_vector(gm: f64, position: Vector2, velocity: Vector2) -> Vector2 {
    // --- Input --- //
    let x = position.x;
    let y = position.y;
    let u = velocity.x;
    let v = velocity.y;

    // --- Local --- //
    // Angular momentum (perpendicular to the plane)
    let hz = x * v - y * u;
    // v vectorial h
    let v_vect_h_x = v * hz;
    let v_vect_h_y = -u * hz;
    // distance
    let r = (x*x + y*y).sqrt();

    Vector2 {
        x: (v_vect_h_x / gm) - (x / r),
        y: (v_vect_h_y / gm) - (y / r),
    }
}

/// Semi-major axis of a Keplerian orbit from the vis-viva equation.
/// Negative for unbound (hyperbolic) orbits.
pub fn calculate_semimajor_axis(gm: f64, position: Vector2, velocity: Vector2) -> f64 {
    let r = position.magnitude();
    let v2 = velocity.magnitude_squared();
    1. / (2. / r - v2 / gm)
}
