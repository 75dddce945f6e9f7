use super::super::particles::{Body, Orbiter, Vector2};

/// Generalised power-law attraction toward a single body:
///
///   a = G * M / r^n  (directed from the orbiter to the body)
///
/// where `n` is the orbiter's own `dropoff` exponent. n = 2 is Newtonian gravity,
/// other exponents only change how fast the pull falls off with distance, never
/// its sign.
///
/// The gravitational constant is part of the model instance so that simulations
/// with different constants do not interfere with each other.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerLawGravity {
    pub gravitational_constant: f64,
}

impl PowerLawGravity {
    pub fn new(gravitational_constant: f64) -> PowerLawGravity {
        PowerLawGravity {
            gravitational_constant: gravitational_constant,
        }
    }

    /// Acceleration felt by `orbiter`. The orbiter must not sit on the body:
    /// a zero separation has no direction and yields a non-finite magnitude.
    pub fn acceleration(&self, orbiter: &Orbiter, body: &Body) -> Vector2 {
        let separation = body.position - orbiter.position;
        let direction = separation.normalized();
        let magnitude = self.gravitational_constant * body.mass / separation.magnitude().powf(orbiter.dropoff);
        direction * magnitude
    }

    /// Potential energy per unit mass whose negative gradient is `acceleration`.
    ///
    ///   U(r) = -G M / ((n - 1) r^(n-1))   for n != 1
    ///   U(r) =  G M ln(r)                 for n == 1
    pub fn specific_potential_energy(&self, orbiter: &Orbiter, body: &Body) -> f64 {
        let distance = (body.position - orbiter.position).magnitude();
        let gm = self.gravitational_constant * body.mass;
        let exponent = orbiter.dropoff - 1.;
        if exponent == 0. {
            gm * distance.ln()
        } else {
            -gm / (exponent * distance.powf(exponent))
        }
    }

    /// Speed of a circular orbit of the given radius for an orbiter with the
    /// given dropoff: v^2 / r = G M / r^n
    pub fn circular_velocity(&self, body: &Body, radius: f64, dropoff: f64) -> f64 {
        (self.gravitational_constant * body.mass / radius.powf(dropoff - 1.)).sqrt()
    }
}
