use super::Integrator;
use super::super::constants::{YOSHIDA8_POSITION_COEFFICIENTS, YOSHIDA8_VELOCITY_COEFFICIENTS};
use super::super::particles::{Universe, Snapshot};

/// Yoshida8 is an eighth order symplectic integrator
/// https://doi.org/10.1016/0375-9601(90)90092-3
///
/// Construction of higher order symplectic integrators (H. Yoshida, 1990).
/// A composition of leapfrog-like drift/kick sub-stages with weights w0..w7
/// chosen so that the error terms cancel up to eighth order. One physical step
/// is made of 15 drift-kick sub-stages followed by a final drift:
///
///   for i in 0..15:
///       x += c_i v dt           (all orbiters)
///       v += d_i a(x) dt        (all orbiters)
///   x += c_15 v dt
///
/// Every orbiter completes sub-stage i before any of them starts sub-stage i+1.
/// The coefficient tables are the published reference values and must not be
/// altered: any deviation lowers the order of the method.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Yoshida8;

impl Yoshida8 {
    pub fn new() -> Yoshida8 {
        Yoshida8
    }
}

impl Integrator for Yoshida8 {

    fn name(&self) -> &'static str {
        "Yoshida8"
    }

    fn step(&self, universe: &mut Universe, time_step: f64) -> Snapshot {
        let snapshot = universe.positions();

        for (position_coefficient, velocity_coefficient) in YOSHIDA8_POSITION_COEFFICIENTS.iter()
                                                                .zip(YOSHIDA8_VELOCITY_COEFFICIENTS.iter()) {
            self.drift_kick(universe, *position_coefficient, *velocity_coefficient, time_step);
        }
        self.drift(universe, YOSHIDA8_POSITION_COEFFICIENTS[15], time_step);

        snapshot
    }

}

impl Yoshida8 {
    fn drift_kick(&self, universe: &mut Universe, position_coefficient: f64, velocity_coefficient: f64, time_step: f64) {
        let body = &universe.body;
        let gravity = &universe.gravity;
        for orbiter in universe.orbiters.iter_mut() {
            orbiter.position += orbiter.velocity * position_coefficient * time_step;
            let acceleration = gravity.acceleration(orbiter, body);
            orbiter.velocity += acceleration * velocity_coefficient * time_step;
        }
    }

    fn drift(&self, universe: &mut Universe, position_coefficient: f64, time_step: f64) {
        for orbiter in universe.orbiters.iter_mut() {
            orbiter.position += orbiter.velocity * position_coefficient * time_step;
        }
    }
}
