use super::Integrator;
use super::super::particles::{Universe, Snapshot};

/// Symplectic (semi-implicit) Euler is a first order symplectic integrator.
///
/// For every orbiter the velocity is kicked with the acceleration at the current
/// position and the position then drifts with the *new* velocity:
///
///   v_n+1 = v_n + a(x_n) dt
///   x_n+1 = x_n + v_n+1 dt
///
/// Drifting with the old velocity instead would give the explicit Euler method,
/// which is not symplectic and whose energy drifts secularly.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SymplecticEuler;

impl SymplecticEuler {
    pub fn new() -> SymplecticEuler {
        SymplecticEuler
    }
}

impl Integrator for SymplecticEuler {

    fn name(&self) -> &'static str {
        "SymplecticEuler"
    }

    fn step(&self, universe: &mut Universe, time_step: f64) -> Snapshot {
        let snapshot = universe.positions();

        let body = &universe.body;
        let gravity = &universe.gravity;
        for orbiter in universe.orbiters.iter_mut() {
            let acceleration = gravity.acceleration(orbiter, body);
            orbiter.velocity += acceleration * time_step;
            orbiter.position += orbiter.velocity * time_step;
        }

        snapshot
    }

}
