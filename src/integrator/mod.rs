mod symplectic_euler;
mod yoshida8;
pub mod output;

pub use self::symplectic_euler::SymplecticEuler;
pub use self::yoshida8::Yoshida8;

use super::particles::{Universe, Snapshot};


/// One fixed-size time step over the whole set of orbiters.
///
/// `step` returns the orbiter positions as they were *before* the step and then
/// updates every orbiter's position and velocity in place, so the first snapshot
/// of a run is always the initial condition.
pub trait Integrator {
    fn name(&self) -> &'static str;
    fn step(&self, universe: &mut Universe, time_step: f64) -> Snapshot;
}

/// Integrator selection as it appears in case files
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum IntegratorType {
    SymplecticEuler,
    Yoshida8,
}

impl IntegratorType {
    pub fn build(&self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::SymplecticEuler => Box::new(SymplecticEuler::new()),
            IntegratorType::Yoshida8 => Box::new(Yoshida8::new()),
        }
    }
}
