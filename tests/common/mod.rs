#![allow(dead_code)]

use orbiters::{Body, Integrator, Orbiter, PowerLawGravity, Universe, Vector2};

pub fn simulation_properties() -> (f64, f64) {
    let time_step: f64 = 0.01; // time units of the unit system (G = M = r = 1)
    let time_limit: f64 = 10.;
    (time_step, time_limit)
}

/// Unit mass body with G = 1 and a single orbiter on a circular orbit of radius 1
pub fn circular_universe(dropoff: f64) -> Universe {
    circular_universe_with_radius(1., dropoff)
}

pub fn circular_universe_with_radius(radius: f64, dropoff: f64) -> Universe {
    let body = Body::new(1., 0.1);
    let gravity = PowerLawGravity::new(1.);
    let velocity = gravity.circular_velocity(&body, radius, dropoff);
    let orbiter = Orbiter::with_dropoff(Vector2::new(radius, 0.), Vector2::new(0., velocity), dropoff);
    Universe::new(body, vec![orbiter], gravity)
}

/// Cygnus X-1 like black hole with one Newtonian orbiter
pub fn cygnus_x1_universe() -> Universe {
    let case = orbiters::Case::cygnus_x1();
    let mut universe = case.universe();
    universe.orbiters.truncate(1);
    universe
}

/// Largest |E - E0| / |E0| of orbiter 0 over `n_steps` steps
pub fn maximum_relative_energy_drift(universe: &mut Universe, integrator: &dyn Integrator, time_step: f64, n_steps: usize) -> f64 {
    let initial_energy = universe.specific_energy(0);
    let mut maximum_drift: f64 = 0.;
    for _ in 0..n_steps {
        integrator.step(universe, time_step);
        let drift = ((universe.specific_energy(0) - initial_energy) / initial_energy).abs();
        maximum_drift = maximum_drift.max(drift);
    }
    maximum_drift
}
