use std::io::Write;
use super::error::{SimulationError, SimulationResult};
use super::integrator::Integrator;
use super::integrator::output::Trajectory;
use super::particles::Universe;
use super::tools::utc_timestamp;

/// Progress is printed roughly this many times per run
const N_PROGRESS_REPORTS: u64 = 100;
const MAX_PREALLOCATED_SNAPSHOTS: u64 = 1 << 20;

/// Integrate `universe` from t = 0 up to `time_limit` with steps of `time_step`
/// and record the pre-step positions of every orbiter.
///
/// Time is recomputed as `current_iteration * time_step` instead of being
/// accumulated, and steps are taken while it does not exceed `time_limit`:
/// a run records `floor(time_limit / time_step) + 1` snapshots, the first one
/// being the initial condition.
///
/// The setup is validated before any step. A position or velocity that becomes
/// non-finite during the run aborts it and no trajectory is returned.
pub fn run(universe: &mut Universe, integrator: &dyn Integrator, time_limit: f64, time_step: f64, silent_mode: bool) -> SimulationResult<Trajectory> {
    if !(time_step.is_finite() && time_step > 0.) {
        return Err(SimulationError::InvalidTimeStep(time_step));
    }
    if !(time_limit.is_finite() && time_limit >= 0.) {
        return Err(SimulationError::InvalidTimeLimit(time_limit));
    }
    universe.validate()?;

    let expected_n_snapshots = ((time_limit / time_step).floor() as u64).saturating_add(1);
    let progress_period = (expected_n_snapshots / N_PROGRESS_REPORTS).max(1);
    if !silent_mode {
        println!("[INFO {} UTC] {} integrator with {} orbiters, time step {:e} and time limit {:e}.", utc_timestamp(), integrator.name(), universe.n_orbiters(), time_step, time_limit);
    }

    let mut trajectory = Trajectory::with_capacity(expected_n_snapshots.min(MAX_PREALLOCATED_SNAPSHOTS) as usize);
    let mut current_iteration: u64 = 0;
    let mut current_time = 0.;
    while current_time <= time_limit {
        let snapshot = integrator.step(universe, time_step);
        if let Some(orbiter) = snapshot.iter().position(|position| !position.is_finite()) {
            return Err(SimulationError::NonFiniteState { iteration: current_iteration, orbiter: orbiter });
        }
        trajectory.push(snapshot);

        if !silent_mode && current_iteration % progress_period == 0 {
            print!("Time: {:0.3e} ({:0.0}%)                    \r", current_time, 100. * current_iteration as f64 / expected_n_snapshots as f64);
            let _ = std::io::stdout().flush();
        }

        current_iteration += 1;
        current_time = current_iteration as f64 * time_step; // Instead of accumulating to avoid drift
    }

    // The state reached by the last step is not recorded but it must still be sound
    if let Some(orbiter) = universe.first_non_finite_orbiter() {
        return Err(SimulationError::NonFiniteState { iteration: current_iteration, orbiter: orbiter });
    }

    if !silent_mode {
        println!();
        println!("[INFO {} UTC] Recorded {} snapshots.", utc_timestamp(), trajectory.len());
    }
    Ok(trajectory)
}
