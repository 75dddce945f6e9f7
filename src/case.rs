use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use super::constants::{G_SI, M_SUN, R_SUN};
use super::effects::PowerLawGravity;
use super::error::{SimulationError, SimulationResult};
use super::integrator::IntegratorType;
use super::integrator::output::Trajectory;
use super::particles::{Body, Orbiter, Universe, Vector2};
use super::simulation;
use super::tools::{utc_timestamp, calculate_eccentricity_vector, calculate_semimajor_axis};

/// Complete description of a simulation: initial conditions plus run settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub gravitational_constant: f64, // m^3.kg^-1.s^-2
    pub time_limit: f64, // s
    pub time_step: f64, // s
    pub integrator: IntegratorType,
    pub body: Body,
    pub orbiters: Vec<Orbiter>,
}

impl Case {
    /// Cygnus X-1 like black hole (21.2 solar masses) with three orbiters
    /// starting at the same place, each with its own speed and dropoff.
    pub fn cygnus_x1() -> Case {
        Case {
            gravitational_constant: G_SI,
            time_limit: 1e10,
            time_step: 2e5,
            integrator: IntegratorType::Yoshida8,
            body: Body::new(21.2 * M_SUN, 21. * R_SUN),
            orbiters: vec![
                Orbiter::new(Vector2::new(2e11, 0.), Vector2::new(0., 120000.)),
                Orbiter::with_dropoff(Vector2::new(2e11, 0.), Vector2::new(0., 2500.), 2.3),
                Orbiter::with_dropoff(Vector2::new(2e11, 0.), Vector2::new(0., 150e3), 1.98),
            ],
        }
    }

    pub fn from_json_file(case_path: &Path) -> SimulationResult<Case> {
        let reader = BufReader::new(File::open(case_path)?);
        let case = serde_json::from_reader(reader)?;
        Ok(case)
    }

    pub fn write_json_file(&self, case_path: &Path) -> SimulationResult<()> {
        if case_path.exists() {
            return Err(SimulationError::FileExists(case_path.display().to_string()));
        }
        let mut writer = BufWriter::new(File::create(case_path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn universe(&self) -> Universe {
        Universe::new(self.body, self.orbiters.clone(), PowerLawGravity::new(self.gravitational_constant))
    }

    /// Run the case from its initial conditions
    pub fn run(&self, silent_mode: bool) -> SimulationResult<Trajectory> {
        let mut universe = self.universe();
        if !silent_mode {
            self.describe(&universe);
        }
        let integrator = self.integrator.build();
        simulation::run(&mut universe, integrator.as_ref(), self.time_limit, self.time_step, silent_mode)
    }

    fn describe(&self, universe: &Universe) {
        let gm = self.gravitational_constant * self.body.mass;
        for (i, orbiter) in self.orbiters.iter().enumerate() {
            if orbiter.dropoff == 2. {
                let eccentricity = calculate_eccentricity_vector(gm, orbiter.position, orbiter.velocity).magnitude();
                let semimajor_axis = calculate_semimajor_axis(gm, orbiter.position, orbiter.velocity);
                println!("[INFO {} UTC] Orbiter {}: dropoff {}, semi-major axis {:e} m, eccentricity {:0.4}.", utc_timestamp(), i, orbiter.dropoff, semimajor_axis, eccentricity);
            } else {
                println!("[INFO {} UTC] Orbiter {}: dropoff {}, specific energy {:e} J/kg.", utc_timestamp(), i, orbiter.dropoff, universe.specific_energy(i));
            }
        }
    }
}
