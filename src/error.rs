//! Error types for setting up, running and exporting simulations

use thiserror::Error;

pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors that abort a simulation run. There is no recoverable case: a run
/// either completes or reports one of these.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Time step must be strictly positive and finite (got {0})")]
    InvalidTimeStep(f64),

    #[error("Time limit must be positive and finite (got {0})")]
    InvalidTimeLimit(f64),

    #[error("Gravitational constant must be strictly positive and finite (got {0})")]
    InvalidGravitationalConstant(f64),

    #[error("Body mass must be strictly positive and finite (got {0})")]
    InvalidMass(f64),

    #[error("Body radius must be positive and finite (got {0})")]
    InvalidRadius(f64),

    #[error("Orbiter {orbiter} has a non-finite initial state")]
    InvalidOrbiter { orbiter: usize },

    #[error("Orbiter {orbiter} has a non-finite dropoff exponent ({dropoff})")]
    InvalidDropoff { orbiter: usize, dropoff: f64 },

    #[error("Orbiter {orbiter} starts at the position of the body")]
    CoincidentOrbiter { orbiter: usize },

    #[error("Orbiter {orbiter} reached a non-finite state at iteration {iteration} (time step too large or orbit through the body?)")]
    NonFiniteState { iteration: u64, orbiter: usize },

    #[error("File '{0}' already exists")]
    FileExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}
