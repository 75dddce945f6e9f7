extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;
extern crate thiserror;

pub mod constants;
pub mod error;
pub use self::error::{SimulationError, SimulationResult};

mod particles;
pub use self::particles::Universe;
pub use self::particles::Snapshot;
pub use self::particles::Body;
pub use self::particles::Orbiter;
pub use self::particles::Vector2;

mod effects;
pub use self::effects::PowerLawGravity;

mod integrator;
pub use self::integrator::*;

pub mod simulation;
pub mod case;
pub use self::case::Case;

pub mod tools;

