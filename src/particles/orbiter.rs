use super::super::constants::DEFAULT_DROPOFF;
use super::Vector2;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Orbiter {
    pub position: Vector2, // m
    pub velocity: Vector2, // m/s
    // Exponent of the attraction law felt by this orbiter. It is always set here,
    // the force model never falls back to a default of its own.
    #[serde(default = "default_dropoff")]
    pub dropoff: f64,
}

fn default_dropoff() -> f64 {
    DEFAULT_DROPOFF
}

impl Orbiter {
    pub fn new(position: Vector2, velocity: Vector2) -> Orbiter {
        Orbiter::with_dropoff(position, velocity, DEFAULT_DROPOFF)
    }

    pub fn with_dropoff(position: Vector2, velocity: Vector2, dropoff: f64) -> Orbiter {
        Orbiter {
            position: position,
            velocity: velocity,
            dropoff: dropoff,
        }
    }
}
