use super::super::effects::PowerLawGravity;
use super::super::error::{SimulationError, SimulationResult};
use super::{Body, Orbiter, Vector2};

/// Positions of every orbiter at one instant, in orbiter index order.
pub type Snapshot = Vec<Vector2>;

/// Everything a time step operates on: the fixed attracting body, the orbiters
/// that move around it and the force model linking them.
///
/// Orbiters never interact with each other, the only coupling is with the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Universe {
    pub body: Body,
    pub orbiters: Vec<Orbiter>,
    pub gravity: PowerLawGravity,
}

impl Universe {
    pub fn new(body: Body, orbiters: Vec<Orbiter>, gravity: PowerLawGravity) -> Universe {
        Universe {
            body: body,
            orbiters: orbiters,
            gravity: gravity,
        }
    }

    pub fn n_orbiters(&self) -> usize {
        self.orbiters.len()
    }

    pub fn positions(&self) -> Snapshot {
        self.orbiters.iter().map(|orbiter| orbiter.position).collect()
    }

    /// Check the setup before any stepping takes place.
    pub fn validate(&self) -> SimulationResult<()> {
        let gravitational_constant = self.gravity.gravitational_constant;
        if !(gravitational_constant.is_finite() && gravitational_constant > 0.) {
            return Err(SimulationError::InvalidGravitationalConstant(gravitational_constant));
        }
        if !(self.body.mass.is_finite() && self.body.mass > 0.) {
            return Err(SimulationError::InvalidMass(self.body.mass));
        }
        if !(self.body.radius.is_finite() && self.body.radius >= 0.) {
            return Err(SimulationError::InvalidRadius(self.body.radius));
        }
        for (i, orbiter) in self.orbiters.iter().enumerate() {
            if !orbiter.position.is_finite() || !orbiter.velocity.is_finite() {
                return Err(SimulationError::InvalidOrbiter { orbiter: i });
            }
            if !orbiter.dropoff.is_finite() {
                return Err(SimulationError::InvalidDropoff { orbiter: i, dropoff: orbiter.dropoff });
            }
            if orbiter.position == self.body.position {
                return Err(SimulationError::CoincidentOrbiter { orbiter: i });
            }
        }
        Ok(())
    }

    /// Index of the first orbiter whose position or velocity is no longer finite
    pub fn first_non_finite_orbiter(&self) -> Option<usize> {
        self.orbiters.iter()
            .position(|orbiter| !orbiter.position.is_finite() || !orbiter.velocity.is_finite())
    }

    /// Kinetic plus potential energy per unit mass of orbiter `i`
    pub fn specific_energy(&self, i: usize) -> f64 {
        let orbiter = &self.orbiters[i];
        0.5 * orbiter.velocity.magnitude_squared() + self.gravity.specific_potential_energy(orbiter, &self.body)
    }

    /// Angular momentum per unit mass of orbiter `i` around the body (z component)
    pub fn specific_angular_momentum(&self, i: usize) -> f64 {
        let orbiter = &self.orbiters[i];
        (orbiter.position - self.body.position).cross(orbiter.velocity)
    }

    /// Distance between orbiter `i` and the body
    pub fn distance(&self, i: usize) -> f64 {
        (self.orbiters[i].position - self.body.position).magnitude()
    }
}
