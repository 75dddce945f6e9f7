use super::Vector2;

/// Single attracting mass, fixed at the origin of the coordinate system.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    #[serde(skip)]
    pub position: Vector2, // Always the origin
    pub mass: f64, // kg
    pub radius: f64, // m
}

impl Body {
    pub fn new(mass: f64, radius: f64) -> Body {
        Body {
            position: Vector2::zero(),
            mass: mass,
            radius: radius,
        }
    }
}
