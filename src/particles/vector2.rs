use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Two dimensional vector value. Every operation returns a new value.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x: x, y: y }
    }

    pub const fn zero() -> Vector2 {
        Vector2 { x: 0., y: 0. }
    }

    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector with the same direction. The zero vector has no direction
    /// and is returned unchanged.
    pub fn normalized(&self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            return Vector2::zero();
        }
        Vector2 { x: self.x / magnitude, y: self.y / magnitude }
    }

    /// z component of the 3D cross product (self, 0) x (other, 0)
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2 { x: self.x + other.x, y: self.y + other.y }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2 { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scale: f64) -> Vector2 {
        Vector2 { x: self.x * scale, y: self.y * scale }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2 { x: -self.x, y: -self.y }
    }
}
