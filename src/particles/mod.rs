mod vector2;
mod body;
mod orbiter;
pub mod universe;

pub use self::vector2::Vector2;
pub use self::body::Body;
pub use self::orbiter::Orbiter;
pub use self::universe::Universe;
pub use self::universe::Snapshot;
