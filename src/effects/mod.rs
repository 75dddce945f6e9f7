mod gravity;

pub use self::gravity::PowerLawGravity;
