pub mod compare;
pub mod minimize;
pub mod point_2d;
pub mod quadratic;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for near-zero checks.
pub const TOLERANCE: f64 = 1e-10;
