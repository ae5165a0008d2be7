mod circle;
mod ellipse;
mod hyperbola;
mod line;
mod parabola;
mod triangle;

pub use circle::{Circle, PointPosition};
pub use ellipse::Ellipse;
pub use hyperbola::{Hyperbola, NearestPoint};
pub use line::{Line, LineEquation};
pub use parabola::{Opening, Parabola};
pub use triangle::{AngleClass, SideClass, Triangle};

use crate::error::Result;
use crate::math::Point2;

/// Direction of a shape's principal axis.
///
/// For a parabola this is the axis of symmetry, for an ellipse the major
/// axis, for a hyperbola the transverse axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Curves that answer point-membership and tangent/normal queries.
pub trait Conic {
    /// Returns whether `p` lies on the curve.
    fn contains(&self, p: &Point2) -> bool;

    /// Tangent line at `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is undefined at `p`.
    fn tangent_at(&self, p: &Point2) -> Result<LineEquation>;

    /// Normal line at `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is undefined at `p`.
    fn normal_at(&self, p: &Point2) -> Result<LineEquation>;
}

/// Shapes that can report where a line meets them.
pub trait LineIntersect {
    /// Points shared by the shape and `line`. Empty when they do not meet.
    fn intersect_line(&self, line: &Line) -> Vec<Point2>;
}
