use std::fmt;

use crate::error::{DomainError, GeometryError, Result};
use crate::math::compare::{approx_eq, near_zero};
use crate::math::{Point2, Vector2};

/// Equation of an infinite line: `y = slope * x + intercept`, or `x = const`
/// for vertical lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    SlopeIntercept { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl LineEquation {
    /// The line through `p` with the given slope. An infinite slope of
    /// either sign gives a vertical line.
    #[must_use]
    pub fn through(p: &Point2, slope: f64) -> Self {
        if slope.is_infinite() {
            Self::Vertical { x: p.x }
        } else {
            Self::SlopeIntercept {
                slope,
                intercept: p.y - slope * p.x,
            }
        }
    }

    /// The horizontal line `y = y`.
    #[must_use]
    pub fn horizontal(y: f64) -> Self {
        Self::SlopeIntercept {
            slope: 0.0,
            intercept: y,
        }
    }

    /// Slope of the line; `+inf` when vertical.
    #[must_use]
    pub fn slope(&self) -> f64 {
        match *self {
            Self::SlopeIntercept { slope, .. } => slope,
            Self::Vertical { .. } => f64::INFINITY,
        }
    }

    /// The y-intercept, if the line is not vertical.
    #[must_use]
    pub fn intercept(&self) -> Option<f64> {
        match *self {
            Self::SlopeIntercept { intercept, .. } => Some(intercept),
            Self::Vertical { .. } => None,
        }
    }

    /// Returns whether `p` satisfies the equation.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        match *self {
            Self::SlopeIntercept { slope, intercept } => approx_eq(p.y, slope * p.x + intercept),
            Self::Vertical { x } => approx_eq(p.x, x),
        }
    }

    /// Two-point form of the same line.
    #[must_use]
    pub fn to_line(&self) -> Line {
        match *self {
            Self::SlopeIntercept { slope, intercept } => Line::new(
                Point2::new(0.0, intercept),
                Point2::new(1.0, slope + intercept),
            ),
            Self::Vertical { x } => Line::new(Point2::new(x, 0.0), Point2::new(x, 1.0)),
        }
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlopeIntercept { slope, intercept } => write!(f, "y = {slope}x + {intercept}"),
            Self::Vertical { x } => write!(f, "x = {x}"),
        }
    }
}

/// An infinite line (or segment, where noted) through two points.
///
/// The two points are expected to differ. A zero-length line is accepted by
/// [`Line::new`]; queries that need a direction report it as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    p1: Point2,
    p2: Point2,
}

impl Line {
    /// Creates the line through `p1` and `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// First defining point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Second defining point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    fn is_degenerate(&self) -> bool {
        near_zero(self.direction().norm())
    }

    /// Distance between the defining points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }

    /// Slope `dy/dx`; `+inf` for a vertical line pointing up (or zero
    /// length), `-inf` for one pointing down.
    #[must_use]
    pub fn slope(&self) -> f64 {
        let d = self.direction();
        if near_zero(d.x) {
            if d.y >= 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            d.y / d.x
        }
    }

    /// The line as `y = mx + c`, or `x = c` when vertical.
    #[must_use]
    pub fn equation(&self) -> LineEquation {
        LineEquation::through(&self.p1, self.slope())
    }

    /// The y value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::VerticalLine`] if the line is vertical.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        match self.equation() {
            LineEquation::SlopeIntercept { slope, intercept } => Ok(slope * x + intercept),
            LineEquation::Vertical { .. } => Err(DomainError::VerticalLine { x }.into()),
        }
    }

    /// The x value at `y`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::HorizontalLine`] if the line is horizontal.
    pub fn evaluate_y(&self, y: f64) -> Result<f64> {
        match self.equation() {
            LineEquation::SlopeIntercept { slope, .. } if near_zero(slope) => {
                Err(DomainError::HorizontalLine { y }.into())
            }
            LineEquation::SlopeIntercept { slope, intercept } => Ok((y - intercept) / slope),
            LineEquation::Vertical { x } => Ok(x),
        }
    }

    /// Slope of any line perpendicular to this one.
    #[must_use]
    pub fn perpendicular_slope(&self) -> f64 {
        let m = self.slope();
        if m.is_infinite() {
            0.0
        } else if near_zero(m) {
            f64::INFINITY
        } else {
            -1.0 / m
        }
    }

    /// The perpendicular to this line passing through `p`.
    #[must_use]
    pub fn perpendicular_through(&self, p: &Point2) -> Line {
        let d = self.direction();
        Line::new(*p, p + Vector2::new(-d.y, d.x))
    }

    /// The perpendicular through the midpoint.
    #[must_use]
    pub fn perpendicular_bisector(&self) -> Line {
        self.perpendicular_through(&self.midpoint())
    }

    /// The altitude dropped onto this line from `vertex`.
    #[must_use]
    pub fn altitude(&self, vertex: &Point2) -> Line {
        self.perpendicular_through(vertex)
    }

    /// Returns whether the slopes multiply to -1, treating a vertical and a
    /// horizontal line as perpendicular.
    #[must_use]
    pub fn is_perpendicular(&self, other: &Line) -> bool {
        let m1 = self.slope();
        let m2 = other.slope();
        match (m1.is_infinite(), m2.is_infinite()) {
            (true, true) => false,
            (true, false) => near_zero(m2),
            (false, true) => near_zero(m1),
            (false, false) => approx_eq(m1 * m2, -1.0),
        }
    }

    /// Returns whether the slopes are equal. Vertical lines are parallel to
    /// each other regardless of the sign of their infinite slope.
    #[must_use]
    pub fn is_parallel(&self, other: &Line) -> bool {
        let m1 = self.slope();
        let m2 = other.slope();
        if m1.is_infinite() || m2.is_infinite() {
            return m1.is_infinite() && m2.is_infinite();
        }
        approx_eq(m1, m2)
    }

    /// Returns whether `p` lies on the infinite line.
    #[must_use]
    pub fn point_on_line(&self, p: &Point2) -> bool {
        self.equation().contains(p)
    }

    /// Inclination in degrees, in `[-90, 90]`.
    #[must_use]
    pub fn angle_with_x_axis(&self) -> f64 {
        self.slope().atan().to_degrees()
    }

    /// Perpendicular distance from `p` to the infinite line, or 0 for a
    /// zero-length line.
    #[must_use]
    pub fn distance_from_point(&self, p: &Point2) -> f64 {
        let d = self.direction();
        let denominator = d.norm();
        if near_zero(denominator) {
            return 0.0;
        }
        let numerator =
            (d.y * p.x - d.x * p.y + self.p2.x * self.p1.y - self.p2.y * self.p1.x).abs();
        numerator / denominator
    }

    /// Mirror image of `p` across the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the defining points coincide.
    pub fn reflect_point(&self, p: &Point2) -> Result<Point2> {
        if self.is_degenerate() {
            return Err(GeometryError::Degenerate("line needs two distinct points".into()).into());
        }
        // Implicit form a*x + b*y + c = 0.
        let d = self.direction();
        let a = d.y;
        let b = -d.x;
        let c = d.x * self.p1.y - d.y * self.p1.x;
        let s = (a * p.x + b * p.y + c) / (a * a + b * b);
        Ok(Point2::new(p.x - 2.0 * a * s, p.y - 2.0 * b * s))
    }

    /// Orthogonal projection of `p` onto the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the defining points coincide.
    pub fn project_point(&self, p: &Point2) -> Result<Point2> {
        if self.is_degenerate() {
            return Err(GeometryError::Degenerate("line needs two distinct points".into()).into());
        }
        let d = self.direction();
        let scale = d.dot(&(p - self.p1)) / d.norm_squared();
        Ok(self.p1 + d * scale)
    }

    /// Crossing point of the two infinite lines, or `None` if they are
    /// parallel (or either is zero-length).
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        let d1 = self.direction();
        let d2 = other.direction();
        let scale = d1.norm() * d2.norm();
        if near_zero(scale) {
            return None;
        }
        let cross = d1.x * d2.y - d1.y * d2.x;
        if near_zero(cross / scale) {
            return None;
        }
        let w = other.p1 - self.p1;
        let t = (w.x * d2.y - w.y * d2.x) / cross;
        Some(self.p1 + d1 * t)
    }
}
