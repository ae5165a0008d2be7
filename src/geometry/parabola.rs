use crate::error::{ConstructionError, GeometryError, Result};
use crate::math::compare::{approx_eq, near_zero, ON_CURVE_TOLERANCE};
use crate::math::quadratic::{real_roots, QuadraticRoots};
use crate::math::Point2;

use super::{Conic, Line, LineEquation, LineIntersect, Orientation};

/// Which way a parabola opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    Up,
    Down,
    Right,
    Left,
}

/// A parabola `y = a*x^2 + b*x + c` ([`Orientation::Vertical`]) or
/// `x = a*y^2 + b*y + c` ([`Orientation::Horizontal`]).
///
/// In the methods below the *free* coordinate is `x` for a vertical
/// parabola and `y` for a horizontal one.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola {
    a: f64,
    b: f64,
    c: f64,
    orientation: Orientation,
}

impl Parabola {
    /// Creates a new parabola.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroLeadingCoefficient`] if `a` is zero.
    pub fn new(a: f64, b: f64, c: f64, orientation: Orientation) -> Result<Self> {
        if near_zero(a) {
            return Err(ConstructionError::ZeroLeadingCoefficient.into());
        }
        Ok(Self {
            a,
            b,
            c,
            orientation,
        })
    }

    /// Returns the quadratic coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the direction of the axis of symmetry.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `a*t^2 + b*t + c`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.a * t * t + self.b * t + self.c
    }

    /// Point with free coordinate `t`.
    #[must_use]
    pub fn parametric_point(&self, t: f64) -> Point2 {
        self.point_at(t)
    }

    fn point_at(&self, t: f64) -> Point2 {
        match self.orientation {
            Orientation::Vertical => Point2::new(t, self.evaluate(t)),
            Orientation::Horizontal => Point2::new(self.evaluate(t), t),
        }
    }

    /// Free coordinate of the axis of symmetry, `-b / 2a`.
    fn axis_value(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    /// Returns the vertex of the parabola.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        self.point_at(self.axis_value())
    }

    /// Vertex shifted by `1 / 4a` along the axis.
    #[must_use]
    pub fn focus(&self) -> Point2 {
        let v = self.vertex();
        let p = 1.0 / (4.0 * self.a);
        match self.orientation {
            Orientation::Vertical => Point2::new(v.x, v.y + p),
            Orientation::Horizontal => Point2::new(v.x + p, v.y),
        }
    }

    /// Distance from vertex to focus.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        1.0 / (4.0 * self.a.abs())
    }

    /// Line at distance `1 / 4a` behind the vertex.
    #[must_use]
    pub fn directrix(&self) -> LineEquation {
        let v = self.vertex();
        let p = 1.0 / (4.0 * self.a);
        match self.orientation {
            Orientation::Vertical => LineEquation::horizontal(v.y - p),
            Orientation::Horizontal => LineEquation::Vertical { x: v.x - p },
        }
    }

    /// Line through the vertex and the focus.
    #[must_use]
    pub fn axis_of_symmetry(&self) -> LineEquation {
        match self.orientation {
            Orientation::Vertical => LineEquation::Vertical {
                x: self.axis_value(),
            },
            Orientation::Horizontal => LineEquation::horizontal(self.axis_value()),
        }
    }

    /// Returns the way the parabola opens.
    #[must_use]
    pub fn direction(&self) -> Opening {
        match (self.orientation, self.a > 0.0) {
            (Orientation::Vertical, true) => Opening::Up,
            (Orientation::Vertical, false) => Opening::Down,
            (Orientation::Horizontal, true) => Opening::Right,
            (Orientation::Horizontal, false) => Opening::Left,
        }
    }

    /// `b^2 - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns the length of the chord through the focus, `1 / |a|`.
    #[must_use]
    pub fn latus_rectum_length(&self) -> f64 {
        1.0 / self.a.abs()
    }

    /// Zeros of `a*t^2 + b*t + c`.
    #[must_use]
    pub fn roots(&self) -> QuadraticRoots {
        QuadraticRoots::solve(self.a, self.b, self.c)
    }

    /// Whether `p` satisfies the parabola equation within tolerance.
    #[must_use]
    pub fn is_point_on_parabola(&self, p: &Point2) -> bool {
        let (free, dependent) = self.split(p);
        (dependent - self.evaluate(free)).abs() <= ON_CURVE_TOLERANCE
    }

    /// Returns `(free, dependent)` coordinates of `p`.
    fn split(&self, p: &Point2) -> (f64, f64) {
        match self.orientation {
            Orientation::Vertical => (p.x, p.y),
            Orientation::Horizontal => (p.y, p.x),
        }
    }

    /// Returns whether `p` is on the curve and equidistant from the focus
    /// and the directrix.
    #[must_use]
    pub fn focus_directrix_property(&self, p: &Point2) -> bool {
        if !self.is_point_on_parabola(p) {
            return false;
        }
        let to_focus = nalgebra::distance(p, &self.focus());
        let to_directrix = self.directrix().to_line().distance_from_point(p);
        approx_eq(to_focus, to_directrix)
    }

    fn require_on_curve(&self, p: &Point2) -> Result<()> {
        if self.is_point_on_parabola(p) {
            Ok(())
        } else {
            Err(GeometryError::PointNotOnCurve { curve: "parabola" }.into())
        }
    }

    /// `dy/dx` at `p`; infinite where a horizontal parabola has a vertical
    /// tangent.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PointNotOnCurve`] if `p` is not on the curve.
    pub fn tangent_slope_at_point(&self, p: &Point2) -> Result<f64> {
        self.require_on_curve(p)?;
        Ok(match self.orientation {
            Orientation::Vertical => 2.0 * self.a * p.x + self.b,
            Orientation::Horizontal => {
                let dx_dy = 2.0 * self.a * p.y + self.b;
                if near_zero(dx_dy) {
                    f64::INFINITY
                } else {
                    1.0 / dx_dy
                }
            }
        })
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::PointNotOnCurve`] if `p` is not on the curve.
    pub fn tangent_line_at_point(&self, p: &Point2) -> Result<LineEquation> {
        let m = self.tangent_slope_at_point(p)?;
        Ok(LineEquation::through(p, m))
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::PointNotOnCurve`] if `p` is not on the curve.
    pub fn normal_line_at_point(&self, p: &Point2) -> Result<LineEquation> {
        let m = self.tangent_slope_at_point(p)?;
        Ok(if near_zero(m) {
            LineEquation::Vertical { x: p.x }
        } else if m.is_infinite() {
            LineEquation::horizontal(p.y)
        } else {
            LineEquation::through(p, -1.0 / m)
        })
    }

    /// Mirror image of `p` across the axis of symmetry.
    #[must_use]
    pub fn mirror_point_across_axis(&self, p: &Point2) -> Point2 {
        let axis = self.axis_value();
        match self.orientation {
            Orientation::Vertical => Point2::new(2.0 * axis - p.x, p.y),
            Orientation::Horizontal => Point2::new(p.x, 2.0 * axis - p.y),
        }
    }

    /// Points where the infinite line meets the parabola.
    ///
    /// The line is substituted into the parabola's equation and the
    /// resulting quadratic solved; `b^2` within relative tolerance of `4ac`
    /// yields the single tangent point. For a horizontal parabola a line of slope zero
    /// is reported as not intersecting.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line) -> Vec<Point2> {
        match (self.orientation, line.equation()) {
            (Orientation::Vertical, LineEquation::Vertical { x }) => {
                vec![Point2::new(x, self.evaluate(x))]
            }
            (Orientation::Vertical, LineEquation::SlopeIntercept { slope, intercept }) => {
                real_roots(self.a, self.b - slope, self.c - intercept)
                    .into_iter()
                    .map(|x| Point2::new(x, slope * x + intercept))
                    .collect()
            }
            (Orientation::Horizontal, LineEquation::Vertical { x }) => {
                real_roots(self.a, self.b, self.c - x)
                    .into_iter()
                    .map(|y| Point2::new(x, y))
                    .collect()
            }
            (Orientation::Horizontal, LineEquation::SlopeIntercept { slope, .. })
                if near_zero(slope) =>
            {
                Vec::new()
            }
            (Orientation::Horizontal, LineEquation::SlopeIntercept { slope, intercept }) => {
                // x = (y - intercept) / slope
                real_roots(self.a, self.b - 1.0 / slope, self.c + intercept / slope)
                    .into_iter()
                    .map(|y| Point2::new((y - intercept) / slope, y))
                    .collect()
            }
        }
    }

    /// Returns the equation as text.
    #[must_use]
    pub fn equation(&self) -> String {
        match self.orientation {
            Orientation::Vertical => format!("y = {}x^2 + {}x + {}", self.a, self.b, self.c),
            Orientation::Horizontal => format!("x = {}y^2 + {}y + {}", self.a, self.b, self.c),
        }
    }

    /// Vertex form `(x - h)^2 = 4p(y - k)` or its horizontal analog, with
    /// `4p = 1/a`.
    #[must_use]
    pub fn focus_directrix_form(&self) -> String {
        let v = self.vertex();
        let four_p = 1.0 / self.a;
        match self.orientation {
            Orientation::Vertical => format!("(x - {})^2 = {}(y - {})", v.x, four_p, v.y),
            Orientation::Horizontal => format!("(y - {})^2 = {}(x - {})", v.y, four_p, v.x),
        }
    }
}

impl Conic for Parabola {
    fn contains(&self, p: &Point2) -> bool {
        self.is_point_on_parabola(p)
    }

    fn tangent_at(&self, p: &Point2) -> Result<LineEquation> {
        self.tangent_line_at_point(p)
    }

    fn normal_at(&self, p: &Point2) -> Result<LineEquation> {
        self.normal_line_at_point(p)
    }
}

impl LineIntersect for Parabola {
    fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        self.intersection_with_line(line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn vertical(a: f64, b: f64, c: f64) -> Parabola {
        Parabola::new(a, b, c, Orientation::Vertical).unwrap()
    }

    fn horizontal(a: f64, b: f64, c: f64) -> Parabola {
        Parabola::new(a, b, c, Orientation::Horizontal).unwrap()
    }

    #[test]
    fn zero_leading_coefficient_rejected() {
        assert!(Parabola::new(0.0, 1.0, 1.0, Orientation::Vertical).is_err());
    }

    #[test]
    fn unit_parabola_landmarks() {
        let p = vertical(1.0, 0.0, 0.0);
        assert_eq!(p.vertex(), Point2::new(0.0, 0.0));
        assert_eq!(p.focus(), Point2::new(0.0, 0.25));
        assert_eq!(p.directrix(), LineEquation::horizontal(-0.25));
        assert_relative_eq!(p.focal_length(), 0.25);
        assert_relative_eq!(p.latus_rectum_length(), 1.0);
        assert_eq!(p.direction(), Opening::Up);
    }

    #[test]
    fn shifted_vertex() {
        // y = 2(x - 1)^2 + 3
        let p = vertical(2.0, -4.0, 5.0);
        assert!((p.vertex() - Point2::new(1.0, 3.0)).norm() < TOL);
        assert_eq!(p.axis_of_symmetry(), LineEquation::Vertical { x: 1.0 });
        assert_eq!(p.direction(), Opening::Up);
        assert_eq!(vertical(-1.0, 0.0, 0.0).direction(), Opening::Down);
    }

    #[test]
    fn roots_are_tagged() {
        assert!(vertical(1.0, 0.0, 1.0).roots().is_complex());
        assert_relative_eq!(vertical(1.0, 0.0, 1.0).discriminant(), -4.0);
        assert_eq!(vertical(1.0, 0.0, -4.0).roots(), QuadraticRoots::Distinct(2.0, -2.0));
        assert_eq!(vertical(1.0, 0.0, 0.0).roots(), QuadraticRoots::Repeated(0.0));
    }

    #[test]
    fn membership_and_focus_directrix() {
        let p = vertical(1.0, 0.0, 0.0);
        assert!(p.is_point_on_parabola(&Point2::new(2.0, 4.0)));
        assert!(!p.is_point_on_parabola(&Point2::new(2.0, 4.1)));
        assert!(p.focus_directrix_property(&Point2::new(2.0, 4.0)));
        assert!(!p.focus_directrix_property(&Point2::new(2.0, 5.0)));
    }

    #[test]
    fn tangent_and_normal_vertical() {
        let p = vertical(1.0, 0.0, 0.0);
        let on = Point2::new(1.0, 1.0);
        assert_relative_eq!(p.tangent_slope_at_point(&on).unwrap(), 2.0);
        let tangent = p.tangent_line_at_point(&on).unwrap();
        assert_eq!(
            tangent,
            LineEquation::SlopeIntercept {
                slope: 2.0,
                intercept: -1.0
            }
        );
        let normal = p.normal_line_at_point(&on).unwrap();
        assert_relative_eq!(normal.slope(), -0.5);
        // Vertex: horizontal tangent, vertical normal.
        assert_eq!(
            p.normal_line_at_point(&Point2::origin()).unwrap(),
            LineEquation::Vertical { x: 0.0 }
        );
    }

    #[test]
    fn tangent_off_curve_fails() {
        let p = vertical(1.0, 0.0, 0.0);
        assert!(p.tangent_slope_at_point(&Point2::new(1.0, 2.0)).is_err());
        assert!(p.normal_line_at_point(&Point2::new(1.0, 2.0)).is_err());
    }

    #[test]
    fn horizontal_parabola() {
        let p = horizontal(1.0, 0.0, 0.0);
        assert_eq!(p.vertex(), Point2::new(0.0, 0.0));
        assert_eq!(p.focus(), Point2::new(0.25, 0.0));
        assert_eq!(p.directrix(), LineEquation::Vertical { x: -0.25 });
        assert_eq!(p.direction(), Opening::Right);
        assert_relative_eq!(p.tangent_slope_at_point(&Point2::new(1.0, 1.0)).unwrap(), 0.5);
        assert_eq!(
            p.tangent_slope_at_point(&Point2::origin()).unwrap(),
            f64::INFINITY
        );
        assert_eq!(
            p.normal_line_at_point(&Point2::origin()).unwrap(),
            LineEquation::horizontal(0.0)
        );
    }

    #[test]
    fn mirror_across_axis() {
        let p = vertical(1.0, -2.0, 0.0);
        assert_eq!(p.mirror_point_across_axis(&Point2::new(3.0, 5.0)), Point2::new(-1.0, 5.0));
        let h = horizontal(1.0, -2.0, 0.0);
        assert_eq!(h.mirror_point_across_axis(&Point2::new(3.0, 5.0)), Point2::new(3.0, -3.0));
    }

    #[test]
    fn line_intersection_vertical_orientation() {
        let p = vertical(1.0, 0.0, 0.0);
        let line = Line::new(Point2::new(0.0, 2.0), Point2::new(1.0, 3.0));
        let mut pts = p.intersection_with_line(&line);
        pts.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(pts.len(), 2);
        assert!((pts[0] - Point2::new(-1.0, 1.0)).norm() < TOL);
        assert!((pts[1] - Point2::new(2.0, 4.0)).norm() < TOL);

        let tangent = Line::new(Point2::new(0.0, -1.0), Point2::new(1.0, 1.0));
        let pts = p.intersection_with_line(&tangent);
        assert_eq!(pts.len(), 1);
        assert!((pts[0] - Point2::new(1.0, 1.0)).norm() < TOL);

        let below = Line::new(Point2::new(0.0, -1.0), Point2::new(1.0, -1.0));
        assert!(p.intersection_with_line(&below).is_empty());

        let vertical_line = Line::new(Point2::new(3.0, 0.0), Point2::new(3.0, 1.0));
        assert_eq!(p.intersect_line(&vertical_line), vec![Point2::new(3.0, 9.0)]);
    }

    #[test]
    fn line_intersection_at_small_scale() {
        let p = vertical(1e-4, 0.0, 0.0);
        let line = Line::new(Point2::new(-1.0, 1e-7), Point2::new(1.0, 1e-7));
        let mut pts = p.intersection_with_line(&line);
        pts.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[0].x, -(1e-3_f64.sqrt()), epsilon = 1e-12);
        assert_relative_eq!(pts[1].x, 1e-3_f64.sqrt(), epsilon = 1e-12);
        assert!(pts.iter().all(|q| p.is_point_on_parabola(q)));
    }

    #[test]
    fn line_intersection_horizontal_orientation() {
        let p = horizontal(1.0, 0.0, 0.0);
        let line = Line::new(Point2::new(2.0, 0.0), Point2::new(3.0, 1.0));
        let mut pts = p.intersection_with_line(&line);
        pts.sort_by(|a, b| a.y.total_cmp(&b.y));
        assert_eq!(pts.len(), 2);
        assert!((pts[0] - Point2::new(1.0, -1.0)).norm() < TOL);
        assert!((pts[1] - Point2::new(4.0, 2.0)).norm() < TOL);
        assert!(pts.iter().all(|q| p.is_point_on_parabola(q)));

        let vertical_line = Line::new(Point2::new(4.0, 0.0), Point2::new(4.0, 1.0));
        assert_eq!(p.intersection_with_line(&vertical_line).len(), 2);

        let flat = Line::new(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        assert!(p.intersection_with_line(&flat).is_empty());
    }

    #[test]
    fn equation_text() {
        let p = vertical(1.0, 2.0, 3.0);
        assert_eq!(p.equation(), "y = 1x^2 + 2x + 3");
        assert_eq!(vertical(2.0, -4.0, 5.0).focus_directrix_form(), "(x - 1)^2 = 0.5(y - 3)");
    }
}
