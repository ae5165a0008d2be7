use std::f64::consts::PI;

use crate::error::{ConstructionError, GeometryError, Result};
use crate::math::compare::{near_zero, ON_CURVE_TOLERANCE};
use crate::math::{Point2, Vector2};

use super::circle::line_circle_points;
use super::{Conic, Line, LineEquation, LineIntersect, Orientation};

/// An axis-aligned ellipse centered at `(h, k)`.
///
/// `a` is the semi-major and `b` the semi-minor axis; the orientation says
/// whether the major axis runs along x ([`Orientation::Horizontal`]) or
/// y ([`Orientation::Vertical`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    a: f64,
    b: f64,
    h: f64,
    k: f64,
    orientation: Orientation,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonPositive`] if either semi-axis is not
    /// positive, or [`ConstructionError::MinorExceedsMajor`] if `b > a`.
    pub fn new(a: f64, b: f64, h: f64, k: f64, orientation: Orientation) -> Result<Self> {
        for (parameter, value) in [("a", a), ("b", b)] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConstructionError::NonPositive { parameter, value }.into());
            }
        }
        if b > a {
            tracing::debug!(a, b, "rejecting ellipse with minor axis longer than major");
            return Err(ConstructionError::MinorExceedsMajor { a, b }.into());
        }
        Ok(Self {
            a,
            b,
            h,
            k,
            orientation,
        })
    }

    /// Semi-major axis.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-minor axis.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the direction of the major axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.h, self.k)
    }

    /// Semi-axes measured along x and y.
    fn semi_axes_xy(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (self.a, self.b),
            Orientation::Vertical => (self.b, self.a),
        }
    }

    /// Left-hand side of `x^2/rx^2 + y^2/ry^2 = 1` at `p`.
    fn implicit(&self, p: &Point2) -> f64 {
        let (rx, ry) = self.semi_axes_xy();
        let x = p.x - self.h;
        let y = p.y - self.k;
        x * x / (rx * rx) + y * y / (ry * ry)
    }

    /// Two points at `offset` either side of the center along the major
    /// (`major = true`) or minor axis.
    fn axis_pair(&self, offset: f64, major: bool) -> (Point2, Point2) {
        let along_x = (self.orientation == Orientation::Horizontal) == major;
        if along_x {
            (
                Point2::new(self.h - offset, self.k),
                Point2::new(self.h + offset, self.k),
            )
        } else {
            (
                Point2::new(self.h, self.k - offset),
                Point2::new(self.h, self.k + offset),
            )
        }
    }

    /// Returns the eccentricity, in `[0, 1)`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        (1.0 - (self.b * self.b) / (self.a * self.a)).sqrt()
    }

    /// Distance from the center to either focus.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        (self.a * self.a - self.b * self.b).sqrt()
    }

    /// Returns the two foci on the major axis.
    #[must_use]
    pub fn foci(&self) -> (Point2, Point2) {
        self.axis_pair(self.focal_distance(), true)
    }

    /// Endpoints of the major axis.
    #[must_use]
    pub fn vertices(&self) -> (Point2, Point2) {
        self.axis_pair(self.a, true)
    }

    /// Endpoints of the minor axis.
    #[must_use]
    pub fn co_vertices(&self) -> (Point2, Point2) {
        self.axis_pair(self.b, false)
    }

    /// Returns the area of the ellipse.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.a * self.b
    }

    /// Ramanujan's first approximation of the circumference.
    #[must_use]
    pub fn perimeter_approx(&self) -> f64 {
        let (a, b) = (self.a, self.b);
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    /// Whether `p` satisfies the ellipse equation within tolerance.
    #[must_use]
    pub fn is_point_on_ellipse(&self, p: &Point2) -> bool {
        (self.implicit(p) - 1.0).abs() <= ON_CURVE_TOLERANCE
    }

    /// Strictly inside the boundary.
    #[must_use]
    pub fn is_inside(&self, p: &Point2) -> bool {
        self.implicit(p) < 1.0
    }

    /// The two y values on the ellipse at `x` (upper first), or `None` if
    /// `x` is outside the ellipse's horizontal extent.
    #[must_use]
    pub fn get_y_given_x(&self, x: f64) -> Option<(f64, f64)> {
        let (rx, ry) = self.semi_axes_xy();
        let dx = x - self.h;
        let inside = 1.0 - dx * dx / (rx * rx);
        if inside < 0.0 {
            return None;
        }
        let dy = ry * inside.sqrt();
        Some((self.k + dy, self.k - dy))
    }

    /// The two x values on the ellipse at `y` (right first), or `None` if
    /// `y` is outside the ellipse's vertical extent.
    #[must_use]
    pub fn get_x_given_y(&self, y: f64) -> Option<(f64, f64)> {
        let (rx, ry) = self.semi_axes_xy();
        let dy = y - self.k;
        let inside = 1.0 - dy * dy / (ry * ry);
        if inside < 0.0 {
            return None;
        }
        let dx = rx * inside.sqrt();
        Some((self.h + dx, self.h - dx))
    }

    /// `dy/dx` of the implicit curve through `p`; `+inf` where the tangent
    /// is vertical.
    #[must_use]
    pub fn tangent_slope_at_point(&self, p: &Point2) -> f64 {
        let (rx, ry) = self.semi_axes_xy();
        let dx = p.x - self.h;
        let dy = p.y - self.k;
        let denominator = rx * rx * dy;
        if near_zero(denominator) {
            return f64::INFINITY;
        }
        -(ry * ry * dx) / denominator
    }

    /// Tangent line through `p`.
    #[must_use]
    pub fn tangent_line_equation(&self, p: &Point2) -> LineEquation {
        LineEquation::through(p, self.tangent_slope_at_point(p))
    }

    /// Slope of the normal at `p`; `+inf` where the normal is vertical.
    #[must_use]
    pub fn normal_slope_at_point(&self, p: &Point2) -> f64 {
        let (rx, ry) = self.semi_axes_xy();
        let dx = p.x - self.h;
        let dy = p.y - self.k;
        let denominator = ry * ry * dx;
        if near_zero(denominator) {
            return f64::INFINITY;
        }
        (rx * rx * dy) / denominator
    }

    /// Normal line through `p`.
    #[must_use]
    pub fn normal_line_equation(&self, p: &Point2) -> LineEquation {
        LineEquation::through(p, self.normal_slope_at_point(p))
    }

    /// Point reflection of `p` through the center.
    #[must_use]
    pub fn reflect_point_across_center(&self, p: &Point2) -> Point2 {
        Point2::new(2.0 * self.h - p.x, 2.0 * self.k - p.y)
    }

    /// The line containing the major axis.
    #[must_use]
    pub fn axis_of_symmetry(&self) -> LineEquation {
        match self.orientation {
            Orientation::Horizontal => LineEquation::horizontal(self.k),
            Orientation::Vertical => LineEquation::Vertical { x: self.h },
        }
    }

    /// Point at parameter `t_deg` of `(h + rx cos t, k + ry sin t)`.
    #[must_use]
    pub fn parametric_point(&self, t_deg: f64) -> Point2 {
        let (rx, ry) = self.semi_axes_xy();
        let t = t_deg.to_radians();
        Point2::new(self.h + rx * t.cos(), self.k + ry * t.sin())
    }

    /// Points where the infinite line meets the ellipse.
    ///
    /// The line is mapped into coordinates where the ellipse is the unit
    /// circle, solved there, and mapped back.
    #[must_use]
    pub fn line_intersections(&self, line: &Line) -> Vec<Point2> {
        let (rx, ry) = self.semi_axes_xy();
        let origin = Point2::new((line.p1().x - self.h) / rx, (line.p1().y - self.k) / ry);
        let d = line.direction();
        let dir = Vector2::new(d.x / rx, d.y / ry);
        line_circle_points(&origin, &dir, &Point2::origin(), 1.0)
            .into_iter()
            .map(|q| Point2::new(self.h + rx * q.x, self.k + ry * q.y))
            .collect()
    }

    /// Returns the standard-form equation as text.
    #[must_use]
    pub fn equation(&self) -> String {
        let (rx, ry) = self.semi_axes_xy();
        format!(
            "(x - {})^2/{} + (y - {})^2/{} = 1",
            self.h,
            rx * rx,
            self.k,
            ry * ry
        )
    }
}

impl Conic for Ellipse {
    fn contains(&self, p: &Point2) -> bool {
        self.is_point_on_ellipse(p)
    }

    fn tangent_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.is_point_on_ellipse(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "ellipse" }.into());
        }
        Ok(self.tangent_line_equation(p))
    }

    fn normal_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.is_point_on_ellipse(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "ellipse" }.into());
        }
        Ok(self.normal_line_equation(p))
    }
}

impl LineIntersect for Ellipse {
    fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        self.line_intersections(line)
    }
}
