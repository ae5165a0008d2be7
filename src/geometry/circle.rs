use std::f64::consts::PI;

use crate::error::{ConstructionError, GeometryError, Result};
use crate::math::compare::{approx_eq, near_zero, ON_CURVE_TOLERANCE};
use crate::math::{Point2, Rotation2, Vector2};

use super::{Conic, Line, LineEquation, LineIntersect};

/// Position of a point relative to a closed curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPosition {
    Inside,
    On,
    Outside,
}

/// A circle given by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonPositive`] if the radius is not
    /// positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(ConstructionError::NonPositive {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the diameter of the circle.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Returns the area of the circle.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// `(x - h)^2 + (y - k)^2 = r^2` as text.
    #[must_use]
    pub fn equation(&self) -> String {
        format!(
            "(x - {})^2 + (y - {})^2 = {}",
            self.center.x,
            self.center.y,
            self.radius * self.radius
        )
    }

    /// Distance from `p` to the center.
    #[must_use]
    pub fn distance_from_point(&self, p: &Point2) -> f64 {
        nalgebra::distance(&self.center, p)
    }

    /// Classifies `p` against the circle. Points within tolerance of the
    /// boundary count as [`PointPosition::On`].
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> PointPosition {
        let d = self.distance_from_point(p);
        if approx_eq(d, self.radius) {
            PointPosition::On
        } else if d < self.radius {
            PointPosition::Inside
        } else {
            PointPosition::Outside
        }
    }

    /// Tangent lines through `p`.
    ///
    /// One line for a boundary point, two for an exterior point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PointInsideCircle`] if `p` is inside.
    pub fn tangent_from_point(&self, p: &Point2) -> Result<Vec<LineEquation>> {
        match self.contains_point(p) {
            PointPosition::Inside => Err(GeometryError::PointInsideCircle.into()),
            PointPosition::On => {
                let radius_line = Line::new(self.center, *p);
                Ok(vec![LineEquation::through(
                    p,
                    radius_line.perpendicular_slope(),
                )])
            }
            PointPosition::Outside => {
                let d = self.distance_from_point(p);
                let u: Vector2 = (p - self.center) / d;
                let theta = (self.radius / d).asin();
                tracing::trace!(
                    distance = d,
                    half_angle = theta,
                    "two tangents from exterior point"
                );

                let tangents = [theta, -theta]
                    .into_iter()
                    .map(|angle| {
                        let t = Rotation2::new(angle) * u;
                        let slope = if near_zero(t.x) { f64::INFINITY } else { t.y / t.x };
                        LineEquation::through(p, slope)
                    })
                    .collect();
                Ok(tangents)
            }
        }
    }

    /// Point on the circle at `angle_deg` from the +x direction.
    #[must_use]
    pub fn point_on_circumference(&self, angle_deg: f64) -> Point2 {
        let t = angle_deg.to_radians();
        Point2::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
        )
    }

    /// Returns whether the line cuts through the circle. A tangent line
    /// does not count.
    #[must_use]
    pub fn intersects_line(&self, line: &Line) -> bool {
        line.distance_from_point(&self.center) < self.radius
    }

    /// Points where the infinite line meets the circle: none, one (tangent)
    /// or two.
    #[must_use]
    pub fn line_intersections(&self, line: &Line) -> Vec<Point2> {
        line_circle_points(line.p1(), &line.direction(), &self.center, self.radius)
    }

    /// Returns whether the two circles share at least one point.
    #[must_use]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let d = self.distance_from_point(&other.center);
        let inner = (self.radius - other.radius).abs();
        let outer = self.radius + other.radius;
        (d >= inner || approx_eq(d, inner)) && (d <= outer || approx_eq(d, outer))
    }

    /// Returns whether the circles touch at exactly one point, internally
    /// or externally.
    #[must_use]
    pub fn is_tangent_to(&self, other: &Circle) -> bool {
        let d = self.distance_from_point(&other.center);
        let inner = (self.radius - other.radius).abs();
        let outer = self.radius + other.radius;
        // Concentric circles are either identical or disjoint.
        if near_zero(d) {
            return false;
        }
        approx_eq(d, inner) || approx_eq(d, outer)
    }

    /// Moves the circle by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center += Vector2::new(dx, dy);
    }

    /// Length of the arc subtending `angle_deg`.
    #[must_use]
    pub fn arc_length(&self, angle_deg: f64) -> f64 {
        angle_deg / 360.0 * self.circumference()
    }

    /// Area of the sector subtending `angle_deg`.
    #[must_use]
    pub fn sector_area(&self, angle_deg: f64) -> f64 {
        angle_deg / 360.0 * self.area()
    }

    /// Length of the chord subtending `angle_deg`.
    #[must_use]
    pub fn chord_length(&self, angle_deg: f64) -> f64 {
        2.0 * self.radius * (angle_deg.to_radians() / 2.0).sin()
    }

    /// Point reflection of `p` through the center.
    #[must_use]
    pub fn mirror_point(&self, p: &Point2) -> Point2 {
        self.center + (self.center - p)
    }
}

/// Points where the line `origin + t * dir` meets the circle of `radius`
/// about `center`.
///
/// Tangency compares the center-to-line distance with the radius, so the
/// decision does not depend on the length of `dir` or on the scale of the
/// figure.
pub(super) fn line_circle_points(
    origin: &Point2,
    dir: &Vector2,
    center: &Point2,
    radius: f64,
) -> Vec<Point2> {
    let len = dir.norm();
    if near_zero(len) {
        return Vec::new();
    }
    let u = dir / len;
    let foot = origin + u * u.dot(&(center - origin));
    let h = nalgebra::distance(&foot, center);
    if approx_eq(h, radius) {
        vec![foot]
    } else if h > radius {
        Vec::new()
    } else {
        let half = (radius * radius - h * h).sqrt();
        vec![foot + u * half, foot - u * half]
    }
}

impl Conic for Circle {
    fn contains(&self, p: &Point2) -> bool {
        (self.distance_from_point(p) - self.radius).abs() <= ON_CURVE_TOLERANCE
    }

    fn tangent_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.contains(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "circle" }.into());
        }
        Ok(LineEquation::through(
            p,
            Line::new(self.center, *p).perpendicular_slope(),
        ))
    }

    fn normal_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.contains(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "circle" }.into());
        }
        Ok(Line::new(self.center, *p).equation())
    }
}

impl LineIntersect for Circle {
    fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        self.line_intersections(line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r).unwrap()
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Point2::origin(), 0.0).is_err());
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
    }

    #[test]
    fn metrics() {
        let c = circle(0.0, 0.0, 2.0);
        assert_relative_eq!(c.diameter(), 4.0);
        assert_relative_eq!(c.circumference(), 4.0 * PI);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_eq!(c.equation(), "(x - 0)^2 + (y - 0)^2 = 4");
    }

    #[test]
    fn point_on_boundary() {
        let c = circle(0.0, 0.0, 5.0);
        let p = Point2::new(3.0, 4.0);
        assert_relative_eq!(c.distance_from_point(&p), 5.0);
        assert_eq!(c.contains_point(&p), PointPosition::On);
        assert_eq!(c.contains_point(&Point2::new(1.0, 1.0)), PointPosition::Inside);
        assert_eq!(c.contains_point(&Point2::new(6.0, 1.0)), PointPosition::Outside);
    }

    #[test]
    fn tangent_from_inside_fails() {
        let c = circle(0.0, 0.0, 5.0);
        let err = c.tangent_from_point(&Point2::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoordGeoError::Geometry(GeometryError::PointInsideCircle)
        ));
    }

    #[test]
    fn tangent_at_boundary_point() {
        let c = circle(0.0, 0.0, 5.0);
        let tangents = c.tangent_from_point(&Point2::new(3.0, 4.0)).unwrap();
        assert_eq!(tangents.len(), 1);
        assert_relative_eq!(tangents[0].slope(), -0.75);
        assert_relative_eq!(tangents[0].intercept().unwrap(), 6.25);
    }

    #[test]
    fn tangent_at_top_is_horizontal() {
        let c = circle(0.0, 0.0, 5.0);
        let tangents = c.tangent_from_point(&Point2::new(0.0, 5.0)).unwrap();
        assert_eq!(tangents, vec![LineEquation::horizontal(5.0)]);
    }

    #[test]
    fn two_tangents_from_exterior_point() {
        let c = circle(0.0, 0.0, 5.0);
        let p = Point2::new(10.0, 0.0);
        let tangents = c.tangent_from_point(&p).unwrap();
        assert_eq!(tangents.len(), 2);
        for t in &tangents {
            assert!(t.contains(&p));
            let d = t.to_line().distance_from_point(c.center());
            assert!((d - 5.0).abs() < 1e-9, "d={d}");
        }
        assert_relative_eq!(tangents[0].slope(), -tangents[1].slope(), epsilon = 1e-12);
    }

    #[test]
    fn vertical_tangent_from_exterior_point() {
        let c = circle(0.0, 0.0, 1.0);
        let tangents = c.tangent_from_point(&Point2::new(1.0, 1.0)).unwrap();
        assert!(tangents.contains(&LineEquation::Vertical { x: 1.0 }));
    }

    #[test]
    fn circumference_points() {
        let c = circle(1.0, 1.0, 2.0);
        let p = c.point_on_circumference(90.0);
        assert!((p - Point2::new(1.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn line_crossing() {
        let c = circle(0.0, 0.0, 5.0);
        let through = Line::new(Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0));
        let tangent = Line::new(Point2::new(-10.0, 5.0), Point2::new(10.0, 5.0));
        let miss = Line::new(Point2::new(-10.0, 6.0), Point2::new(10.0, 6.0));
        assert!(c.intersects_line(&through));
        assert!(!c.intersects_line(&tangent));
        assert!(!c.intersects_line(&miss));

        let pts = c.line_intersections(&through);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().all(|p| (p.x.abs() - 5.0).abs() < 1e-12));
        assert_eq!(c.line_intersections(&tangent).len(), 1);
        assert!(c.intersect_line(&miss).is_empty());
    }

    #[test]
    fn line_crossing_at_small_scale() {
        let c = circle(0.0, 0.0, 1e-6);
        let through = Line::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        let mut pts = c.line_intersections(&through);
        pts.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(pts.len(), 2);
        assert!((pts[0] - Point2::new(-1e-6, 0.0)).norm() < 1e-15);
        assert!((pts[1] - Point2::new(1e-6, 0.0)).norm() < 1e-15);

        let tangent = Line::new(Point2::new(-1.0, 1e-6), Point2::new(1.0, 1e-6));
        assert_eq!(c.line_intersections(&tangent).len(), 1);
        let miss = Line::new(Point2::new(-1.0, 2e-6), Point2::new(1.0, 2e-6));
        assert!(c.line_intersections(&miss).is_empty());
    }

    #[test]
    fn circle_relations() {
        let a = circle(0.0, 0.0, 5.0);
        assert!(a.intersects_circle(&circle(8.0, 0.0, 5.0)));
        assert!(!a.intersects_circle(&circle(20.0, 0.0, 5.0)));
        // Nested without touching.
        assert!(!a.intersects_circle(&circle(0.0, 0.0, 1.0)));

        assert!(a.is_tangent_to(&circle(10.0, 0.0, 5.0)));
        assert!(a.is_tangent_to(&circle(3.0, 0.0, 2.0)));
        assert!(!a.is_tangent_to(&circle(8.0, 0.0, 5.0)));
        // Tangency survives round-off in the center distance.
        assert!(a.is_tangent_to(&circle(0.1 + 0.2 + 9.7, 0.0, 5.0)));
    }

    #[test]
    fn translate_moves_center() {
        let mut c = circle(1.0, 1.0, 1.0);
        c.translate(2.0, -3.0);
        assert_eq!(c.center(), &Point2::new(3.0, -2.0));
    }

    #[test]
    fn arcs_and_chords() {
        let c = circle(0.0, 0.0, 2.0);
        assert_relative_eq!(c.arc_length(90.0), PI);
        assert_relative_eq!(c.sector_area(180.0), 2.0 * PI);
        assert_relative_eq!(c.chord_length(180.0), 4.0);
        assert_relative_eq!(c.chord_length(60.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_through_center() {
        let c = circle(1.0, 1.0, 3.0);
        assert_eq!(c.mirror_point(&Point2::new(2.0, 3.0)), Point2::new(0.0, -1.0));
    }

    #[test]
    fn conic_tangent_and_normal() {
        let c = circle(0.0, 0.0, 5.0);
        let p = Point2::new(3.0, 4.0);
        let normal = c.normal_at(&p).unwrap();
        assert!(normal.contains(&Point2::origin()));
        let tangent = c.tangent_at(&p).unwrap();
        assert_relative_eq!(tangent.slope() * normal.slope(), -1.0);
        assert!(c.tangent_at(&Point2::new(1.0, 1.0)).is_err());
    }
}
