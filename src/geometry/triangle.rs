use crate::error::{ConstructionError, GeometryError, Result};
use crate::math::compare::{approx_eq, clamp_unit, near_zero, RIGHT_ANGLE_TOLERANCE};
use crate::math::point_2d::{are_collinear, signed_area};
use crate::math::Point2;

use super::Line;

/// Classification by side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by the largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleClass {
    Right,
    Obtuse,
    Acute,
}

/// A non-degenerate triangle `ABC`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    a: Point2,
    b: Point2,
    c: Point2,
}

impl Triangle {
    /// Creates a triangle from its three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Collinear`] if the vertices lie on one
    /// line (including coincident vertices).
    pub fn new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        if are_collinear(&a, &b, &c) {
            tracing::debug!(?a, ?b, ?c, "rejected collinear triangle");
            return Err(ConstructionError::Collinear.into());
        }
        Ok(Self { a, b, c })
    }

    /// The vertices `[A, B, C]`.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// `[|AB|, |BC|, |CA|]`.
    #[must_use]
    pub fn side_lengths(&self) -> [f64; 3] {
        [
            nalgebra::distance(&self.a, &self.b),
            nalgebra::distance(&self.b, &self.c),
            nalgebra::distance(&self.c, &self.a),
        ]
    }

    /// Interior angles at `A`, `B`, `C` in degrees.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        let [ab, bc, ca] = self.side_lengths();
        // Law of cosines for the angle between `adjacent1` and `adjacent2`.
        let angle = |adjacent1: f64, adjacent2: f64, opposite: f64| {
            let cos = (adjacent1 * adjacent1 + adjacent2 * adjacent2 - opposite * opposite)
                / (2.0 * adjacent1 * adjacent2);
            clamp_unit(cos).acos().to_degrees()
        };
        [angle(ab, ca, bc), angle(ab, bc, ca), angle(bc, ca, ab)]
    }

    /// Returns the sum of the side lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Returns half the perimeter.
    #[must_use]
    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Area by Heron's formula.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [ab, bc, ca] = self.side_lengths();
        let s = self.semiperimeter();
        (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
    }

    /// Heights onto `AB`, `BC`, `CA`.
    #[must_use]
    pub fn heights(&self) -> [f64; 3] {
        let double_area = 2.0 * self.area();
        self.side_lengths().map(|side| double_area / side)
    }

    /// Medians to the midpoints of `AB`, `BC`, `CA`.
    #[must_use]
    pub fn medians(&self) -> [f64; 3] {
        let [ab, bc, ca] = self.side_lengths();
        let median = |opposite: f64, s1: f64, s2: f64| {
            0.5 * (2.0 * s1 * s1 + 2.0 * s2 * s2 - opposite * opposite)
                .max(0.0)
                .sqrt()
        };
        [median(ab, bc, ca), median(bc, ab, ca), median(ca, ab, bc)]
    }

    /// Classifies the triangle by its side lengths.
    #[must_use]
    pub fn type_by_sides(&self) -> SideClass {
        let [ab, bc, ca] = self.side_lengths();
        let (e1, e2, e3) = (approx_eq(ab, bc), approx_eq(bc, ca), approx_eq(ca, ab));
        if e1 && e2 {
            SideClass::Equilateral
        } else if e1 || e2 || e3 {
            SideClass::Isosceles
        } else {
            SideClass::Scalene
        }
    }

    /// A triangle whose largest angle is within [`RIGHT_ANGLE_TOLERANCE`]
    /// degrees of 90 is right.
    #[must_use]
    pub fn type_by_angles(&self) -> AngleClass {
        let largest = self.angles().into_iter().fold(0.0, f64::max);
        if (largest - 90.0).abs() < RIGHT_ANGLE_TOLERANCE {
            AngleClass::Right
        } else if largest > 90.0 {
            AngleClass::Obtuse
        } else {
            AngleClass::Acute
        }
    }

    /// Returns the mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        Point2::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Center of the inscribed circle: the vertices weighted by the lengths
    /// of their opposite sides.
    #[must_use]
    pub fn incenter(&self) -> Point2 {
        let [ab, bc, ca] = self.side_lengths();
        let weighted = self.a.coords * bc + self.b.coords * ca + self.c.coords * ab;
        Point2::from(weighted / (ab + bc + ca))
    }

    /// Returns the radius of the inscribed circle.
    #[must_use]
    pub fn inradius(&self) -> f64 {
        self.area() / self.semiperimeter()
    }

    /// Intersection of the perpendicular bisectors of `AB` and `BC`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the bisectors do not meet,
    /// which only happens for numerically flat triangles.
    pub fn circumcenter(&self) -> Result<Point2> {
        let ab = Line::new(self.a, self.b).perpendicular_bisector();
        let bc = Line::new(self.b, self.c).perpendicular_bisector();
        ab.intersection(&bc).ok_or_else(|| {
            GeometryError::Degenerate("perpendicular bisectors are parallel".into()).into()
        })
    }

    /// `abc / (4 * area)`.
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        let [ab, bc, ca] = self.side_lengths();
        ab * bc * ca / (4.0 * self.area())
    }

    /// Intersection of the altitudes from `C` and from `A`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the altitudes do not meet.
    pub fn orthocenter(&self) -> Result<Point2> {
        let from_c = Line::new(self.a, self.b).altitude(&self.c);
        let from_a = Line::new(self.b, self.c).altitude(&self.a);
        from_c
            .intersection(&from_a)
            .ok_or_else(|| GeometryError::Degenerate("altitudes are parallel".into()).into())
    }

    /// Returns whether `p` lies inside the triangle or on its boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let d = [
            signed_area(&self.a, &self.b, p),
            signed_area(&self.b, &self.c, p),
            signed_area(&self.c, &self.a, p),
        ];
        let has_neg = d.iter().any(|&v| v < 0.0 && !near_zero(v));
        let has_pos = d.iter().any(|&v| v > 0.0 && !near_zero(v));
        !(has_neg && has_pos)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn right() -> Triangle {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        )
        .unwrap()
    }

    #[test]
    fn collinear_vertices_rejected() {
        let err = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(matches!(
            err,
            Err(crate::error::CoordGeoError::Construction(ConstructionError::Collinear))
        ));
        let p = Point2::new(1.0, 2.0);
        assert!(Triangle::new(p, p, Point2::new(3.0, 0.0)).is_err());
    }

    #[test]
    fn right_triangle_measures() {
        let t = right();
        assert_eq!(t.side_lengths(), [4.0, 5.0, 3.0]);
        assert_relative_eq!(t.area(), 6.0, epsilon = TOL);
        assert_relative_eq!(t.perimeter(), 12.0);
        assert_relative_eq!(t.semiperimeter(), 6.0);
        assert_eq!(t.type_by_angles(), AngleClass::Right);
        assert_eq!(t.type_by_sides(), SideClass::Scalene);
        assert_relative_eq!(t.inradius(), 1.0, epsilon = TOL);
        assert_relative_eq!(t.circumradius(), 2.5, epsilon = TOL);
    }

    #[test]
    fn angles_sum_to_180() {
        let t = Triangle::new(
            Point2::new(-1.0, 0.5),
            Point2::new(3.0, -2.0),
            Point2::new(2.0, 4.0),
        )
        .unwrap();
        let [a, b, c] = t.angles();
        assert_relative_eq!(a + b + c, 180.0, epsilon = 1e-9);

        let [a, b, c] = right().angles();
        assert_relative_eq!(a, 90.0, epsilon = 1e-9);
        assert_relative_eq!(b, 3.0_f64.atan2(4.0).to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(c, 4.0_f64.atan2(3.0).to_degrees(), epsilon = 1e-9);
    }

    #[test]
    fn heights_and_medians() {
        let t = right();
        let [h_ab, h_bc, h_ca] = t.heights();
        assert_relative_eq!(h_ab, 3.0, epsilon = TOL);
        assert_relative_eq!(h_bc, 2.4, epsilon = TOL);
        assert_relative_eq!(h_ca, 4.0, epsilon = TOL);

        let [m_ab, m_bc, m_ca] = t.medians();
        // C=(0,3) to (2,0); A=(0,0) to (2,1.5); B=(4,0) to (0,1.5).
        assert_relative_eq!(m_ab, 13.0_f64.sqrt(), epsilon = TOL);
        assert_relative_eq!(m_bc, 2.5, epsilon = TOL);
        assert_relative_eq!(m_ca, 18.25_f64.sqrt(), epsilon = TOL);
    }

    #[test]
    fn classification() {
        let equilateral = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 3.0_f64.sqrt()),
        )
        .unwrap();
        assert_eq!(equilateral.type_by_sides(), SideClass::Equilateral);
        assert_eq!(equilateral.type_by_angles(), AngleClass::Acute);

        let obtuse = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 0.5),
        )
        .unwrap();
        assert_eq!(obtuse.type_by_sides(), SideClass::Isosceles);
        assert_eq!(obtuse.type_by_angles(), AngleClass::Obtuse);
    }

    #[test]
    fn centers() {
        let t = right();
        let g = t.centroid();
        assert_relative_eq!(g.x, 4.0 / 3.0, epsilon = TOL);
        assert_relative_eq!(g.y, 1.0, epsilon = TOL);

        let i = t.incenter();
        assert_relative_eq!(i.x, 1.0, epsilon = TOL);
        assert_relative_eq!(i.y, 1.0, epsilon = TOL);

        // Right triangle: circumcenter at the hypotenuse midpoint,
        // orthocenter at the right-angle vertex.
        let o = t.circumcenter().unwrap();
        assert_relative_eq!(o.x, 2.0, epsilon = TOL);
        assert_relative_eq!(o.y, 1.5, epsilon = TOL);
        let h = t.orthocenter().unwrap();
        assert!(h.coords.norm() < TOL);
    }

    #[test]
    fn circumcenter_is_equidistant() {
        let t = Triangle::new(
            Point2::new(1.0, 1.0),
            Point2::new(6.0, 2.0),
            Point2::new(2.0, 7.0),
        )
        .unwrap();
        let o = t.circumcenter().unwrap();
        for v in t.vertices() {
            assert_relative_eq!(nalgebra::distance(&o, &v), t.circumradius(), epsilon = 1e-9);
        }
    }

    #[test]
    fn point_containment() {
        let t = right();
        assert!(t.contains_point(&Point2::new(1.0, 1.0)));
        assert!(t.contains_point(&Point2::new(2.0, 0.0)));
        assert!(t.contains_point(&Point2::new(0.0, 0.0)));
        assert!(!t.contains_point(&Point2::new(3.0, 3.0)));
        assert!(!t.contains_point(&Point2::new(-0.1, 1.0)));
    }
}
