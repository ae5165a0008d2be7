use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ConstructionError, DomainError, GeometryError, Result};
use crate::math::compare::{approx_eq, is_close, near_zero, SAMPLE_TOLERANCE};
use crate::math::minimize::{minimize_sampled, MinimizeConfig};
use crate::math::Point2;

use super::{Conic, Line, LineEquation, LineIntersect, Orientation};

/// Default subdivision count for [`Hyperbola::intersects_with_line`].
pub const LINE_SAMPLES: u32 = 1000;

/// Distance kept from the singular parameters `t = +-90 deg` when searching.
const SINGULARITY_MARGIN: f64 = 1e-6;

/// Newton steps applied after the bracketing search.
const NEWTON_STEPS: usize = 4;

/// Closest point on a hyperbola to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// The closest point found on the curve.
    pub point: Point2,
    /// Its parameter in degrees, see [`Hyperbola::parametric_point`].
    pub parameter: f64,
    /// Distance from the query point.
    pub distance: f64,
}

/// An axis-aligned hyperbola centered at `(h, k)`.
///
/// [`Orientation::Horizontal`]: `(x-h)^2/a^2 - (y-k)^2/b^2 = 1`.
/// [`Orientation::Vertical`]: `(y-k)^2/a^2 - (x-h)^2/b^2 = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperbola {
    a: f64,
    b: f64,
    h: f64,
    k: f64,
    orientation: Orientation,
}

impl Hyperbola {
    /// Creates a new hyperbola.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonPositive`] if either semi-axis is not
    /// positive.
    pub fn new(a: f64, b: f64, h: f64, k: f64, orientation: Orientation) -> Result<Self> {
        for (parameter, value) in [("a", a), ("b", b)] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConstructionError::NonPositive { parameter, value }.into());
            }
        }
        Ok(Self {
            a,
            b,
            h,
            k,
            orientation,
        })
    }

    /// Semi-transverse axis.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-conjugate axis.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the direction of the transverse axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the center of the hyperbola.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.h, self.k)
    }

    fn semi_axes_xy(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (self.a, self.b),
            Orientation::Vertical => (self.b, self.a),
        }
    }

    /// Left-hand side of the canonical equation at `p`.
    fn implicit(&self, p: &Point2) -> f64 {
        let x = p.x - self.h;
        let y = p.y - self.k;
        let (a2, b2) = (self.a * self.a, self.b * self.b);
        match self.orientation {
            Orientation::Horizontal => x * x / a2 - y * y / b2,
            Orientation::Vertical => y * y / a2 - x * x / b2,
        }
    }

    /// `center +- offset` along the transverse axis, `+` first.
    fn transverse_pair(&self, offset: f64) -> (Point2, Point2) {
        match self.orientation {
            Orientation::Horizontal => (
                Point2::new(self.h + offset, self.k),
                Point2::new(self.h - offset, self.k),
            ),
            Orientation::Vertical => (
                Point2::new(self.h, self.k + offset),
                Point2::new(self.h, self.k - offset),
            ),
        }
    }

    /// Returns the eccentricity, always greater than 1.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        (1.0 + (self.b * self.b) / (self.a * self.a)).sqrt()
    }

    /// `c = sqrt(a^2 + b^2)`.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Returns the two foci on the transverse axis.
    #[must_use]
    pub fn foci(&self) -> (Point2, Point2) {
        self.transverse_pair(self.focal_distance())
    }

    /// Endpoints of the transverse axis.
    #[must_use]
    pub fn vertices(&self) -> (Point2, Point2) {
        self.transverse_pair(self.a)
    }

    /// The two coordinates on the curve at axis value `val`: y values at
    /// `x = val` for a horizontal hyperbola, x values at `y = val` for a
    /// vertical one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BetweenBranches`] if `val` falls in the gap
    /// between the branches.
    pub fn evaluate(&self, val: f64) -> Result<(f64, f64)> {
        let (offset, base) = match self.orientation {
            Orientation::Horizontal => (val - self.h, self.k),
            Orientation::Vertical => (val - self.k, self.h),
        };
        let term = offset * offset / (self.a * self.a) - 1.0;
        if term < 0.0 {
            return Err(DomainError::BetweenBranches { value: val }.into());
        }
        let d = self.b * term.sqrt();
        Ok((base + d, base - d))
    }

    /// Full length of the chord through a focus perpendicular to the
    /// transverse axis.
    #[must_use]
    pub fn latus_rectum_length(&self) -> f64 {
        2.0 * self.b * self.b / self.a
    }

    /// Endpoints of both latera recta, one pair per focus.
    #[must_use]
    pub fn latus_rectum_endpoints(&self) -> [(Point2, Point2); 2] {
        let half = self.latus_rectum_length() / 2.0;
        let (f1, f2) = self.foci();
        let ends = |f: Point2| match self.orientation {
            Orientation::Horizontal => (Point2::new(f.x, f.y + half), Point2::new(f.x, f.y - half)),
            Orientation::Vertical => (Point2::new(f.x + half, f.y), Point2::new(f.x - half, f.y)),
        };
        [ends(f1), ends(f2)]
    }

    /// Returns the length of the transverse axis, `2a`.
    #[must_use]
    pub fn transverse_axis_length(&self) -> f64 {
        2.0 * self.a
    }

    /// Returns the length of the conjugate axis, `2b`.
    #[must_use]
    pub fn conjugate_axis_length(&self) -> f64 {
        2.0 * self.b
    }

    /// Slope magnitude of the asymptotes.
    fn asymptote_slope(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.b / self.a,
            Orientation::Vertical => self.a / self.b,
        }
    }

    /// The asymptotes through the center, positive slope first.
    #[must_use]
    pub fn asymptotes(&self) -> (LineEquation, LineEquation) {
        let m = self.asymptote_slope();
        let center = self.center();
        (
            LineEquation::through(&center, m),
            LineEquation::through(&center, -m),
        )
    }

    /// Angle between the asymptotes in radians.
    #[must_use]
    pub fn angle_between_asymptotes_rad(&self) -> f64 {
        2.0 * self.asymptote_slope().atan()
    }

    /// Angle between the asymptotes in degrees.
    #[must_use]
    pub fn angle_between_asymptotes(&self) -> f64 {
        self.angle_between_asymptotes_rad().to_degrees()
    }

    /// Whether `p` satisfies the hyperbola equation within tolerance.
    #[must_use]
    pub fn is_on_hyperbola(&self, p: &Point2) -> bool {
        approx_eq(self.implicit(p), 1.0)
    }

    /// Distances from `p` to the two foci, in [`Hyperbola::foci`] order.
    #[must_use]
    pub fn distance_to_focus(&self, p: &Point2) -> (f64, f64) {
        let (f1, f2) = self.foci();
        (nalgebra::distance(p, &f1), nalgebra::distance(p, &f2))
    }

    /// Point at parameter `t_deg` of the secant/tangent parametrization.
    ///
    /// Parameters in `(-90, 90)` trace the branch on the positive side of
    /// the transverse axis, `(90, 270)` the other one. The parametrization
    /// is undefined at 90 and 270.
    #[must_use]
    pub fn parametric_point(&self, t_deg: f64) -> Point2 {
        let t = t_deg.to_radians();
        let sec = 1.0 / t.cos();
        let tan = t.tan();
        match self.orientation {
            Orientation::Horizontal => Point2::new(self.h + self.a * sec, self.k + self.b * tan),
            Orientation::Vertical => Point2::new(self.h + self.b * tan, self.k + self.a * sec),
        }
    }

    /// The hyperbola sharing these asymptotes with the axes swapped.
    #[must_use]
    pub fn conjugate(&self) -> Hyperbola {
        let orientation = match self.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
        Hyperbola {
            a: self.b,
            b: self.a,
            h: self.h,
            k: self.k,
            orientation,
        }
    }

    /// Equation of the conjugate hyperbola.
    #[must_use]
    pub fn conjugate_hyperbola(&self) -> String {
        self.conjugate().equation()
    }

    /// Returns the standard-form equation as text.
    #[must_use]
    pub fn equation(&self) -> String {
        let (a2, b2) = (self.a * self.a, self.b * self.b);
        match self.orientation {
            Orientation::Horizontal => {
                format!("(x - {})^2/{a2} - (y - {})^2/{b2} = 1", self.h, self.k)
            }
            Orientation::Vertical => {
                format!("(y - {})^2/{a2} - (x - {})^2/{b2} = 1", self.k, self.h)
            }
        }
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
        (ry * ry * dx) / denominator
    }

    /// Slope of the normal at `p`; `+inf` where the normal is vertical.
    #[must_use]
    pub fn normal_slope_at_point(&self, p: &Point2) -> f64 {
        let m = self.tangent_slope_at_point(p);
        if m.is_infinite() {
            0.0
        } else if near_zero(m) {
            f64::INFINITY
        } else {
            -1.0 / m
        }
    }

    /// Tangent line through `p`.
    #[must_use]
    pub fn tangent_line_equation(&self, p: &Point2) -> LineEquation {
        LineEquation::through(p, self.tangent_slope_at_point(p))
    }

    /// Normal line through `p`.
    #[must_use]
    pub fn normal_line_equation(&self, p: &Point2) -> LineEquation {
        LineEquation::through(p, self.normal_slope_at_point(p))
    }

    /// Closest point on the curve to `p`, with the default search budget.
    ///
    /// See [`Hyperbola::distance_to_hyperbola_with`].
    #[must_use]
    pub fn distance_to_hyperbola(&self, p: &Point2) -> NearestPoint {
        self.distance_to_hyperbola_with(p, &MinimizeConfig::default())
    }

    /// Closest point on the curve to `p`.
    ///
    /// Minimizes the distance to [`Hyperbola::parametric_point`] over each
    /// branch separately and keeps the better result. The search is local:
    /// it refines the best coarse sample, so a second minimum of nearly the
    /// same depth may be missed. A few Newton steps on the derivative of the
    /// squared distance then settle the parameter to full precision.
    #[must_use]
    pub fn distance_to_hyperbola_with(&self, p: &Point2, config: &MinimizeConfig) -> NearestPoint {
        let objective = |t: f64| nalgebra::distance(&self.parametric_point(t.to_degrees()), p);
        let branches = [
            (-FRAC_PI_2 + SINGULARITY_MARGIN, FRAC_PI_2 - SINGULARITY_MARGIN),
            (FRAC_PI_2 + SINGULARITY_MARGIN, PI + FRAC_PI_2 - SINGULARITY_MARGIN),
        ];

        let [near, far] = branches.map(|(lo, hi)| {
            let m = minimize_sampled(&objective, lo, hi, config);
            tracing::trace!(
                t = m.t,
                distance = m.value,
                iterations = m.iterations,
                "branch minimum"
            );
            self.polish_nearest(p, m.t, m.value, (lo, hi))
        });
        let (t, distance) = if far.1 < near.1 { far } else { near };

        let parameter = t.to_degrees();
        NearestPoint {
            point: self.parametric_point(parameter),
            parameter,
            distance,
        }
    }

    /// Newton iteration on `d/dt |P(t) - p|^2 = 0`, starting from `t` (in
    /// radians). A step is kept only if it stays inside `bounds` and does
    /// not increase the distance beyond comparison tolerance.
    fn polish_nearest(&self, p: &Point2, t: f64, distance: f64, bounds: (f64, f64)) -> (f64, f64) {
        // Query point in the frame where the transverse axis runs along the
        // first coordinate: P(t) = (a sec t, b tan t).
        let q = match self.orientation {
            Orientation::Horizontal => (p.x - self.h, p.y - self.k),
            Orientation::Vertical => (p.y - self.k, p.x - self.h),
        };
        let (a, b) = (self.a, self.b);
        let mut best = (t, distance);
        for _ in 0..NEWTON_STEPS {
            let t = best.0;
            let (sec, tan) = (1.0 / t.cos(), t.tan());
            let f = (a * sec - q.0, b * tan - q.1);
            let d1 = (a * sec * tan, b * sec * sec);
            let d2 = (a * sec * (tan * tan + sec * sec), 2.0 * b * sec * sec * tan);
            let slope = f.0 * d1.0 + f.1 * d1.1;
            let curvature = d1.0 * d1.0 + d1.1 * d1.1 + f.0 * d2.0 + f.1 * d2.1;
            if curvature.is_nan() || curvature <= 0.0 {
                break;
            }
            let next = t - slope / curvature;
            if !(bounds.0..=bounds.1).contains(&next) {
                break;
            }
            let value = nalgebra::distance(&self.parametric_point(next.to_degrees()), p);
            if value > best.1 && !approx_eq(value, best.1) {
                break;
            }
            best = (next, value);
        }
        best
    }

    /// Mirror image of `p` across the normal line at its nearest point on
    /// the curve.
    #[must_use]
    pub fn reflect_point_across_hyperbola(&self, p: &Point2) -> Point2 {
        let nearest = self.distance_to_hyperbola(p).point;
        let m = self.normal_slope_at_point(&nearest);

        if m.is_infinite() {
            Point2::new(2.0 * nearest.x - p.x, p.y)
        } else if near_zero(m) {
            Point2::new(p.x, 2.0 * nearest.y - p.y)
        } else {
            let c = nearest.y - m * nearest.x;
            let d = (p.x + (p.y - c) * m) / (1.0 + m * m);
            Point2::new(2.0 * d - p.x, 2.0 * d * m - p.y + 2.0 * c)
        }
    }

    /// Approximate intersection with the segment between the line's two
    /// defining points, using [`LINE_SAMPLES`] subdivisions.
    #[must_use]
    pub fn intersects_with_line(&self, line: &Line) -> Vec<Point2> {
        self.intersects_with_line_sampled(line, LINE_SAMPLES)
    }

    /// Samples the segment `p1 -> p2` at `samples + 1` evenly spaced points
    /// and keeps those whose implicit value is within a coarse relative
    /// tolerance of 1. Neighbouring samples near a crossing are all kept.
    #[must_use]
    pub fn intersects_with_line_sampled(&self, line: &Line, samples: u32) -> Vec<Point2> {
        let samples = samples.max(1);
        let d = line.direction();
        (0..=samples)
            .map(|i| line.p1() + d * (f64::from(i) / f64::from(samples)))
            .filter(|q| is_close(self.implicit(q), 1.0, SAMPLE_TOLERANCE, 0.0))
            .collect()
    }
}

impl Conic for Hyperbola {
    fn contains(&self, p: &Point2) -> bool {
        self.is_on_hyperbola(p)
    }

    fn tangent_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.is_on_hyperbola(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "hyperbola" }.into());
        }
        Ok(self.tangent_line_equation(p))
    }

    fn normal_at(&self, p: &Point2) -> Result<LineEquation> {
        if !self.is_on_hyperbola(p) {
            return Err(GeometryError::PointNotOnCurve { curve: "hyperbola" }.into());
        }
        Ok(self.normal_line_equation(p))
    }
}

impl LineIntersect for Hyperbola {
    fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        self.intersects_with_line(line)
    }
}
