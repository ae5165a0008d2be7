//! Point operations on [`Point2`].

use crate::error::{DomainError, Result};

use super::compare::{approx_eq, clamp_unit, near_zero};
use super::{Point2, Rotation2};

/// Where a point sits relative to the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// On the x- or y-axis.
    Axis,
    First,
    Second,
    Third,
    Fourth,
}

/// Classifies `p` by quadrant.
#[must_use]
pub fn quadrant(p: &Point2) -> Quadrant {
    if near_zero(p.x) || near_zero(p.y) {
        Quadrant::Axis
    } else if p.x > 0.0 && p.y > 0.0 {
        Quadrant::First
    } else if p.x < 0.0 && p.y > 0.0 {
        Quadrant::Second
    } else if p.x < 0.0 {
        Quadrant::Third
    } else {
        Quadrant::Fourth
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance from `p` to the origin.
#[must_use]
pub fn distance_to_origin(p: &Point2) -> f64 {
    p.coords.norm()
}

/// Midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Returns whether the three points lie on one line.
///
/// Compares the slopes `a -> b` and `a -> c`. Two vertical directions count
/// as collinear, as do coincident points.
#[must_use]
pub fn are_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let dx1 = a.x - b.x;
    let dx2 = a.x - c.x;
    let dy1 = a.y - b.y;
    let dy2 = a.y - c.y;

    let ab_vertical = near_zero(dx1);
    let ac_vertical = near_zero(dx2);
    if ab_vertical && ac_vertical {
        return true;
    }
    if (ab_vertical && near_zero(dy1)) || (ac_vertical && near_zero(dy2)) {
        // Coincident pair.
        return true;
    }
    if ab_vertical || ac_vertical {
        return false;
    }
    approx_eq(dy1 / dx1, dy2 / dx2)
}

/// Mirror image across the x-axis.
#[must_use]
pub fn reflect_x(p: &Point2) -> Point2 {
    Point2::new(p.x, -p.y)
}

/// Mirror image across the y-axis.
#[must_use]
pub fn reflect_y(p: &Point2) -> Point2 {
    Point2::new(-p.x, p.y)
}

/// Mirror image through the origin.
#[must_use]
pub fn reflect_origin(p: &Point2) -> Point2 {
    Point2::new(-p.x, -p.y)
}

/// Angle in degrees between the position vectors of `a` and `b`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroVector`] if either point is the origin.
pub fn angle_between(a: &Point2, b: &Point2) -> Result<f64> {
    let mag_a = a.coords.norm();
    let mag_b = b.coords.norm();
    if near_zero(mag_a) || near_zero(mag_b) {
        return Err(DomainError::ZeroVector.into());
    }
    let cos_theta = clamp_unit(a.coords.dot(&b.coords) / (mag_a * mag_b));
    Ok(cos_theta.acos().to_degrees())
}

/// Angle in degrees of the position vector measured from the +x axis.
#[must_use]
pub fn x_inclination(p: &Point2) -> f64 {
    p.y.atan2(p.x).to_degrees()
}

/// Angle in degrees of the position vector measured from the +y axis.
#[must_use]
pub fn y_inclination(p: &Point2) -> f64 {
    (-p.x).atan2(p.y).to_degrees()
}

/// Twice the signed area of triangle `a, b, c`.
///
/// Positive when the points turn counter-clockwise.
#[must_use]
pub fn signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Rotates `p` by `angle_deg` counter-clockwise about `center`
/// (the origin when `None`).
#[must_use]
pub fn rotate(p: &Point2, angle_deg: f64, center: Option<&Point2>) -> Point2 {
    let pivot = center.copied().unwrap_or_else(Point2::origin);
    let rotation = Rotation2::new(angle_deg.to_radians());
    pivot + rotation * (p - pivot)
}
