//! Floating-point comparison helpers.
//!
//! Every near-equality test in the crate goes through this module so the
//! tolerances live in one place.

use super::TOLERANCE;

/// Default relative tolerance for comparing slopes, lengths and implicit
/// equation values.
pub const REL_TOLERANCE: f64 = 1e-9;

/// Absolute floor used together with [`REL_TOLERANCE`] so that values near
/// zero can still compare equal.
pub const ABS_TOLERANCE: f64 = 1e-12;

/// Absolute tolerance for "is this point on the curve" tests.
pub const ON_CURVE_TOLERANCE: f64 = 1e-9;

/// Relative tolerance for sampled (approximate) intersection tests.
pub const SAMPLE_TOLERANCE: f64 = 1e-2;

/// Tolerance in degrees for classifying a right angle.
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-5;

/// Returns whether `a` and `b` are within `rel_tol` of the larger magnitude,
/// or within `abs_tol` absolutely.
///
/// Equal infinities compare equal; NaN never does.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= rel_tol * a.abs().max(b.abs()) || diff <= abs_tol
}

/// [`is_close`] with the crate defaults.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_close(a, b, REL_TOLERANCE, ABS_TOLERANCE)
}

/// Returns whether `v` is zero up to [`TOLERANCE`].
#[must_use]
pub fn near_zero(v: f64) -> bool {
    v.abs() < TOLERANCE
}

/// Clamps a cosine into `[-1, 1]` before it reaches `acos`.
#[must_use]
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}
