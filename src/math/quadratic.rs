use super::compare::{is_close, REL_TOLERANCE};

/// Roots of `a*t^2 + b*t + c = 0` with `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// Two distinct real roots, the `+sqrt` root first.
    Distinct(f64, f64),
    /// One real root of multiplicity two.
    Repeated(f64),
    /// A complex conjugate pair `re +- im*i`, with `im > 0`.
    Complex { re: f64, im: f64 },
}

impl QuadraticRoots {
    /// Solves the quadratic from its coefficients.
    ///
    /// The discriminant is compared against zero exactly; use
    /// [`real_roots`] when near-tangent cases should collapse to one root.
    #[must_use]
    pub fn solve(a: f64, b: f64, c: f64) -> Self {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant > 0.0 {
            let sqrt_d = discriminant.sqrt();
            Self::Distinct((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
        } else if discriminant < 0.0 {
            Self::Complex {
                re: -b / (2.0 * a),
                im: (-discriminant).sqrt() / (2.0 * a).abs(),
            }
        } else {
            Self::Repeated(-b / (2.0 * a))
        }
    }

    /// Returns the real roots, repeated roots listed twice.
    #[must_use]
    pub fn real(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Distinct(r1, r2) => Some((r1, r2)),
            Self::Repeated(r) => Some((r, r)),
            Self::Complex { .. } => None,
        }
    }

    /// Returns whether the roots are a complex pair.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex { .. })
    }
}

/// Real solutions of `a*t^2 + b*t + c = 0` for intersection finding.
///
/// When `b^2` and `4ac` agree to within [`REL_TOLERANCE`] of their own
/// magnitude the pair collapses to a single tangent root. The test is
/// relative, so it behaves the same at any coordinate scale. A negative
/// discriminant yields no roots.
#[must_use]
pub fn real_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let b_sq = b * b;
    let four_ac = 4.0 * a * c;
    let discriminant = b_sq - four_ac;
    if is_close(b_sq, four_ac, REL_TOLERANCE, 0.0) {
        vec![-b / (2.0 * a)]
    } else if discriminant < 0.0 {
        Vec::new()
    } else {
        let sqrt_d = discriminant.sqrt();
        vec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
    }
}
