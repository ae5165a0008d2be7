//! Bounded one-dimensional minimization.
//!
//! The search samples the interval coarsely, keeps the best sample, and
//! refines it with a golden-section search in the bracket around it. The
//! result is a local minimum of the sampled neighbourhood; a function with
//! several minima of similar depth may converge to either.

/// Parameters for [`minimize_sampled`].
#[derive(Debug, Clone, Copy)]
pub struct MinimizeConfig {
    /// Number of coarse samples taken across each interval.
    pub samples: u32,
    /// Maximum number of golden-section iterations.
    pub max_iterations: usize,
    /// Stop refining once the bracket is narrower than this.
    pub tolerance: f64,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        Self {
            samples: 64,
            max_iterations: 100,
            tolerance: 1e-12,
        }
    }
}

/// A minimum found by [`minimize_sampled`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Argument at the minimum.
    pub t: f64,
    /// Function value at `t`.
    pub value: f64,
    /// Golden-section iterations spent.
    pub iterations: usize,
}

const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Minimizes `f` over the closed interval `[lo, hi]`.
///
/// Non-finite function values are treated as `+inf` so that samples near a
/// singularity never win.
pub fn minimize_sampled<F>(f: F, lo: f64, hi: f64, config: &MinimizeConfig) -> Minimum
where
    F: Fn(f64) -> f64,
{
    let eval = |t: f64| {
        let v = f(t);
        if v.is_finite() {
            v
        } else {
            f64::INFINITY
        }
    };

    let n = config.samples.max(2);
    let dt = (hi - lo) / f64::from(n);
    let mut best_t = lo;
    let mut best_value = f64::INFINITY;
    for i in 0..=n {
        let t = lo + dt * f64::from(i);
        let v = eval(t);
        if v < best_value {
            best_value = v;
            best_t = t;
        }
    }

    let mut a = (best_t - dt).max(lo);
    let mut b = (best_t + dt).min(hi);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = eval(c);
    let mut fd = eval(d);

    let mut iterations = 0;
    while iterations < config.max_iterations && (b - a).abs() > config.tolerance {
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = eval(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = eval(d);
        }
        iterations += 1;
    }
    if iterations == config.max_iterations {
        tracing::debug!(
            iterations,
            bracket = b - a,
            "golden-section search stopped at iteration limit"
        );
    }

    #[allow(clippy::manual_midpoint)]
    let t = (a + b) / 2.0;
    let value = eval(t);
    // The refined point can only lose to the coarse sample if the bracket
    // contained a spike.
    if value <= best_value {
        Minimum {
            t,
            value,
            iterations,
        }
    } else {
        Minimum {
            t: best_t,
            value: best_value,
            iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parabola_minimum() {
        let m = minimize_sampled(
            |t| (t - 1.3).powi(2) + 2.0,
            -5.0,
            5.0,
            &MinimizeConfig::default(),
        );
        assert!((m.t - 1.3).abs() < 1e-6, "t={}", m.t);
        assert!((m.value - 2.0).abs() < 1e-10);
    }

    #[test]
    fn minimum_at_interval_edge() {
        let m = minimize_sampled(|t| t, 0.0, 1.0, &MinimizeConfig::default());
        assert!(m.t.abs() < 1e-6, "t={}", m.t);
    }

    #[test]
    fn iteration_budget_is_respected() {
        let config = MinimizeConfig {
            max_iterations: 3,
            ..MinimizeConfig::default()
        };
        let m = minimize_sampled(|t| (t - 0.3).powi(2), -1.0, 1.0, &config);
        assert_eq!(m.iterations, 3);
        // Still no worse than the best coarse sample.
        assert!(m.value < 1e-3);
    }

    #[test]
    fn skips_non_finite_samples() {
        let m = minimize_sampled(
            |t| if t < 0.0 { f64::NAN } else { (t - 0.5).abs() },
            -1.0,
            1.0,
            &MinimizeConfig::default(),
        );
        assert!((m.t - 0.5).abs() < 1e-6, "t={}", m.t);
    }
}
