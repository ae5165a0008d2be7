//! Point sampling for plotting.
//!
//! Shapes turn themselves into ordered polylines plus a few labelled
//! landmark points. Rendering is left to the caller.

mod sample_curve;
mod sample_polygon;

use crate::math::Point2;

/// Parameters controlling sample density.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Samples taken over a full turn (0 to 360 degrees, both ends included)
    /// for closed curves.
    pub angle_samples: u32,
    /// Interval of the free coordinate for open curves. The end is
    /// exclusive.
    pub range: (f64, f64),
    /// Spacing of samples within `range`.
    pub step: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            angle_samples: 361,
            range: (-10.0, 10.0),
            step: 0.1,
        }
    }
}

impl SamplingParams {
    /// Angles in degrees from 0 to 360 inclusive, `angle_samples` of them
    /// (at least two).
    pub(crate) fn angles(&self) -> impl Iterator<Item = f64> {
        let n = self.angle_samples.max(2);
        let spacing = 360.0 / f64::from(n - 1);
        (0..n).map(move |i| f64::from(i) * spacing)
    }

    /// Values `start, start + step, ...` strictly below the end of `range`.
    /// Empty when `step` is not a positive finite number.
    pub(crate) fn range_values(&self) -> Vec<f64> {
        let (start, end) = self.range;
        let step = self.step;
        if !(step.is_finite() && step > 0.0) {
            tracing::debug!(step, "sampling step must be positive");
            return Vec::new();
        }
        if !(start.is_finite() && end.is_finite()) {
            tracing::debug!(start, end, "sampling range must be finite");
            return Vec::new();
        }
        // Guard against `end` reappearing through accumulated rounding.
        let limit = end - step * 1e-9;
        (0_u32..)
            .map(|i| start + f64::from(i) * step)
            .take_while(|v| *v < limit)
            .collect()
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Wraps an ordered list of vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A labelled point worth highlighting on a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Text shown next to the point.
    pub label: &'static str,
    /// Where the landmark sits.
    pub point: Point2,
}

impl Landmark {
    /// Creates a landmark with the given label.
    #[must_use]
    pub fn new(label: &'static str, point: Point2) -> Self {
        Self { label, point }
    }
}

/// Shapes that can be sampled for plotting.
pub trait Tessellate {
    /// Ordered samples of the shape's outline, one polyline per connected
    /// piece.
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline>;

    /// Characteristic points such as centers, vertices and foci.
    fn landmarks(&self) -> Vec<Landmark>;
}
