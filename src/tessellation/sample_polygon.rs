use crate::geometry::{Line, LineEquation, Triangle};
use crate::math::Point2;

use super::{Landmark, Polyline, SamplingParams, Tessellate};

impl Tessellate for Line {
    /// The infinite line clipped to `params.range`: x bounds for sloped
    /// lines, y bounds for vertical ones.
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline> {
        let (start, end) = params.range;
        let points = match self.equation() {
            LineEquation::SlopeIntercept { slope, intercept } => vec![
                Point2::new(start, slope * start + intercept),
                Point2::new(end, slope * end + intercept),
            ],
            LineEquation::Vertical { x } => vec![Point2::new(x, start), Point2::new(x, end)],
        };
        vec![Polyline::new(points)]
    }

    fn landmarks(&self) -> Vec<Landmark> {
        vec![Landmark::new("p1", *self.p1()), Landmark::new("p2", *self.p2())]
    }
}

impl Tessellate for Triangle {
    /// The closed outline `A, B, C, A`.
    fn tessellate(&self, _params: &SamplingParams) -> Vec<Polyline> {
        let [a, b, c] = self.vertices();
        vec![Polyline::new(vec![a, b, c, a])]
    }

    fn landmarks(&self) -> Vec<Landmark> {
        let [a, b, c] = self.vertices();
        vec![
            Landmark::new("A", a),
            Landmark::new("B", b),
            Landmark::new("C", c),
        ]
    }
}
