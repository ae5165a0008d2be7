use crate::geometry::{Circle, Ellipse, Hyperbola, Orientation, Parabola};
use crate::math::Point2;

use super::{Landmark, Polyline, SamplingParams, Tessellate};

impl Tessellate for Circle {
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline> {
        let points = params
            .angles()
            .map(|deg| self.point_on_circumference(deg))
            .collect();
        vec![Polyline::new(points)]
    }

    fn landmarks(&self) -> Vec<Landmark> {
        vec![Landmark::new("center", *self.center())]
    }
}

impl Tessellate for Ellipse {
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline> {
        let points = params.angles().map(|deg| self.parametric_point(deg)).collect();
        vec![Polyline::new(points)]
    }

    fn landmarks(&self) -> Vec<Landmark> {
        let (f1, f2) = self.foci();
        let (v1, v2) = self.vertices();
        vec![
            Landmark::new("center", self.center()),
            Landmark::new("focus", f1),
            Landmark::new("focus", f2),
            Landmark::new("vertex", v1),
            Landmark::new("vertex", v2),
        ]
    }
}

impl Tessellate for Parabola {
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline> {
        let points = params
            .range_values()
            .into_iter()
            .map(|t| self.parametric_point(t))
            .collect();
        vec![Polyline::new(points)]
    }

    fn landmarks(&self) -> Vec<Landmark> {
        vec![
            Landmark::new("vertex", self.vertex()),
            Landmark::new("focus", self.focus()),
        ]
    }
}

impl Tessellate for Hyperbola {
    /// Samples the axis coordinate over `params.range`. Each sign of the
    /// square root gives one side of the curve; runs are split wherever the
    /// range crosses the gap between branches, so the branches are never
    /// joined.
    fn tessellate(&self, params: &SamplingParams) -> Vec<Polyline> {
        let mut finished = Vec::new();
        let mut plus = Vec::new();
        let mut minus = Vec::new();

        let to_point = |val: f64, other: f64| match self.orientation() {
            Orientation::Horizontal => Point2::new(val, other),
            Orientation::Vertical => Point2::new(other, val),
        };

        for val in params.range_values() {
            if let Ok((p, m)) = self.evaluate(val) {
                plus.push(to_point(val, p));
                minus.push(to_point(val, m));
            } else {
                flush(&mut finished, &mut plus);
                flush(&mut finished, &mut minus);
            }
        }
        flush(&mut finished, &mut plus);
        flush(&mut finished, &mut minus);
        finished
    }

    fn landmarks(&self) -> Vec<Landmark> {
        let (f1, f2) = self.foci();
        let (v1, v2) = self.vertices();
        vec![
            Landmark::new("center", self.center()),
            Landmark::new("focus", f1),
            Landmark::new("focus", f2),
            Landmark::new("vertex", v1),
            Landmark::new("vertex", v2),
        ]
    }
}

/// Moves a non-empty run into `finished`.
fn flush(finished: &mut Vec<Polyline>, run: &mut Vec<Point2>) {
    if !run.is_empty() {
        finished.push(Polyline::new(std::mem::take(run)));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Conic;

    #[test]
    fn circle_samples_close_the_loop() {
        let circle = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        let lines = circle.tessellate(&SamplingParams::default());
        assert_eq!(lines.len(), 1);
        let points = &lines[0].points;
        assert_eq!(points.len(), 361);
        assert!((points[0] - points[360]).norm() < 1e-9);
        assert!(points
            .iter()
            .all(|p| (nalgebra::distance(p, circle.center()) - 3.0).abs() < 1e-9));
        assert_eq!(circle.landmarks()[0].point, Point2::new(1.0, 2.0));
    }

    #[test]
    fn ellipse_samples_lie_on_curve() {
        let ellipse = Ellipse::new(5.0, 3.0, 0.0, 0.0, Orientation::Vertical).unwrap();
        let params = SamplingParams {
            angle_samples: 37,
            ..SamplingParams::default()
        };
        let lines = ellipse.tessellate(&params);
        assert_eq!(lines[0].len(), 37);
        assert!(lines[0].points.iter().all(|p| ellipse.contains(p)));
        assert_eq!(ellipse.landmarks().len(), 5);
    }

    #[test]
    fn parabola_samples_follow_the_free_coordinate() {
        let parabola = Parabola::new(1.0, 0.0, 0.0, Orientation::Horizontal).unwrap();
        let lines = parabola.tessellate(&SamplingParams::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 200);
        // Horizontal: x = y^2, y runs over the range.
        let first = lines[0].points[0];
        assert!((first.y + 10.0).abs() < 1e-12);
        assert!((first.x - 100.0).abs() < 1e-9);
        let labels: Vec<_> = parabola.landmarks().iter().map(|l| l.label).collect();
        assert_eq!(labels, ["vertex", "focus"]);
    }

    #[test]
    fn hyperbola_branches_stay_separate() {
        let hyperbola = Hyperbola::new(3.0, 4.0, 0.0, 0.0, Orientation::Horizontal).unwrap();
        let lines = hyperbola.tessellate(&SamplingParams::default());
        // Two branches, each split into upper and lower halves.
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(line.points.iter().all(|p| hyperbola.contains(p)));
            let left = line.points.iter().all(|p| p.x < 0.0);
            let right = line.points.iter().all(|p| p.x > 0.0);
            assert!(left || right);
        }
    }

    #[test]
    fn hyperbola_range_inside_gap_is_empty() {
        let hyperbola = Hyperbola::new(3.0, 4.0, 0.0, 0.0, Orientation::Vertical).unwrap();
        let params = SamplingParams {
            range: (-2.0, 2.0),
            ..SamplingParams::default()
        };
        assert!(hyperbola.tessellate(&params).is_empty());
    }
}
