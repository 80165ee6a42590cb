//! Toolpath generator implementation.
//!
//! One routine per shape kind. Each routine is a pure function from a shape
//! to its motion: rapid to the start point, plunge, cut, retract.

use gcodeplot_core::{
    Circle, ConversionParameters, Ellipse, Line, Point, Polygon, Polyline, Rectangle, Shape,
    ShapeType,
};
use tracing::{debug, warn};

use super::{MotionSegment, SegmentRecorder, Toolpath};
use crate::arc::ArcSampler;

/// Generates toolpaths from shapes.
#[derive(Debug, Clone)]
pub struct ToolpathGenerator {
    feed_rate: f64,
    sampler: ArcSampler,
}

impl ToolpathGenerator {
    /// Creates a generator bound to one run's parameters.
    pub fn new(params: &ConversionParameters) -> Self {
        Self {
            feed_rate: params.feed_rate,
            sampler: ArcSampler::from_params(params),
        }
    }

    fn recorder(&self) -> SegmentRecorder {
        SegmentRecorder::new(self.feed_rate)
    }

    /// Builds the whole program.
    ///
    /// Kinds are emitted in [`ShapeType::ALL`] order (lines first, ellipses
    /// last); shapes of the same kind keep their input order.
    pub fn generate_program(&self, shapes: &[Shape]) -> Toolpath {
        let mut toolpath = Toolpath::new();
        for kind in ShapeType::ALL {
            let mut count = 0usize;
            for shape in shapes.iter().filter(|s| s.kind() == kind) {
                count += 1;
                debug!("Generating {} {}", kind, count);
                toolpath.add_shape(self.generate_shape(shape));
            }
            if count == 0 {
                debug!("No {} shapes to generate", kind);
            }
        }
        toolpath
    }

    pub fn generate_shape(&self, shape: &Shape) -> Vec<MotionSegment> {
        match shape {
            Shape::Line(s) => self.generate_line(s),
            Shape::Rectangle(s) => self.generate_rectangle(s),
            Shape::Polyline(s) => self.generate_polyline(s),
            Shape::Polygon(s) => self.generate_polygon(s),
            Shape::Circle(s) => self.generate_circle(s),
            Shape::Ellipse(s) => self.generate_ellipse(s),
        }
    }

    /// The second leg is a rapid move, matching the output of earlier
    /// releases; plotters with a pen drop draw it all the same.
    pub fn generate_line(&self, line: &Line) -> Vec<MotionSegment> {
        let mut rec = self.recorder();
        rec.rapid_to(line.start);
        rec.plunge();
        rec.rapid_to(line.end);
        rec.retract();
        rec.finish()
    }

    /// Traces the outline with relative rapids (see
    /// [`Rectangle::perimeter_deltas`] for the axis assignment).
    pub fn generate_rectangle(&self, rect: &Rectangle) -> Vec<MotionSegment> {
        let mut rec = self.recorder();
        rec.rapid_to(rect.origin());
        rec.plunge();
        {
            let mut relative = rec.relative_mode();
            for (dx, dy) in rect.perimeter_deltas() {
                relative.rapid_to(Point::new(dx, dy));
            }
        }
        rec.retract();
        rec.finish()
    }

    pub fn generate_polyline(&self, polyline: &Polyline) -> Vec<MotionSegment> {
        let mut rec = self.recorder();
        self.cut_chain(&mut rec, polyline.points());
        rec.retract();
        rec.finish()
    }

    /// Like a polyline, plus a closing move when the last point is not the first.
    pub fn generate_polygon(&self, polygon: &Polygon) -> Vec<MotionSegment> {
        let mut rec = self.recorder();
        self.cut_chain(&mut rec, polygon.points());
        if let Some(start) = polygon.closing_point() {
            debug!("Closing polygon back to ({}, {})", start.x, start.y);
            rec.feed_to(start);
        }
        rec.retract();
        rec.finish()
    }

    /// The first sample is the rapid target; the rest are cut in order.
    /// There is no closing move back to the first sample.
    pub fn generate_circle(&self, circle: &Circle) -> Vec<MotionSegment> {
        if circle.radius <= 0.0 {
            warn!(
                "Circle at ({}, {}) has non-positive radius {}",
                circle.center.x, circle.center.y, circle.radius
            );
        }

        let mut samples = self.sampler.sample_circle(circle.center, circle.radius);
        let Some(start) = samples.next() else {
            debug!("Circle produced no samples, skipping");
            return Vec::new();
        };

        let mut rec = self.recorder();
        rec.rapid_to(start);
        rec.plunge();
        for p in samples {
            rec.feed_to(p);
        }
        rec.retract();
        rec.finish()
    }

    /// Two clockwise half-turns: over the top to the left vertex, then back
    /// underneath to the right vertex.
    pub fn generate_ellipse(&self, ellipse: &Ellipse) -> Vec<MotionSegment> {
        if ellipse.rx <= 0.0 || ellipse.ry <= 0.0 {
            warn!(
                "Ellipse at ({}, {}) has non-positive radii {} x {}",
                ellipse.center.x, ellipse.center.y, ellipse.rx, ellipse.ry
            );
        }

        let mut rec = self.recorder();
        rec.rapid_to(ellipse.right_vertex());
        rec.plunge();
        debug!("Drawing the top half of the ellipse");
        rec.arc_feed_to(ellipse.left_vertex(), ellipse.ry);
        debug!("Drawing the bottom half of the ellipse");
        rec.arc_feed_to(ellipse.right_vertex(), -ellipse.ry);
        rec.retract();
        rec.finish()
    }

    fn cut_chain(&self, rec: &mut SegmentRecorder, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        rec.rapid_to(*first);
        rec.plunge();
        for p in rest {
            rec.feed_to(*p);
        }
    }
}

impl Default for ToolpathGenerator {
    fn default() -> Self {
        Self::new(&ConversionParameters::default())
    }
}
