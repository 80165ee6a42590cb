//! Arc Sampler
//!
//! Approximates a full circle with `accuracy` evenly spaced points so the
//! generator can cut it as straight feed moves.
//!
//! Sample `i` sits at `i * 360 / accuracy` degrees, starting on the positive
//! X axis and turning counter-clockwise. The step is converted to radians
//! before it reaches `sin`/`cos`; feeding raw degree values into the
//! trigonometric functions would scatter the samples around the circle
//! instead of walking it.

use gcodeplot_core::{ConversionParameters, Point};

/// Produces circle samples for a fixed subdivision count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcSampler {
    accuracy: u32,
}

impl ArcSampler {
    /// Create a sampler producing `accuracy` points per circle
    pub fn new(accuracy: u32) -> Self {
        Self { accuracy }
    }

    pub fn from_params(params: &ConversionParameters) -> Self {
        Self::new(params.accuracy)
    }

    /// Samples a full circle. The returned iterator is single-pass.
    pub fn sample_circle(&self, center: Point, radius: f64) -> CircleSamples {
        let step_degrees = if self.accuracy == 0 {
            0.0
        } else {
            360.0 / f64::from(self.accuracy)
        };
        CircleSamples {
            center,
            radius,
            step_radians: step_degrees.to_radians(),
            index: 0,
            count: self.accuracy,
        }
    }
}

impl Default for ArcSampler {
    fn default() -> Self {
        Self::from_params(&ConversionParameters::default())
    }
}

/// Points of one sampled circle, in angular order
#[derive(Debug, Clone)]
pub struct CircleSamples {
    center: Point,
    radius: f64,
    step_radians: f64,
    index: u32,
    count: u32,
}

impl Iterator for CircleSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }
        // Multiply rather than accumulate so the last sample cannot drift past 360.
        let angle = f64::from(self.index) * self.step_radians;
        self.index += 1;
        Some(Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CircleSamples {}
