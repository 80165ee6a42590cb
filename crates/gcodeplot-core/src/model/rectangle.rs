use serde::{Deserialize, Serialize};

use super::{number_attribute, ElementAttributes, Point};
use crate::error::ShapeError;

/// SVG `<rect x y width height>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// All four attributes are required; there is no SVG-style default of 0.
    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        let x = number_attribute(attrs, "x")?;
        let y = number_attribute(attrs, "y")?;
        let width = number_attribute(attrs, "width")?;
        let height = number_attribute(attrs, "height")?;
        Ok(Self::new(x, y, width, height))
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Relative moves tracing the outline from the origin and back.
    ///
    /// `height` drives the X axis and `width` the Y axis. Output produced by
    /// earlier releases depends on this axis assignment.
    pub fn perimeter_deltas(&self) -> [(f64, f64); 4] {
        [
            (self.height, 0.0),
            (0.0, self.width),
            (-self.height, 0.0),
            (0.0, -self.width),
        ]
    }
}
