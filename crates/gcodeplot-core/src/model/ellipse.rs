use serde::{Deserialize, Serialize};

use super::{number_attribute, ElementAttributes, Point};
use crate::error::ShapeError;

/// SVG `<ellipse cx cy rx ry>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        let cx = number_attribute(attrs, "cx")?;
        let cy = number_attribute(attrs, "cy")?;
        let rx = number_attribute(attrs, "rx")?;
        let ry = number_attribute(attrs, "ry")?;
        Ok(Self::new(Point::new(cx, cy), rx, ry))
    }

    /// `(cx + rx, cy)`
    pub fn right_vertex(&self) -> Point {
        Point::new(self.center.x + self.rx, self.center.y)
    }

    /// `(cx - rx, cy)`
    pub fn left_vertex(&self) -> Point {
        Point::new(self.center.x - self.rx, self.center.y)
    }
}
