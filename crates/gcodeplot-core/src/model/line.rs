use serde::{Deserialize, Serialize};

use super::{number_attribute, ElementAttributes, Point};
use crate::error::ShapeError;

/// SVG `<line x1 y1 x2 y2>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        let x1 = number_attribute(attrs, "x1")?;
        let y1 = number_attribute(attrs, "y1")?;
        let x2 = number_attribute(attrs, "x2")?;
        let y2 = number_attribute(attrs, "y2")?;
        Ok(Self::new(Point::new(x1, y1), Point::new(x2, y2)))
    }
}
