use serde::{Deserialize, Serialize};

use super::{number_attribute, ElementAttributes, Point};
use crate::error::ShapeError;

/// SVG `<circle cx cy r>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        let cx = number_attribute(attrs, "cx")?;
        let cy = number_attribute(attrs, "cy")?;
        let radius = number_attribute(attrs, "r")?;
        Ok(Self::new(Point::new(cx, cy), radius))
    }
}
