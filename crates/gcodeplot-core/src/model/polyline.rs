use serde::{Deserialize, Serialize};

use super::{parse_points, ElementAttributes, Point};
use crate::error::ShapeError;

/// Fewest points accepted for a polyline or polygon.
pub const MIN_POINTS: usize = 3;

fn checked_points(points: Vec<Point>) -> Result<Vec<Point>, ShapeError> {
    if points.len() < MIN_POINTS {
        return Err(ShapeError::NotEnoughPoints {
            count: points.len(),
            required: MIN_POINTS,
        });
    }
    Ok(points)
}

fn points_from_attributes<A>(attrs: &A) -> Result<Vec<Point>, ShapeError>
where
    A: ElementAttributes + ?Sized,
{
    let raw = attrs
        .attribute("points")
        .ok_or_else(|| ShapeError::MissingAttribute {
            attribute: "points".to_string(),
        })?;
    checked_points(parse_points(raw)?)
}

/// SVG `<polyline points>`: an open chain of at least three points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        Ok(Self {
            points: checked_points(points)?,
        })
    }

    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        Ok(Self {
            points: points_from_attributes(attrs)?,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }
}

impl TryFrom<Vec<Point>> for Polyline {
    type Error = ShapeError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Polyline> for Vec<Point> {
    fn from(polyline: Polyline) -> Self {
        polyline.points
    }
}

/// SVG `<polygon points>`: like a polyline, but implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        Ok(Self {
            points: checked_points(points)?,
        })
    }

    pub fn from_attributes<A>(attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        Ok(Self {
            points: points_from_attributes(attrs)?,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// True when the point list already ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// The extra point needed to close the outline, if any.
    pub fn closing_point(&self) -> Option<Point> {
        (!self.is_closed()).then(|| self.first())
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = ShapeError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_needs_three_points() {
        let attrs = [("points", "0,0 1,1")];
        assert_eq!(
            Polyline::from_attributes(&attrs),
            Err(ShapeError::NotEnoughPoints {
                count: 2,
                required: 3
            })
        );

        let attrs = [("points", "0,0 1,1 2,0")];
        let polyline = Polyline::from_attributes(&attrs).unwrap();
        assert_eq!(polyline.points().len(), 3);
        assert_eq!(polyline.first(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_polyline_missing_points() {
        let attrs = [("fill", "none")];
        assert!(matches!(
            Polyline::from_attributes(&attrs),
            Err(ShapeError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_polygon_closing_point() {
        let open = Polygon::from_attributes(&[("points", "0,0 10,0 10,10")]).unwrap();
        assert!(!open.is_closed());
        assert_eq!(open.closing_point(), Some(Point::new(0.0, 0.0)));

        let closed = Polygon::from_attributes(&[("points", "0,0 10,0 0,0")]).unwrap();
        assert!(closed.is_closed());
        assert_eq!(closed.closing_point(), None);
    }

    #[test]
    fn test_polygon_serde_rejects_short_lists() {
        let json = r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":1.0}]"#;
        assert!(serde_json::from_str::<Polygon>(json).is_err());

        let json = r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":1.0},{"x":2.0,"y":0.0}]"#;
        let polygon: Polygon = serde_json::from_str(json).unwrap();
        assert_eq!(polygon.points().len(), 3);
    }
}
