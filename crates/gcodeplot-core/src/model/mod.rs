use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

mod circle;
mod ellipse;
mod line;
mod polyline;
mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polyline::{Polygon, Polyline, MIN_POINTS};
pub use rectangle::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Read access to the named string attributes of one document element.
///
/// The shape model only needs attribute lookup, so any parsed document (or a
/// plain map in tests) can feed it.
pub trait ElementAttributes {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl ElementAttributes for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ElementAttributes for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<'a> ElementAttributes for [(&'a str, &'a str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

impl<'a, const N: usize> ElementAttributes for [(&'a str, &'a str); N] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_slice().attribute(name)
    }
}

/// Reads a required numeric attribute.
///
/// Empty and missing attributes are both reported as missing; anything that
/// does not parse to a finite `f64` is an invalid number.
pub fn number_attribute<A>(attrs: &A, name: &str) -> Result<f64, ShapeError>
where
    A: ElementAttributes + ?Sized,
{
    let raw = attrs
        .attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ShapeError::MissingAttribute {
            attribute: name.to_string(),
        })?;

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ShapeError::InvalidNumber {
            attribute: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Parses an SVG `points` list made of whitespace separated `x,y` tokens.
pub fn parse_points(value: &str) -> Result<Vec<Point>, ShapeError> {
    value
        .split_whitespace()
        .map(|token| {
            let invalid = || ShapeError::InvalidPoint {
                token: token.to_string(),
            };
            let (x, y) = token.split_once(',').ok_or_else(invalid)?;
            let x = x.parse::<f64>().map_err(|_| invalid())?;
            let y = y.parse::<f64>().map_err(|_| invalid())?;
            if !x.is_finite() || !y.is_finite() {
                return Err(invalid());
            }
            Ok(Point::new(x, y))
        })
        .collect()
}

/// The supported SVG primitives.
///
/// [`ShapeType::ALL`] is also the order in which the kinds are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Line,
    Rectangle,
    Polyline,
    Polygon,
    Circle,
    Ellipse,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Line,
        ShapeType::Rectangle,
        ShapeType::Polyline,
        ShapeType::Polygon,
        ShapeType::Circle,
        ShapeType::Ellipse,
    ];

    /// SVG element name for this kind.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rect",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Polyline => write!(f, "polyline"),
            Self::Polygon => write!(f, "polygon"),
            Self::Circle => write!(f, "circle"),
            Self::Ellipse => write!(f, "ellipse"),
        }
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "rect" | "rectangle" => Ok(Self::Rectangle),
            "polyline" => Ok(Self::Polyline),
            "polygon" => Ok(Self::Polygon),
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            _ => Err(format!("Unsupported shape element: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Polyline(Polyline),
    Polygon(Polygon),
    Circle(Circle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Builds a shape of the given kind from an element's attributes.
    pub fn from_element<A>(kind: ShapeType, attrs: &A) -> Result<Self, ShapeError>
    where
        A: ElementAttributes + ?Sized,
    {
        Ok(match kind {
            ShapeType::Line => Shape::Line(Line::from_attributes(attrs)?),
            ShapeType::Rectangle => Shape::Rectangle(Rectangle::from_attributes(attrs)?),
            ShapeType::Polyline => Shape::Polyline(Polyline::from_attributes(attrs)?),
            ShapeType::Polygon => Shape::Polygon(Polygon::from_attributes(attrs)?),
            ShapeType::Circle => Shape::Circle(Circle::from_attributes(attrs)?),
            ShapeType::Ellipse => Shape::Ellipse(Ellipse::from_attributes(attrs)?),
        })
    }

    pub fn kind(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Polyline(_) => ShapeType::Polyline,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
        }
    }

    /// Where the tool first touches down for this shape.
    pub fn start_point(&self) -> Point {
        match self {
            Shape::Line(s) => s.start,
            Shape::Rectangle(s) => s.origin(),
            Shape::Polyline(s) => s.first(),
            Shape::Polygon(s) => s.first(),
            Shape::Circle(s) => Point::new(s.center.x + s.radius, s.center.y),
            Shape::Ellipse(s) => s.right_vertex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_attribute() {
        let attrs = [("x", "12"), ("y", " -3.5 "), ("w", ""), ("h", "ten")];
        assert_eq!(number_attribute(&attrs, "x"), Ok(12.0));
        assert_eq!(number_attribute(&attrs, "y"), Ok(-3.5));
        assert!(matches!(
            number_attribute(&attrs, "w"),
            Err(ShapeError::MissingAttribute { .. })
        ));
        assert!(matches!(
            number_attribute(&attrs, "missing"),
            Err(ShapeError::MissingAttribute { .. })
        ));
        assert_eq!(
            number_attribute(&attrs, "h"),
            Err(ShapeError::InvalidNumber {
                attribute: "h".to_string(),
                value: "ten".to_string(),
            })
        );
    }

    #[test]
    fn test_number_attribute_rejects_non_finite() {
        let attrs = [("r", "inf"), ("cx", "NaN")];
        assert!(number_attribute(&attrs, "r").is_err());
        assert!(number_attribute(&attrs, "cx").is_err());
    }

    #[test]
    fn test_parse_points() {
        let points = parse_points("0,0  10,0\n10,10").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0)
            ]
        );

        assert_eq!(
            parse_points("0,0 10"),
            Err(ShapeError::InvalidPoint {
                token: "10".to_string()
            })
        );
        assert!(parse_points("0,0 a,b").is_err());
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn test_shape_type_order_and_tags() {
        let tags: Vec<_> = ShapeType::ALL.iter().map(|k| k.tag_name()).collect();
        assert_eq!(
            tags,
            vec!["line", "rect", "polyline", "polygon", "circle", "ellipse"]
        );
        assert_eq!("rect".parse::<ShapeType>(), Ok(ShapeType::Rectangle));
        assert!("path".parse::<ShapeType>().is_err());
    }

    #[test]
    fn test_hash_map_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("cx".to_string(), "5".to_string());
        attrs.insert("cy".to_string(), "6".to_string());
        attrs.insert("r".to_string(), "2".to_string());

        let shape = Shape::from_element(ShapeType::Circle, &attrs).unwrap();
        assert_eq!(shape.kind(), ShapeType::Circle);
        assert_eq!(shape.start_point(), Point::new(7.0, 6.0));
    }
}
