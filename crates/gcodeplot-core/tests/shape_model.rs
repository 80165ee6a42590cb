use std::collections::HashMap;

use gcodeplot_core::{Point, Shape, ShapeError, ShapeType};

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_every_kind_builds_from_attributes() {
    let cases = [
        (ShapeType::Line, attrs(&[("x1", "1"), ("y1", "2"), ("x2", "3"), ("y2", "4")])),
        (
            ShapeType::Rectangle,
            attrs(&[("x", "1"), ("y", "2"), ("width", "3"), ("height", "4")]),
        ),
        (ShapeType::Polyline, attrs(&[("points", "1,2 3,4 5,6")])),
        (ShapeType::Polygon, attrs(&[("points", "1,2 3,4 5,6")])),
        (ShapeType::Circle, attrs(&[("cx", "1"), ("cy", "2"), ("r", "3")])),
        (
            ShapeType::Ellipse,
            attrs(&[("cx", "1"), ("cy", "2"), ("rx", "3"), ("ry", "4")]),
        ),
    ];

    for (kind, attrs) in &cases {
        let shape = Shape::from_element(*kind, attrs).unwrap();
        assert_eq!(shape.kind(), *kind);
    }
}

#[test]
fn test_start_points() {
    let circle = Shape::from_element(
        ShapeType::Circle,
        &attrs(&[("cx", "10"), ("cy", "20"), ("r", "5")]),
    )
    .unwrap();
    assert_eq!(circle.start_point(), Point::new(15.0, 20.0));

    let ellipse = Shape::from_element(
        ShapeType::Ellipse,
        &attrs(&[("cx", "10"), ("cy", "20"), ("rx", "7"), ("ry", "3")]),
    )
    .unwrap();
    assert_eq!(ellipse.start_point(), Point::new(17.0, 20.0));
}

#[test]
fn test_one_bad_attribute_rejects_the_shape() {
    let err = Shape::from_element(
        ShapeType::Rectangle,
        &attrs(&[("x", "0"), ("y", "0"), ("width", "10px"), ("height", "4")]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ShapeError::InvalidNumber {
            attribute: "width".to_string(),
            value: "10px".to_string()
        }
    );
}

#[test]
fn test_bad_point_token_rejects_the_polygon() {
    let err = Shape::from_element(
        ShapeType::Polygon,
        &attrs(&[("points", "0,0 10;0 10,10")]),
    )
    .unwrap_err();
    assert!(matches!(err, ShapeError::InvalidPoint { .. }));
}

#[test]
fn test_shape_json_round_trip() {
    let shape = Shape::from_element(ShapeType::Polygon, &attrs(&[("points", "0,0 4,0 4,3")]))
        .unwrap();
    let json = serde_json::to_string(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);

    let too_short = r#"{"Polygon":[{"x":0.0,"y":0.0},{"x":1.0,"y":1.0}]}"#;
    assert!(serde_json::from_str::<Shape>(too_short).is_err());
}
