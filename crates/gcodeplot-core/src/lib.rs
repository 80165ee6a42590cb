//! # GCodePlot Core
//!
//! Core types shared by every GCodePlot crate:
//! - The shape model for the supported SVG primitives (line, rect, polyline,
//!   polygon, circle, ellipse) and the attribute parsing that builds it
//! - Conversion parameters (feed rate, curve accuracy, output precision)
//! - Error types for per-element failures and fatal conversion failures

pub mod error;
pub mod model;
pub mod params;

pub use error::{ConvertError, Result, ShapeError};

pub use model::{
    Circle, ElementAttributes, Ellipse, Line, Point, Polygon, Polyline, Rectangle, Shape,
    ShapeType,
};

pub use params::ConversionParameters;
