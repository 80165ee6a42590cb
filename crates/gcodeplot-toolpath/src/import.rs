//! # SVG Import
//!
//! Reads the six basic SVG primitives (`line`, `rect`, `polyline`,
//! `polygon`, `circle`, `ellipse`) out of a document. Everything else
//! (paths, text, groups' transforms, styling) is ignored.
//!
//! Elements are collected kind by kind in [`ShapeType::ALL`] order and, within
//! a kind, in document order. An element with a missing or malformed
//! attribute is not fatal: it is recorded as a [`SkippedElement`] and the
//! import carries on.

use std::fmt;
use std::path::Path;

use gcodeplot_core::{ConvertError, ElementAttributes, Result, Shape, ShapeError, ShapeType};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// Shapes read from one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedDesign {
    /// Converted shapes, grouped by kind
    pub shapes: Vec<Shape>,
    /// Elements that could not be converted
    pub skipped: Vec<SkippedElement>,
}

impl ImportedDesign {
    /// Number of imported shapes of one kind.
    pub fn count(&self, kind: ShapeType) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// An element left out of the import
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedElement {
    /// Element kind
    pub kind: ShapeType,
    /// Zero-based position among the document's elements of the same kind
    pub index: usize,
    /// Why the element was rejected
    pub error: ShapeError,
}

impl fmt::Display for SkippedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: {}", self.kind, self.index, self.error)
    }
}

/// Attribute view of a parsed SVG element.
struct SvgElement<'a, 'input>(Node<'a, 'input>);

impl ElementAttributes for SvgElement<'_, '_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }
}

/// SVG importer for the basic shape elements
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgImporter;

impl SvgImporter {
    pub fn new() -> Self {
        Self
    }

    /// Reads and imports an SVG file.
    pub fn import_file(&self, path: &Path) -> Result<ImportedDesign> {
        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        self.import_str(&content)
    }

    /// Imports SVG content from a string.
    pub fn import_str(&self, content: &str) -> Result<ImportedDesign> {
        // Inkscape and Illustrator exports often carry a DOCTYPE.
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = Document::parse_with_options(content, options).map_err(|e| {
            ConvertError::InputParse {
                reason: e.to_string(),
            }
        })?;

        let mut design = ImportedDesign::default();
        for kind in ShapeType::ALL {
            let elements = doc
                .descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == kind.tag_name());

            for (index, node) in elements.enumerate() {
                match Shape::from_element(kind, &SvgElement(node)) {
                    Ok(shape) => design.shapes.push(shape),
                    Err(error) => {
                        let skipped = SkippedElement { kind, index, error };
                        debug!("Skipping {}", skipped);
                        design.skipped.push(skipped);
                    }
                }
            }
        }

        debug!(
            "Imported {} shapes, skipped {} elements",
            design.shapes.len(),
            design.skipped.len()
        );
        Ok(design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodeplot_core::Point;

    fn svg(body: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200">{}</svg>"#,
            body
        )
    }

    #[test]
    fn test_import_all_kinds_in_kind_order() {
        let content = svg(
            r#"<ellipse cx="50" cy="40" rx="30" ry="10"/>
               <circle cx="0" cy="0" r="5"/>
               <polygon points="0,0 10,0 10,10"/>
               <polyline points="0,0 1,1 2,0"/>
               <rect x="1" y="2" width="3" height="4"/>
               <line x1="0" y1="0" x2="10" y2="10"/>"#,
        );
        let design = SvgImporter::new().import_str(&content).unwrap();

        let kinds: Vec<_> = design.shapes.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, ShapeType::ALL.to_vec());
        assert!(design.skipped.is_empty());
    }

    #[test]
    fn test_document_order_within_kind() {
        let content = svg(
            r#"<g><line x1="5" y1="5" x2="6" y2="6"/></g>
               <line x1="1" y1="1" x2="2" y2="2"/>"#,
        );
        let design = SvgImporter::new().import_str(&content).unwrap();
        let starts: Vec<_> = design.shapes.iter().map(|s| s.start_point()).collect();
        assert_eq!(starts, vec![Point::new(5.0, 5.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_malformed_element_is_skipped() {
        let content = svg(
            r#"<rect x="0" y="0" width="abc" height="5"/>
               <rect x="0" y="0" width="4" height="5"/>
               <polyline points="0,0 1,1"/>"#,
        );
        let design = SvgImporter::new().import_str(&content).unwrap();

        assert_eq!(design.count(ShapeType::Rectangle), 1);
        assert_eq!(design.skipped.len(), 2);
        assert_eq!(design.skipped[0].kind, ShapeType::Rectangle);
        assert_eq!(design.skipped[0].index, 0);
        assert!(matches!(
            design.skipped[0].error,
            ShapeError::InvalidNumber { .. }
        ));
        assert!(matches!(
            design.skipped[1].error,
            ShapeError::NotEnoughPoints { count: 2, .. }
        ));
    }

    #[test]
    fn test_missing_attribute_is_skipped() {
        let content = svg(r#"<circle cx="1" cy="1"/>"#);
        let design = SvgImporter::new().import_str(&content).unwrap();
        assert!(design.is_empty());
        assert_eq!(
            design.skipped[0].error,
            ShapeError::MissingAttribute {
                attribute: "r".to_string()
            }
        );
    }

    #[test]
    fn test_ignores_unsupported_elements() {
        let content = svg(r#"<path d="M0 0 L10 10"/><text x="0" y="0">hi</text>"#);
        let design = SvgImporter::new().import_str(&content).unwrap();
        assert!(design.is_empty());
        assert!(design.skipped.is_empty());
    }

    #[test]
    fn test_doctype_is_accepted() {
        let content = format!(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
             \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n{}",
            svg(r#"<line x1="0" y1="0" x2="1" y2="1"/>"#)
        );
        let design = SvgImporter::new().import_str(&content).unwrap();
        assert_eq!(design.shapes.len(), 1);
    }

    #[test]
    fn test_invalid_xml_is_fatal() {
        let err = SvgImporter::new().import_str("<svg><line").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = SvgImporter::new()
            .import_file(Path::new("/nonexistent/drawing.svg"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InputRead { .. }));
    }
}
