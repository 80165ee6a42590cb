//! # GCodePlot Toolpath
//!
//! Turns the shapes of an SVG drawing into a G-code program.
//!
//! ## Pipeline
//!
//! ```text
//! SVG document
//!   └── SvgImporter        (elements -> shapes, malformed elements skipped)
//!
//! Shapes
//!   └── ToolpathGenerator  (one routine per shape kind)
//!         ├── ArcSampler       (circle -> points)
//!         └── SegmentRecorder  (travel/cut height, absolute/relative mode)
//!
//! Toolpath (MotionSegment sequence)
//!   └── GcodeEmitter       (preamble, one line per segment, postamble)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gcodeplot_core::ConversionParameters;
//! use gcodeplot_toolpath::{GcodeEmitter, SvgImporter, ToolpathGenerator};
//!
//! let params = ConversionParameters::default();
//! let design = SvgImporter::new().import_str(svg)?;
//! let toolpath = ToolpathGenerator::new(&params).generate_program(&design.shapes);
//! let gcode = GcodeEmitter::new(&params).generate(&toolpath);
//! ```

pub mod arc;
pub mod gcode_gen;
pub mod import;
pub mod toolpath;

pub use arc::{ArcSampler, CircleSamples};
pub use gcode_gen::{format_number, postamble, preamble, GcodeEmitter};
pub use import::{ImportedDesign, SkippedElement, SvgImporter};
pub use toolpath::{
    CoordinateMode, MotionSegment, SegmentRecorder, ToolHeight, ToolState, Toolpath,
    ToolpathGenerator, CUT_Z, PARK_Z, TRAVEL_Z,
};
