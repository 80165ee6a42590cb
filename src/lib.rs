//! # GCodePlot
//!
//! Converts the basic shapes of an SVG drawing into G-code for pen plotters,
//! laser engravers and CNC routers.
//!
//! ## Architecture
//!
//! GCodePlot is organized as a workspace with multiple crates:
//!
//! 1. **gcodeplot-core** - Shape model, conversion parameters, error types
//! 2. **gcodeplot-toolpath** - SVG import, toolpath generation, G-code emission
//! 3. **gcodeplot-settings** - Configuration files and command-line overrides
//! 4. **gcodeplot** - The conversion pipeline and the `gcodeplot` binary
//!
//! ## Supported elements
//!
//! `line`, `rect`, `polyline`, `polygon`, `circle` and `ellipse`. Circles are
//! cut as straight segments, ellipses as two clockwise arcs. Other elements
//! are ignored and malformed ones are skipped.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

pub use gcodeplot_core::{
    Circle, ConversionParameters, ConvertError, Ellipse, Line, Point, Polygon, Polyline,
    Rectangle, Shape, ShapeError, ShapeType,
};
pub use gcodeplot_settings::{Config, SettingsError, SettingsOverrides};
pub use gcodeplot_toolpath::{
    GcodeEmitter, ImportedDesign, MotionSegment, SkippedElement, SvgImporter, Toolpath,
    ToolpathGenerator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "output.gcode";

/// Initialize logging
///
/// Log lines go to stderr so that G-code can be streamed to stdout.
/// `RUST_LOG` takes precedence; otherwise info and above are shown, or
/// everything down to debug level when `debug` is set. Colors are used only
/// when stderr is a terminal.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(debug)
        .with_level(true)
        .with_line_number(debug);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Where the G-code goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` means standard output; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }

    fn open(&self) -> gcodeplot_core::Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| ConvertError::OutputOpen {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// What one conversion run did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    /// Converted shapes per kind
    pub shapes: BTreeMap<ShapeType, usize>,
    /// Elements left out, with the reason
    pub skipped: Vec<SkippedElement>,
    /// G-code lines written, preamble and postamble included
    pub lines_written: usize,
}

impl ConversionReport {
    pub fn shape_count(&self) -> usize {
        self.shapes.values().sum()
    }

    fn log_summary(&self, output: &OutputTarget) {
        for (kind, count) in &self.shapes {
            debug!("{} {} shape(s)", count, kind);
        }
        debug!(
            "Converted {} shape(s), skipped {}, wrote {} lines to {}",
            self.shape_count(),
            self.skipped.len(),
            self.lines_written,
            output
        );
    }
}

/// Converts SVG content to a G-code program held in memory.
pub fn convert_str(
    content: &str,
    params: &ConversionParameters,
) -> gcodeplot_core::Result<(String, ImportedDesign)> {
    params.validate()?;
    let design = SvgImporter::new().import_str(content)?;
    let toolpath = ToolpathGenerator::new(params).generate_program(&design.shapes);
    Ok((GcodeEmitter::new(params).generate(&toolpath), design))
}

/// Converts an SVG file and writes the program to `output`.
///
/// The input is read and parsed before the output is opened, so a bad input
/// never truncates an existing output file. The output is opened before any
/// shape is generated and closed when the writer goes out of scope, on the
/// error path too.
pub fn convert_file(
    input: &Path,
    output: &OutputTarget,
    params: &ConversionParameters,
) -> anyhow::Result<ConversionReport> {
    params.validate().context("Invalid conversion parameters")?;
    debug!(
        "Print area {} x {} mm, feed rate {}, accuracy {}",
        params.width, params.height, params.feed_rate, params.accuracy
    );

    let design = SvgImporter::new().import_file(input)?;
    if design.is_empty() {
        warn!("{} contains no convertible shapes", input.display());
    }

    let mut writer = BufWriter::new(output.open()?);

    let toolpath = ToolpathGenerator::new(params).generate_program(&design.shapes);
    debug!(
        "Toolpath has {} segments, {} of them cutting",
        toolpath.len(),
        toolpath.feed_move_count()
    );
    let lines_written = GcodeEmitter::new(params).write_program(&toolpath, &mut writer)?;

    let mut shapes = BTreeMap::new();
    for shape in &design.shapes {
        *shapes.entry(shape.kind()).or_insert(0) += 1;
    }

    let report = ConversionReport {
        shapes,
        skipped: design.skipped,
        lines_written,
    };
    report.log_summary(output);
    Ok(report)
}
