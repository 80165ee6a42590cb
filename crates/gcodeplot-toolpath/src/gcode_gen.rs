//! G-code generation from toolpaths.
//!
//! The program is a fixed preamble, one line per motion segment and a fixed
//! postamble:
//!
//! ```text
//! G21
//! G90
//! G0 X0 Y0 Z5
//! ...segments...
//! G0 Z10
//! G0 X0 Y0 Z5
//! ```

use std::io::Write;

use gcodeplot_core::{ConversionParameters, Result};
use tracing::debug;

use crate::toolpath::{MotionSegment, Toolpath, PARK_Z, TRAVEL_Z};

fn home_line() -> String {
    format!("G0 X0 Y0 Z{}", format_number(TRAVEL_Z, None))
}

/// Millimeters, absolute positioning, home at travel height.
pub fn preamble() -> [String; 3] {
    ["G21".to_string(), "G90".to_string(), home_line()]
}

/// Park above the work, then home at travel height.
pub fn postamble() -> [String; 2] {
    [format!("G0 Z{}", format_number(PARK_Z, None)), home_line()]
}

/// Decimals kept when no fixed precision is configured. Trailing zeros are trimmed.
const SHORTEST_FORM_PLACES: usize = 9;

/// Formats a coordinate for a G-code word.
///
/// With `decimal_places` set the value is printed with exactly that many
/// decimals. Without it, integral values print without a fractional part and
/// other values keep up to nine decimals with trailing zeros removed, which
/// also absorbs floating point noise such as `3.06e-16` from `cos(90°)`.
/// Negative zero prints as `0`.
pub fn format_number(value: f64, decimal_places: Option<usize>) -> String {
    let text = match decimal_places {
        Some(places) => format!("{:.*}", places, value),
        None => {
            let fixed = format!("{:.*}", SHORTEST_FORM_PLACES, value);
            let trimmed = if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.')
            } else {
                fixed.as_str()
            };
            trimmed.to_string()
        }
    };

    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Serializes toolpaths into G-code text.
#[derive(Debug, Clone, Default)]
pub struct GcodeEmitter {
    decimal_places: Option<usize>,
}

impl GcodeEmitter {
    /// Creates a new G-code emitter.
    pub fn new(params: &ConversionParameters) -> Self {
        Self {
            decimal_places: params.decimal_places,
        }
    }

    /// Creates an emitter printing coordinates with a fixed number of decimals.
    pub fn with_decimal_places(decimal_places: Option<usize>) -> Self {
        Self { decimal_places }
    }

    fn coord(&self, value: f64) -> String {
        format_number(value, self.decimal_places)
    }

    /// Formats one segment as a single G-code line (no line terminator).
    pub fn format_segment(&self, segment: &MotionSegment) -> String {
        match *segment {
            MotionSegment::RapidXY { x, y } => {
                format!("G0 X{} Y{}", self.coord(x), self.coord(y))
            }
            MotionSegment::RapidZ { z } => format!("G0 Z{}", self.coord(z)),
            MotionSegment::FeedXY { x, y, feed_rate } => format!(
                "G1 F{} X{} Y{}",
                format_number(feed_rate, None),
                self.coord(x),
                self.coord(y)
            ),
            MotionSegment::ArcFeedXY { x, y, feed_rate, j } => format!(
                "G2 F{} X{} Y{} J{}",
                format_number(feed_rate, None),
                self.coord(x),
                self.coord(y),
                self.coord(j)
            ),
            MotionSegment::SetRelativeMode => "G91".to_string(),
            MotionSegment::SetAbsoluteMode => "G90".to_string(),
        }
    }

    /// Every line of the program, in order.
    pub fn lines<'a>(&'a self, toolpath: &'a Toolpath) -> impl Iterator<Item = String> + 'a {
        preamble()
            .into_iter()
            .chain(toolpath.segments.iter().map(|s| self.format_segment(s)))
            .chain(postamble())
    }

    /// Writes the program line by line and flushes the writer.
    ///
    /// The first failed write aborts the program. Returns the number of
    /// lines written.
    pub fn write_program<W: Write>(&self, toolpath: &Toolpath, out: &mut W) -> Result<usize> {
        let mut written = 0usize;
        for line in self.lines(toolpath) {
            writeln!(out, "{}", line)?;
            written += 1;
        }
        out.flush()?;
        debug!("Wrote {} G-code lines", written);
        Ok(written)
    }

    /// Generates the program as a single string.
    pub fn generate(&self, toolpath: &Toolpath) -> String {
        let mut gcode = String::new();
        for line in self.lines(toolpath) {
            gcode.push_str(&line);
            gcode.push('\n');
        }
        gcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0, None), "10");
        assert_eq!(format_number(-20.0, None), "-20");
        assert_eq!(format_number(2.5, None), "2.5");
        assert_eq!(format_number(7.0710678118654755, None), "7.071067812");
        assert_eq!(format_number(3.061616997868383e-16, None), "0");
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(-1e-12, None), "0");
        assert_eq!(format_number(1.5, Some(3)), "1.500");
        assert_eq!(format_number(-0.0001, Some(2)), "0.00");
        assert_eq!(format_number(12.0, Some(0)), "12");
    }

    #[test]
    fn test_format_segments() {
        let emitter = GcodeEmitter::default();
        assert_eq!(
            emitter.format_segment(&MotionSegment::RapidXY { x: 1.0, y: -2.0 }),
            "G0 X1 Y-2"
        );
        assert_eq!(
            emitter.format_segment(&MotionSegment::RapidZ { z: 0.0 }),
            "G0 Z0"
        );
        assert_eq!(
            emitter.format_segment(&MotionSegment::FeedXY {
                x: 3.0,
                y: 4.5,
                feed_rate: 5000.0
            }),
            "G1 F5000 X3 Y4.5"
        );
        assert_eq!(
            emitter.format_segment(&MotionSegment::ArcFeedXY {
                x: 20.0,
                y: 40.0,
                feed_rate: 5000.0,
                j: -10.0
            }),
            "G2 F5000 X20 Y40 J-10"
        );
        assert_eq!(emitter.format_segment(&MotionSegment::SetRelativeMode), "G91");
        assert_eq!(emitter.format_segment(&MotionSegment::SetAbsoluteMode), "G90");
    }

    #[test]
    fn test_fixed_precision_keeps_feed_rate_plain() {
        let emitter = GcodeEmitter::with_decimal_places(Some(3));
        assert_eq!(
            emitter.format_segment(&MotionSegment::FeedXY {
                x: 1.0,
                y: 2.0,
                feed_rate: 1200.0
            }),
            "G1 F1200 X1.000 Y2.000"
        );
    }

    #[test]
    fn test_preamble_and_postamble() {
        assert_eq!(preamble(), ["G21", "G90", "G0 X0 Y0 Z5"]);
        assert_eq!(postamble(), ["G0 Z10", "G0 X0 Y0 Z5"]);
    }

    #[test]
    fn test_fixed_precision_leaves_framing_lines_alone() {
        let gcode = GcodeEmitter::with_decimal_places(Some(3)).generate(&Toolpath::new());
        assert_eq!(gcode, "G21\nG90\nG0 X0 Y0 Z5\nG0 Z10\nG0 X0 Y0 Z5\n");
    }

    #[test]
    fn test_empty_program() {
        let gcode = GcodeEmitter::default().generate(&Toolpath::new());
        assert_eq!(gcode, "G21\nG90\nG0 X0 Y0 Z5\nG0 Z10\nG0 X0 Y0 Z5\n");
    }

    #[test]
    fn test_write_program_counts_lines() {
        let mut toolpath = Toolpath::new();
        toolpath.add_shape(vec![
            MotionSegment::RapidXY { x: 0.0, y: 0.0 },
            MotionSegment::RapidZ { z: 0.0 },
            MotionSegment::RapidZ { z: 5.0 },
        ]);

        let mut out = Vec::new();
        let written = GcodeEmitter::default()
            .write_program(&toolpath, &mut out)
            .unwrap();
        assert_eq!(written, 8);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 8);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let err = GcodeEmitter::default()
            .write_program(&Toolpath::new(), &mut FailingWriter)
            .unwrap_err();
        assert!(err.is_output_error());
    }
}
