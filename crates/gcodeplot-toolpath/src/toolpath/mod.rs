//! Toolpath generation from SVG shapes.

mod generator;
mod segment;
mod state;

pub use generator::ToolpathGenerator;
pub use segment::MotionSegment;
pub use state::{
    CoordinateMode, RelativeMode, SegmentRecorder, ToolHeight, ToolState, CUT_Z, PARK_Z,
    TRAVEL_Z,
};

/// The motion of a whole program, shape after shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolpath {
    pub segments: Vec<MotionSegment>,
    /// Number of shapes that contributed segments
    pub shape_count: usize,
}

impl Toolpath {
    /// Creates a new empty toolpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the complete motion of one shape.
    pub fn add_shape(&mut self, segments: Vec<MotionSegment>) {
        if segments.is_empty() {
            return;
        }
        self.segments.extend(segments);
        self.shape_count += 1;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn feed_move_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_feed()).count()
    }

    pub fn plunge_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_plunge()).count()
    }
}
