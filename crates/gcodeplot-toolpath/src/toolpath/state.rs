//! Tool state tracking.
//!
//! Every shape starts and ends with the tool at travel height in absolute
//! mode. [`SegmentRecorder`] records one shape's motion and keeps the two
//! state axes in step with the segments it emits; breaking the discipline
//! (feeding while lifted, finishing a shape while plunged or relative) is a
//! bug in a generator and trips a debug assertion.

use std::ops::{Deref, DerefMut};

use gcodeplot_core::Point;

use super::MotionSegment;

/// Z of the tool between shapes
pub const TRAVEL_Z: f64 = 5.0;
/// Z of the tool while cutting
pub const CUT_Z: f64 = 0.0;
/// Z used by the program postamble before homing
pub const PARK_Z: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolHeight {
    #[default]
    Travel,
    Cutting,
}

impl ToolHeight {
    pub fn z(&self) -> f64 {
        match self {
            Self::Travel => TRAVEL_Z,
            Self::Cutting => CUT_Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateMode {
    #[default]
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    pub height: ToolHeight,
    pub mode: CoordinateMode,
}

impl ToolState {
    /// Travel height and absolute mode: the only state allowed between shapes.
    pub fn is_idle(&self) -> bool {
        self.height == ToolHeight::Travel && self.mode == CoordinateMode::Absolute
    }
}

/// Records the motion of a single shape.
#[derive(Debug)]
pub struct SegmentRecorder {
    segments: Vec<MotionSegment>,
    state: ToolState,
    feed_rate: f64,
}

impl SegmentRecorder {
    pub fn new(feed_rate: f64) -> Self {
        Self {
            segments: Vec::new(),
            state: ToolState::default(),
            feed_rate,
        }
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn segments(&self) -> &[MotionSegment] {
        &self.segments
    }

    /// Rapid XY move. In relative mode the coordinates are deltas.
    pub fn rapid_to(&mut self, p: Point) {
        self.segments.push(MotionSegment::rapid(p));
    }

    pub fn plunge(&mut self) {
        debug_assert_eq!(self.state.height, ToolHeight::Travel, "plunge while cutting");
        self.state.height = ToolHeight::Cutting;
        self.segments.push(MotionSegment::RapidZ {
            z: self.state.height.z(),
        });
    }

    pub fn retract(&mut self) {
        debug_assert_eq!(self.state.height, ToolHeight::Cutting, "retract while lifted");
        self.state.height = ToolHeight::Travel;
        self.segments.push(MotionSegment::RapidZ {
            z: self.state.height.z(),
        });
    }

    pub fn feed_to(&mut self, p: Point) {
        debug_assert_eq!(self.state.height, ToolHeight::Cutting, "feed move while lifted");
        self.segments.push(MotionSegment::feed(p, self.feed_rate));
    }

    /// Clockwise arc to `p` whose center lies `j` away along Y.
    pub fn arc_feed_to(&mut self, p: Point, j: f64) {
        debug_assert_eq!(self.state.height, ToolHeight::Cutting, "arc move while lifted");
        self.segments.push(MotionSegment::arc_feed(p, self.feed_rate, j));
    }

    /// Switches to relative coordinates until the returned guard is dropped.
    pub fn relative_mode(&mut self) -> RelativeMode<'_> {
        debug_assert_eq!(self.state.mode, CoordinateMode::Absolute, "nested relative mode");
        self.segments.push(MotionSegment::SetRelativeMode);
        self.state.mode = CoordinateMode::Relative;
        RelativeMode { recorder: self }
    }

    /// Hands back the recorded motion.
    pub fn finish(self) -> Vec<MotionSegment> {
        debug_assert!(
            self.state.is_idle(),
            "shape finished in state {:?}",
            self.state
        );
        self.segments
    }
}

/// Scope of a relative-coordinate excursion.
///
/// Dropping it emits `SetAbsoluteMode`, so a shape cannot leak relative mode
/// into the next one.
#[derive(Debug)]
pub struct RelativeMode<'a> {
    recorder: &'a mut SegmentRecorder,
}

impl Deref for RelativeMode<'_> {
    type Target = SegmentRecorder;

    fn deref(&self) -> &SegmentRecorder {
        self.recorder
    }
}

impl DerefMut for RelativeMode<'_> {
    fn deref_mut(&mut self) -> &mut SegmentRecorder {
        self.recorder
    }
}

impl Drop for RelativeMode<'_> {
    fn drop(&mut self) {
        self.recorder.segments.push(MotionSegment::SetAbsoluteMode);
        self.recorder.state.mode = CoordinateMode::Absolute;
    }
}
