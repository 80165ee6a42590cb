//! Motion segment types.

use gcodeplot_core::Point;
use serde::{Deserialize, Serialize};

use super::{CUT_Z, TRAVEL_Z};

/// A single machine motion or modal change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionSegment {
    /// Non-cutting XY move, Z unchanged (`G0 X Y`)
    RapidXY { x: f64, y: f64 },
    /// Vertical-only rapid move (`G0 Z`)
    RapidZ { z: f64 },
    /// Linear cutting move (`G1 F X Y`)
    FeedXY { x: f64, y: f64, feed_rate: f64 },
    /// Clockwise arc with a signed Y offset to the center (`G2 F X Y J`)
    ArcFeedXY {
        x: f64,
        y: f64,
        feed_rate: f64,
        j: f64,
    },
    /// `G91`
    SetRelativeMode,
    /// `G90`
    SetAbsoluteMode,
}

impl MotionSegment {
    pub fn rapid(p: Point) -> Self {
        Self::RapidXY { x: p.x, y: p.y }
    }

    pub fn feed(p: Point, feed_rate: f64) -> Self {
        Self::FeedXY {
            x: p.x,
            y: p.y,
            feed_rate,
        }
    }

    pub fn arc_feed(p: Point, feed_rate: f64, j: f64) -> Self {
        Self::ArcFeedXY {
            x: p.x,
            y: p.y,
            feed_rate,
            j,
        }
    }

    /// Lowers the tool to cutting height.
    pub fn is_plunge(&self) -> bool {
        matches!(self, Self::RapidZ { z } if *z == CUT_Z)
    }

    /// Lifts the tool to travel height.
    pub fn is_retract(&self) -> bool {
        matches!(self, Self::RapidZ { z } if *z == TRAVEL_Z)
    }

    /// Feed and arc moves; rapids never count as cutting.
    pub fn is_feed(&self) -> bool {
        matches!(self, Self::FeedXY { .. } | Self::ArcFeedXY { .. })
    }

    /// XY target of the move, if it has one.
    pub fn target(&self) -> Option<Point> {
        match *self {
            Self::RapidXY { x, y } | Self::FeedXY { x, y, .. } | Self::ArcFeedXY { x, y, .. } => {
                Some(Point::new(x, y))
            }
            Self::RapidZ { .. } | Self::SetRelativeMode | Self::SetAbsoluteMode => None,
        }
    }
}
