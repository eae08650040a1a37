use serde::{Deserialize, Serialize};

use crate::common::Axis;

/// Body of a request to move an axis by a relative distance.
///
/// `speed` is omitted from the wire body when not set, so the backend keeps
/// using the motor's default speed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveAxisRelMsg {
    pub axis: Axis,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl MoveAxisRelMsg {
    pub fn new(axis: Axis, distance: f64) -> Self {
        Self {
            axis,
            distance,
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}

/// Parameters of a multi-pass surface grinder cut, sent as-is on submission.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrinderCutParams {
    /// Z depth of each pass, in inches.
    pub depth_of_cut: f64,
    /// Y feed between passes, in inches.
    pub feed_per_pass: f64,
    /// Stroke speed in inches per second.
    pub stroke_speed: f64,
    pub total_depth: f64,
}
