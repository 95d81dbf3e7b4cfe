//! Detector output types.
//!
//! The external detector returns, per frame, a list of labeled boxes with
//! confidences and no identity persistence across frames. [`RawDetection`]
//! is that untyped output; [`Detection`] is the classified form the engine
//! reasons about.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::object_class::ObjectClass;

/// A single raw detection as emitted by the external detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawDetection {
    /// Detector class label (COCO vocabulary, e.g. "person", "car").
    pub label: String,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Bounding box in pixel coordinates.
    pub bbox: BoundingBox,
}

impl RawDetection {
    /// Create a new raw detection.
    pub fn new(label: impl Into<String>, confidence: f64, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }

    /// Classify this detection against the tracked class set.
    ///
    /// Returns `None` when the label is outside the tracked vocabulary;
    /// such detections are discarded by the per-frame filter.
    pub fn classify(&self) -> Option<Detection> {
        ObjectClass::from_label(&self.label).map(|class| Detection {
            class,
            confidence: self.confidence,
            bbox: self.bbox,
        })
    }
}

/// A classified detection. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Detection {
    /// Tracked object class.
    pub class: ObjectClass,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Bounding box in pixel coordinates.
    pub bbox: BoundingBox,
}

/// Raw detector output for one frame, with the frame's pixel dimensions
/// for region normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameDetections {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Detections in detector output order.
    pub detections: Vec<RawDetection>,
}

impl FrameDetections {
    /// Create a frame's detection list.
    pub fn new(width: u32, height: u32, detections: Vec<RawDetection>) -> Self {
        Self {
            width,
            height,
            detections,
        }
    }

    /// A frame with no detections (normal detector output, not an error).
    pub fn empty(width: u32, height: u32) -> Self {
        Self::new(width, height, Vec::new())
    }
}
