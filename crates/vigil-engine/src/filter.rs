//! Per-frame detection filtering.

use vigil_models::{Detection, FrameDetections, Region};

/// Filter one frame's raw detections down to the set the engine analyzes.
///
/// A detection survives iff its label maps to a tracked class AND, when a
/// region is configured, its box centroid (normalized by the frame
/// dimensions) falls inside the region. Order-preserving; pure function of
/// its inputs.
pub fn filter_frame(frame: &FrameDetections, region: Option<&Region>) -> Vec<Detection> {
    frame
        .detections
        .iter()
        .filter_map(|raw| raw.classify())
        .filter(|det| match region {
            Some(region) => {
                // Degenerate frame dimensions cannot place a centroid.
                if frame.width == 0 || frame.height == 0 {
                    return false;
                }
                let (cx, cy) = det.bbox.centroid();
                region.contains(cx / frame.width as f64, cy / frame.height as f64)
            }
            None => true,
        })
        .collect()
}
