//! Greedy cross-frame detection chaining.
//!
//! Links detections across an ordered frame window by box overlap, without
//! persistent identities: a detection in the first frame is greedily
//! matched to the first same-class, sufficiently-overlapping candidate in
//! the next frame, and so on through the window.

use tracing::debug;
use vigil_models::{Detection, ObjectClass};

/// Same-class detections linked across consecutive frames of the window.
///
/// Exists only transiently during evaluation. A chain produced by
/// [`link_chains`] always spans the full window.
#[derive(Debug, Clone)]
pub struct Chain {
    detections: Vec<Detection>,
}

impl Chain {
    /// The class shared by every link.
    pub fn class(&self) -> ObjectClass {
        self.head().class
    }

    /// First-frame anchor detection.
    pub fn head(&self) -> &Detection {
        &self.detections[0]
    }

    /// Last-frame detection.
    pub fn tail(&self) -> &Detection {
        &self.detections[self.detections.len() - 1]
    }

    /// The linked detections, one per window frame.
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// IoU between the first and last boxes of the chain, skipping
    /// intermediate frames: the net-displacement stability signal.
    pub fn head_tail_overlap(&self) -> f64 {
        self.head().bbox.iou(&self.tail().bbox)
    }
}

/// Chain detections across the first `window` frames.
///
/// For every detection in frame 0, in original order, walk the following
/// frames taking the first same-class candidate whose IoU with the current
/// link exceeds `match_threshold` (strict). An anchor whose walk breaks
/// produces no chain; only full-window chains are returned. Matched
/// candidates are not consumed, so one detection may serve several anchors
/// (accepted approximation of identity-free matching). Worst case is the
/// product of frame sizes with first-match early exit; per-frame counts
/// are small in practice.
///
/// Frames beyond `window` are ignored. Returns no chains when fewer than
/// `window` frames are supplied.
pub fn link_chains(frames: &[Vec<Detection>], window: usize, match_threshold: f64) -> Vec<Chain> {
    if frames.len() < window || window == 0 {
        return Vec::new();
    }
    let frames = &frames[..window];

    let mut chains = Vec::new();
    for anchor in &frames[0] {
        let mut links = vec![*anchor];
        for next_frame in &frames[1..] {
            let current = links[links.len() - 1];
            let matched = next_frame.iter().find(|candidate| {
                candidate.class == current.class
                    && current.bbox.iou(&candidate.bbox) > match_threshold
            });
            match matched {
                Some(next) => links.push(*next),
                None => break,
            }
        }

        if links.len() == window {
            chains.push(Chain { detections: links });
        } else {
            debug!(
                class = %anchor.class,
                linked = links.len(),
                window,
                "chain broken before window end"
            );
        }
    }
    chains
}
