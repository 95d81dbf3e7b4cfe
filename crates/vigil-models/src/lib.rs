//! Shared data models for the Vigil alert engine.
//!
//! This crate provides Serde-serializable types for:
//! - Tracked object classes and detector label mapping
//! - Bounding boxes and overlap geometry
//! - Per-frame detector output
//! - Regions of interest (normalized polygons)
//! - Alert decisions

pub mod bbox;
pub mod decision;
pub mod detection;
pub mod object_class;
pub mod region;

// Re-export common types
pub use bbox::BoundingBox;
pub use decision::Decision;
pub use detection::{Detection, FrameDetections, RawDetection};
pub use object_class::{ObjectClass, ObjectClassParseError};
pub use region::Region;
