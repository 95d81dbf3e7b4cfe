//! Tracked object classes.
//!
//! The engine only reasons about a fixed subset of the detector's COCO
//! vocabulary: persons and road vehicles. Every other detector class is
//! discarded before analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Object class tracked by the alert engine.
///
/// Detections whose label maps to none of these classes are dropped by the
/// per-frame filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    Person,
    Car,
    Motorcycle,
    Truck,
    Bus,
}

impl ObjectClass {
    /// All tracked classes.
    pub const ALL: &'static [ObjectClass] = &[
        ObjectClass::Person,
        ObjectClass::Car,
        ObjectClass::Motorcycle,
        ObjectClass::Truck,
        ObjectClass::Bus,
    ];

    /// Returns the class name as the detector emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectClass::Person => "person",
            ObjectClass::Car => "car",
            ObjectClass::Motorcycle => "motorcycle",
            ObjectClass::Truck => "truck",
            ObjectClass::Bus => "bus",
        }
    }

    /// Map a detector label to a tracked class.
    ///
    /// Returns `None` for labels outside the tracked set; those detections
    /// are to be discarded, not reported as errors.
    pub fn from_label(label: &str) -> Option<ObjectClass> {
        match label.to_lowercase().as_str() {
            "person" => Some(ObjectClass::Person),
            "car" => Some(ObjectClass::Car),
            "motorcycle" => Some(ObjectClass::Motorcycle),
            "truck" => Some(ObjectClass::Truck),
            "bus" => Some(ObjectClass::Bus),
            _ => None,
        }
    }

    /// Map a COCO class id to a tracked class (0 = person, 2 = car,
    /// 3 = motorcycle, 5 = bus, 7 = truck).
    pub fn from_coco_id(id: usize) -> Option<ObjectClass> {
        match id {
            0 => Some(ObjectClass::Person),
            2 => Some(ObjectClass::Car),
            3 => Some(ObjectClass::Motorcycle),
            5 => Some(ObjectClass::Bus),
            7 => Some(ObjectClass::Truck),
            _ => None,
        }
    }

    /// Returns true for the person class.
    pub fn is_person(&self) -> bool {
        matches!(self, ObjectClass::Person)
    }

    /// Returns true for any vehicle class.
    pub fn is_vehicle(&self) -> bool {
        !self.is_person()
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectClass {
    type Err = ObjectClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectClass::from_label(s).ok_or_else(|| ObjectClassParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown object class: {0}")]
pub struct ObjectClassParseError(String);
