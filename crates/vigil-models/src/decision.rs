//! Alert decisions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::object_class::ObjectClass;

/// The single output artifact of one evaluation.
///
/// Wire field names are camelCase to match the service's response model.
/// Reasons and classes are deduplicated and sorted so identical inputs
/// always serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Whether the observed activity is alertable.
    pub should_alert: bool,
    /// Human-readable reasons, deduplicated, in sorted order.
    pub reasons: Vec<String>,
    /// Confidence in [0, 100]: the maximum confidence observed among all
    /// detections considered, never an average. Only meaningful when an
    /// object was found.
    pub confidence: f64,
    /// Distinct object classes backing this decision, sorted.
    pub detected_classes: Vec<ObjectClass>,
}

impl Decision {
    /// An alerting decision.
    pub fn alert(reasons: Vec<String>, confidence: f64, detected_classes: Vec<ObjectClass>) -> Self {
        Self {
            should_alert: true,
            reasons,
            confidence,
            detected_classes,
        }
    }

    /// A non-alerting decision with a single explanatory reason.
    pub fn no_alert(reason: impl Into<String>, detected_classes: Vec<ObjectClass>) -> Self {
        Self {
            should_alert: false,
            reasons: vec![reason.into()],
            confidence: 0.0,
            detected_classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let decision = Decision::alert(
            vec!["car parked/stopped (95%)".to_string()],
            92.0,
            vec![ObjectClass::Car],
        );
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["shouldAlert"], true);
        assert_eq!(json["confidence"], 92.0);
        assert_eq!(json["detectedClasses"][0], "car");
        assert!(json["reasons"][0].as_str().unwrap().contains("parked"));
    }

    #[test]
    fn test_no_alert_defaults() {
        let decision = Decision::no_alert("No images provided", vec![]);
        assert!(!decision.should_alert);
        assert_eq!(decision.confidence, 0.0);
        assert!(decision.detected_classes.is_empty());
        assert_eq!(decision.reasons, vec!["No images provided".to_string()]);
    }
}
