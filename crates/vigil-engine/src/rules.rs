//! Class-specific stationarity rules.

use std::fmt;
use tracing::debug;
use vigil_models::ObjectClass;

use crate::chain::Chain;
use crate::config::AnalysisConfig;

/// Why a chain is worth reporting.
///
/// Rendered to the decision's reason strings via `Display`; kept as a typed
/// value so presentation layers can re-render without parsing text.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertReason {
    /// A person whose head-to-tail overlap exceeds the person threshold.
    StationaryPerson { overlap: f64, threshold: f64 },
    /// A moving person, reported only when suppression is disabled.
    MovingPerson { overlap: f64 },
    /// A vehicle whose head-to-tail overlap exceeds the vehicle threshold.
    StationaryVehicle { class: ObjectClass, overlap: f64 },
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertReason::StationaryPerson { overlap, threshold } => write!(
                f,
                "Stationary/loitering person ({}% > {}%)",
                (overlap * 100.0) as i64,
                (threshold * 100.0) as i64
            ),
            AlertReason::MovingPerson { overlap } => {
                write!(f, "Moving person (IoU: {overlap:.2})")
            }
            AlertReason::StationaryVehicle { class, overlap } => {
                write!(f, "{} parked/stopped ({}%)", class, (overlap * 100.0) as i64)
            }
        }
    }
}

/// Apply the stationarity rules to one completed chain.
///
/// Returns `None` for chains that are not reportable: moving vehicles
/// always, moving persons when `ignore_moving_persons` is set. Threshold
/// comparisons are strict (`>`), so an overlap exactly at the threshold
/// does not alert.
pub fn evaluate_chain(chain: &Chain, config: &AnalysisConfig) -> Option<AlertReason> {
    let overlap = chain.head_tail_overlap();
    let class = chain.class();

    if class.is_person() {
        if overlap > config.person_threshold {
            return Some(AlertReason::StationaryPerson {
                overlap,
                threshold: config.person_threshold,
            });
        }
        if !config.ignore_moving_persons {
            return Some(AlertReason::MovingPerson { overlap });
        }
        debug!(overlap, "ignored moving person");
        return None;
    }

    if overlap > config.vehicle_threshold {
        return Some(AlertReason::StationaryVehicle { class, overlap });
    }
    debug!(%class, overlap, "ignored moving vehicle");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::link_chains;
    use vigil_models::{BoundingBox, Detection};

    fn chain_with_overlap(class: ObjectClass, shift: f64) -> Chain {
        // 100x100 boxes; the tail is shifted right by `shift` pixels while
        // intermediate steps stay linkable.
        let b0 = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b1 = BoundingBox::new(shift / 2.0, 0.0, shift / 2.0 + 100.0, 100.0);
        let b2 = BoundingBox::new(shift, 0.0, shift + 100.0, 100.0);
        let frames: Vec<Vec<Detection>> = [b0, b1, b2]
            .iter()
            .map(|bbox| {
                vec![Detection {
                    class,
                    confidence: 0.9,
                    bbox: *bbox,
                }]
            })
            .collect();
        let mut chains = link_chains(&frames, 3, 0.1);
        assert_eq!(chains.len(), 1);
        chains.remove(0)
    }

    #[test]
    fn test_stationary_person_alerts() {
        let chain = chain_with_overlap(ObjectClass::Person, 0.0);
        let reason = evaluate_chain(&chain, &AnalysisConfig::default()).unwrap();
        assert_eq!(
            reason.to_string(),
            "Stationary/loitering person (100% > 60%)"
        );
    }

    #[test]
    fn test_moving_person_suppressed_by_default() {
        // Shift 60px: head-tail IoU = 4000/16000 = 0.25 < 0.6.
        let chain = chain_with_overlap(ObjectClass::Person, 60.0);
        assert!(evaluate_chain(&chain, &AnalysisConfig::default()).is_none());
    }

    #[test]
    fn test_moving_person_reported_when_not_ignored() {
        let chain = chain_with_overlap(ObjectClass::Person, 60.0);
        let config = AnalysisConfig {
            ignore_moving_persons: false,
            ..Default::default()
        };
        let reason = evaluate_chain(&chain, &config).unwrap();
        assert_eq!(reason.to_string(), "Moving person (IoU: 0.25)");
    }

    #[test]
    fn test_parked_vehicle_alerts() {
        let chain = chain_with_overlap(ObjectClass::Car, 0.0);
        let reason = evaluate_chain(&chain, &AnalysisConfig::default()).unwrap();
        assert_eq!(reason.to_string(), "car parked/stopped (100%)");
    }

    #[test]
    fn test_moving_vehicle_never_reported() {
        let chain = chain_with_overlap(ObjectClass::Truck, 60.0);
        let config = AnalysisConfig {
            ignore_moving_persons: false,
            ..Default::default()
        };
        assert!(evaluate_chain(&chain, &config).is_none());
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        let chain = chain_with_overlap(ObjectClass::Bus, 0.0);
        // head_tail_overlap is exactly 1.0; a threshold of 1.0 must not
        // alert under strict comparison.
        let config = AnalysisConfig {
            vehicle_threshold: 1.0,
            ..Default::default()
        };
        assert!(evaluate_chain(&chain, &config).is_none());
    }

    #[test]
    fn test_percentage_truncation() {
        // Shift 40px: IoU = 6000/14000 = 0.4285..., rendered as 42%, not 43%.
        let chain = chain_with_overlap(ObjectClass::Person, 40.0);
        let config = AnalysisConfig {
            person_threshold: 0.3,
            ..Default::default()
        };
        let reason = evaluate_chain(&chain, &config).unwrap();
        assert_eq!(reason.to_string(), "Stationary/loitering person (42% > 30%)");
    }
}
