//! Burst evaluation and decision synthesis.
//!
//! Ties the stages together: per-frame filtering, cross-frame chaining,
//! rule evaluation, and the fallback paths for degenerate input shapes
//! (no frames, too few frames, nothing detected).

use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use vigil_models::{Decision, Detection, FrameDetections, ObjectClass, Region};

use crate::chain::link_chains;
use crate::config::AnalysisConfig;
use crate::error::EngineResult;
use crate::filter::filter_frame;
use crate::rules::evaluate_chain;

/// Running maxima over every detection considered in one evaluation.
///
/// One accumulator value per evaluation, threaded through and merged
/// explicitly; the engine keeps no state across requests.
#[derive(Debug, Default)]
struct Accumulator {
    max_confidence: f64,
    classes: BTreeSet<ObjectClass>,
}

impl Accumulator {
    fn observe(&mut self, detection: &Detection) {
        self.max_confidence = self.max_confidence.max(detection.confidence);
        self.classes.insert(detection.class);
    }

    fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn has_person(&self) -> bool {
        self.classes.contains(&ObjectClass::Person)
    }

    fn sorted_classes(&self) -> Vec<ObjectClass> {
        self.classes.iter().copied().collect()
    }
}

/// Evaluate a burst of frames and always produce a decision.
///
/// This is the availability boundary: internal faults (for example an
/// invalid configuration) are converted into a non-alerting decision
/// carrying a diagnostic reason, never surfaced as an error. Identical
/// inputs always yield identical decisions.
pub fn evaluate(
    frames: &[FrameDetections],
    region: Option<&Region>,
    config: &AnalysisConfig,
) -> Decision {
    match evaluate_checked(frames, region, config) {
        Ok(decision) => decision,
        Err(error) => {
            warn!(%error, "evaluation failed, returning diagnostic decision");
            Decision::no_alert(format!("Evaluation error: {error}"), Vec::new())
        }
    }
}

/// Fallible evaluation path behind [`evaluate`].
pub fn evaluate_checked(
    frames: &[FrameDetections],
    region: Option<&Region>,
    config: &AnalysisConfig,
) -> EngineResult<Decision> {
    config.validate()?;

    if frames.is_empty() {
        return Ok(Decision::no_alert("No images provided", Vec::new()));
    }

    debug!(frames = frames.len(), "analyzing frame burst");
    if let Some(region) = region {
        debug!(
            vertices = region.points().len(),
            "region of interest configured"
        );
    }

    let filtered: Vec<Vec<Detection>> = frames
        .iter()
        .map(|frame| filter_frame(frame, region))
        .collect();

    // Behavior analysis needs a full chain window; with fewer frames the
    // engine can only report presence in the most recent frame.
    if frames.len() < config.chain_window {
        return Ok(presence_fallback(
            filtered.last().map(Vec::as_slice).unwrap_or(&[]),
        ));
    }

    let mut acc = Accumulator::default();
    for detection in filtered.iter().flatten() {
        acc.observe(detection);
    }
    if acc.is_empty() {
        return Ok(Decision::no_alert("No objects detected in region", Vec::new()));
    }

    let chains = link_chains(&filtered, config.chain_window, config.match_threshold);
    debug!(chains = chains.len(), "completed detection chains");

    let reasons: BTreeSet<String> = chains
        .iter()
        .filter_map(|chain| evaluate_chain(chain, config))
        .map(|reason| reason.to_string())
        .collect();

    if reasons.is_empty() {
        // Objects present but no rule fired. A person whose chain broke
        // (lost matching) still warrants an alert; vehicles in motion do
        // not.
        if acc.has_person() {
            return Ok(Decision::alert(
                vec!["Person detected (unclear motion)".to_string()],
                acc.max_confidence * 100.0,
                acc.sorted_classes(),
            ));
        }
        return Ok(Decision::no_alert(
            "Vehicles moving (ignored)",
            acc.sorted_classes(),
        ));
    }

    let anchor_classes: BTreeSet<ObjectClass> =
        filtered[0].iter().map(|detection| detection.class).collect();

    let decision = Decision::alert(
        reasons.into_iter().collect(),
        acc.max_confidence * 100.0,
        anchor_classes.into_iter().collect(),
    );
    info!(
        reasons = decision.reasons.len(),
        confidence = decision.confidence,
        "alert raised"
    );
    Ok(decision)
}

/// Presence-only fallback for bursts shorter than the chain window.
fn presence_fallback(last_frame: &[Detection]) -> Decision {
    let Some(first) = last_frame.first() else {
        return Decision::no_alert("No objects detected", Vec::new());
    };

    let mut acc = Accumulator::default();
    for detection in last_frame {
        acc.observe(detection);
    }
    let classes = acc.sorted_classes();
    let summary = classes
        .iter()
        .map(ObjectClass::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Decision::alert(
        vec![format!(
            "Detected: {summary} (insufficient frames for behavior analysis)"
        )],
        first.confidence * 100.0,
        classes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_models::{BoundingBox, RawDetection};

    fn frame(detections: Vec<RawDetection>) -> FrameDetections {
        FrameDetections::new(640, 480, detections)
    }

    fn person(confidence: f64, x1: f64) -> RawDetection {
        RawDetection::new(
            "person",
            confidence,
            BoundingBox::new(x1, 10.0, x1 + 40.0, 90.0),
        )
    }

    #[test]
    fn test_fallback_uses_first_detection_confidence() {
        let frames = vec![frame(vec![
            person(0.7, 10.0),
            RawDetection::new("car", 0.95, BoundingBox::new(100.0, 100.0, 200.0, 200.0)),
        ])];
        let decision = evaluate(&frames, None, &AnalysisConfig::default());
        assert!(decision.should_alert);
        // First detection of the last frame, not the maximum.
        assert!((decision.confidence - 70.0).abs() < 1e-9);
        assert_eq!(
            decision.detected_classes,
            vec![ObjectClass::Person, ObjectClass::Car]
        );
        assert_eq!(
            decision.reasons,
            vec!["Detected: person, car (insufficient frames for behavior analysis)".to_string()]
        );
    }

    #[test]
    fn test_fallback_reads_last_frame() {
        // Two frames; only the first has a detection. The fallback looks at
        // the last frame and finds nothing.
        let frames = vec![frame(vec![person(0.9, 10.0)]), frame(vec![])];
        let decision = evaluate(&frames, None, &AnalysisConfig::default());
        assert!(!decision.should_alert);
        assert_eq!(decision.reasons, vec!["No objects detected".to_string()]);
        assert_eq!(decision.confidence, 0.0);
    }

    #[test]
    fn test_global_max_confidence_on_alert() {
        let frames = vec![
            frame(vec![person(0.7, 10.0)]),
            frame(vec![person(0.95, 10.0)]),
            frame(vec![person(0.8, 10.0)]),
        ];
        let decision = evaluate(&frames, None, &AnalysisConfig::default());
        assert!(decision.should_alert);
        assert!((decision.confidence - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_reasons_deduplicated() {
        // Two identical stationary persons produce one reason string.
        let frames: Vec<FrameDetections> = (0..3)
            .map(|_| frame(vec![person(0.9, 10.0), person(0.9, 400.0)]))
            .collect();
        let decision = evaluate(&frames, None, &AnalysisConfig::default());
        assert!(decision.should_alert);
        assert_eq!(decision.reasons.len(), 1);
    }

    #[test]
    fn test_anchor_classes_on_alert() {
        // Stationary person plus a car that only ever appears in later
        // frames: the car is not a frame-0 anchor, so it is absent from the
        // reported classes, but its confidence still feeds the global max.
        let car = RawDetection::new("car", 0.99, BoundingBox::new(300.0, 300.0, 400.0, 400.0));
        let frames = vec![
            frame(vec![person(0.9, 10.0)]),
            frame(vec![person(0.9, 10.0), car.clone()]),
            frame(vec![person(0.9, 10.0), car]),
        ];
        let decision = evaluate(&frames, None, &AnalysisConfig::default());
        assert!(decision.should_alert);
        assert_eq!(decision.detected_classes, vec![ObjectClass::Person]);
        assert!((decision.confidence - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_yields_diagnostic_decision() {
        let config = AnalysisConfig {
            person_threshold: 2.0,
            ..Default::default()
        };
        let frames = vec![frame(vec![person(0.9, 10.0)])];

        assert!(evaluate_checked(&frames, None, &config).is_err());

        let decision = evaluate(&frames, None, &config);
        assert!(!decision.should_alert);
        assert_eq!(decision.confidence, 0.0);
        assert!(decision.reasons[0].starts_with("Evaluation error:"));
    }
}
