//! Configuration for burst analysis.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tunable parameters for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // === Stationarity Rules ===
    /// Head-to-tail overlap above which a person counts as stationary
    /// (default: 0.6)
    pub person_threshold: f64,

    /// Head-to-tail overlap above which a vehicle counts as parked/stopped
    /// (default: 0.9)
    pub vehicle_threshold: f64,

    /// Suppress reasons for persons that are moving (default: true)
    pub ignore_moving_persons: bool,

    // === Chaining ===
    /// Number of frames linked into one chain; frames beyond the window
    /// are ignored (default: 3)
    pub chain_window: usize,

    /// Minimum IoU for linking a detection to the next frame's candidate
    /// (default: 0.1, loose match)
    pub match_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            person_threshold: 0.6,
            vehicle_threshold: 0.9,
            ignore_moving_persons: true,
            chain_window: 3,
            match_threshold: 0.1,
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration for values the engine cannot evaluate.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("person_threshold", self.person_threshold),
            ("vehicle_threshold", self.vehicle_threshold),
            ("match_threshold", self.match_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::invalid_config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        // A chain needs a distinct head and tail frame.
        if self.chain_window < 2 {
            return Err(EngineError::invalid_config(format!(
                "chain_window must be at least 2, got {}",
                self.chain_window
            )));
        }
        Ok(())
    }
}
