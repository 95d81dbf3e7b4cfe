//! Multi-frame correlation and rule-evaluation engine.
//!
//! This crate decides whether a short burst of camera frames shows an
//! alertable event (a loitering person, a parked vehicle) from per-frame
//! object detections alone, without persistent object identifiers:
//! - Per-frame filtering to tracked classes and an optional region of
//!   interest
//! - Greedy IoU chaining of detections across a fixed frame window
//! - Class-specific stationarity rules over head-to-tail overlap
//! - Synthesis of a single decision with confidence and object summary
//!
//! The engine is pure and synchronous: no I/O, no state across requests.
//! The external detector and all transport concerns live outside this
//! crate; [`evaluate`] consumes detector output as plain data.

pub mod analyzer;
pub mod chain;
pub mod config;
pub mod error;
pub mod filter;
pub mod rules;

pub use analyzer::{evaluate, evaluate_checked};
pub use chain::{link_chains, Chain};
pub use config::AnalysisConfig;
pub use error::{EngineError, EngineResult};
pub use filter::filter_frame;
pub use rules::{evaluate_chain, AlertReason};
