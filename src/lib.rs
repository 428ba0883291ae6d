//! Loan-application risk scoring: derived metrics, heuristic flagging, and
//! model-backed default predictions behind a small HTTP surface.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
