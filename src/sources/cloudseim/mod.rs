//! CloudSEIM simulator source: app telemetry plus AWS service activity.

pub mod catalog;
pub mod generator;
pub mod templates;

pub use generator::{build_event, SimGenerator};
