//! Shared event model, configuration, and source/sink traits.

pub mod config;
pub mod event;
pub mod traits;
