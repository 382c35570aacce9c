//! Eventsim library crate.
//!
//! Exposes the event model, the synthetic event source, delivery sinks, and
//! the dispatch loop used by the CLI.

pub mod core;
pub mod dispatch;
pub mod sinks;
pub mod sources;

pub use self::core::config;
pub use self::core::event;
pub use self::core::traits;
