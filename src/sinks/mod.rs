//! Delivery targets for generated events.

pub mod http;
pub mod stdout;

pub use http::HttpSink;
pub use stdout::StdoutSink;
