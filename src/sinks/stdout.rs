//! JSON-lines sink used for dry runs.

use crate::core::event::Event;
use crate::core::traits::{Delivery, DeliveryError, EventSink};
use std::io::{self, Write};

/// Writes one JSON object per line. Never raises alerts.
pub struct StdoutSink<W: Write = io::Stdout> {
    writer: W,
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EventSink for StdoutSink<W> {
    fn deliver(&mut self, event: &Event) -> Result<Delivery, DeliveryError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(Delivery::default())
    }
}
