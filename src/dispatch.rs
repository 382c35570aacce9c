//! Counted send loop.
//!
//! One event is built, delivered and awaited before the next. Failed
//! deliveries are logged and skipped; they never stop the loop.

use crate::core::config::SourceConfig;
use crate::core::traits::{EventSink, EventSource};
use crate::sinks::HttpSink;
use crate::sources::cloudseim::SimGenerator;
use std::time::Duration;

/// How many events to send and how long to pause between them.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOptions {
    /// Negative values mean no attempts.
    pub total_events: i64,
    /// Negative values mean no pause.
    pub delay_ms: i64,
}

impl DispatchOptions {
    pub fn attempts(&self) -> u64 {
        self.total_events.max(0) as u64
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.max(0) as u64)
    }
}

/// Totals for one run. `sent + failed == attempted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub attempted: u64,
    pub sent: u64,
    pub alerts: u64,
    pub failed: u64,
}

impl std::fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "done: sent={}, alerts={}, failed={}",
            self.sent, self.alerts, self.failed
        )
    }
}

pub fn run_dispatch(
    source: &mut dyn EventSource,
    sink: &mut dyn EventSink,
    options: &DispatchOptions,
) -> DispatchSummary {
    let delay = options.delay();
    let mut summary = DispatchSummary::default();

    for attempt in 1..=options.attempts() {
        let Some(event) = source.next_event() else {
            tracing::warn!(attempt, "event source exhausted");
            break;
        };
        summary.attempted += 1;

        match sink.deliver(&event) {
            Ok(delivery) => {
                summary.sent += 1;
                summary.alerts = summary.alerts.saturating_add(delivery.alerts_created);
                tracing::debug!(
                    attempt,
                    event_type = %event.kind(),
                    action = event.action(),
                    alerts_created = delivery.alerts_created,
                    "event accepted"
                );
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(attempt, event_type = %event.kind(), "request failed: {err}");
            }
        }

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    summary
}

/// Sends `total_events` events from the default event set to `{api_base}/logs`.
pub fn send_events(
    api_base: &str,
    total_events: i64,
    delay_ms: i64,
) -> Result<DispatchSummary, Box<dyn std::error::Error>> {
    let mut generator = SimGenerator::from_config(&SourceConfig::default(), None)?;
    let mut sink = HttpSink::new(api_base)?;
    Ok(run_dispatch(
        &mut generator,
        &mut sink,
        &DispatchOptions {
            total_events,
            delay_ms,
        },
    ))
}
