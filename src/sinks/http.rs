//! HTTP sink for the ingestion service.
//!
//! POSTs each event as JSON to `{api_base}/logs` and reads the alert count
//! from the response.

use crate::core::event::Event;
use crate::core::traits::{Delivery, DeliveryError, EventSink};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Per-request timeout, covering connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 256;

/// Blocking client bound to one ingestion endpoint.
pub struct HttpSink {
    client: Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(api_base: &str) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DeliveryError::Request)?;
        Ok(Self {
            client,
            endpoint: logs_endpoint(api_base),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EventSink for HttpSink {
    fn deliver(&mut self, event: &Event) -> Result<Delivery, DeliveryError> {
        let response = self.client.post(&self.endpoint).json(event).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeliveryError::Status {
                code: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let body: IngestResponse = response.json()?;
        tracing::debug!(
            event_type = %event.kind(),
            log_id = body.log_id.as_deref().unwrap_or("none"),
            "ingested"
        );
        for alert in body.alerts.iter().flatten() {
            tracing::debug!(
                event_type = %event.kind(),
                alert_type = alert.kind.as_deref().unwrap_or("unknown"),
                severity = alert.severity.as_deref().unwrap_or("unknown"),
                description = alert.description.as_deref().unwrap_or(""),
                "alert raised"
            );
        }

        Ok(Delivery {
            alerts_created: body.alerts_created.unwrap_or(0),
        })
    }
}

/// Ingestion response. Only `alertsCreated` feeds the counters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    #[serde(default)]
    pub alerts_created: Option<u64>,
    #[serde(default)]
    pub log_id: Option<String>,
    #[serde(default)]
    pub alerts: Option<Vec<AlertSummary>>,
}

#[derive(Debug, Deserialize)]
pub struct AlertSummary {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub fn logs_endpoint(api_base: &str) -> String {
    format!("{}/logs", api_base.trim_end_matches('/'))
}

fn truncate_body(body: String) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slashes() {
        assert_eq!(logs_endpoint("http://api.local"), "http://api.local/logs");
        assert_eq!(logs_endpoint("http://api.local/"), "http://api.local/logs");
        assert_eq!(logs_endpoint("http://api.local/prod//"), "http://api.local/prod/logs");
    }

    #[test]
    fn response_fields_are_optional() {
        let empty: IngestResponse = serde_json::from_str("{}").expect("parse");
        assert_eq!(empty.alerts_created, None);

        let nulled: IngestResponse =
            serde_json::from_str(r#"{"alertsCreated": null, "alerts": null}"#).expect("parse");
        assert_eq!(nulled.alerts_created, None);

        let full: IngestResponse = serde_json::from_str(
            r#"{"ok": true, "logId": "abc", "alertsCreated": 2,
                "alerts": [{"type": "MOUSE_ANOMALY", "severity": "medium", "alertId": "x"}]}"#,
        )
        .expect("parse");
        assert_eq!(full.alerts_created, Some(2));
        assert_eq!(full.log_id.as_deref(), Some("abc"));
        let alerts = full.alerts.expect("alerts");
        assert_eq!(alerts[0].kind.as_deref(), Some("MOUSE_ANOMALY"));
    }

    #[test]
    fn long_error_bodies_are_cut() {
        let body = "x".repeat(1000);
        let cut = truncate_body(body);
        assert_eq!(cut.len(), MAX_ERROR_BODY + 3);
        assert_eq!(truncate_body("  oops \n".to_string()), "oops");
    }
}
