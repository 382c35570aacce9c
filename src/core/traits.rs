use crate::core::event::Event;

/// Produces events one at a time for the dispatch loop.
pub trait EventSource {
    /// Returns the next event, or `None` if no event is available.
    fn next_event(&mut self) -> Option<Event>;
}

/// Delivers events to an ingestion target (HTTP endpoint, stdout, etc.).
pub trait EventSink {
    /// Delivers a single event and reports what the target made of it.
    fn deliver(&mut self, event: &Event) -> Result<Delivery, DeliveryError>;
}

/// Accepted delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Alerts the target raised for this event.
    pub alerts_created: u64,
}

/// Error while delivering one event.
#[derive(Debug)]
pub enum DeliveryError {
    Request(reqwest::Error),
    Status { code: u16, body: String },
    Decode(reqwest::Error),
    Encode(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Request(err) => write!(f, "request error: {err}"),
            DeliveryError::Status { code, body } if body.is_empty() => {
                write!(f, "unexpected status {code}")
            }
            DeliveryError::Status { code, body } => write!(f, "unexpected status {code}: {body}"),
            DeliveryError::Decode(err) => write!(f, "invalid response body: {err}"),
            DeliveryError::Encode(err) => write!(f, "event encode error: {err}"),
            DeliveryError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for DeliveryError {}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DeliveryError::Decode(err)
        } else {
            DeliveryError::Request(err)
        }
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(err: serde_json::Error) -> Self {
        DeliveryError::Encode(err)
    }
}

impl From<std::io::Error> for DeliveryError {
    fn from(err: std::io::Error) -> Self {
        DeliveryError::Io(err)
    }
}
