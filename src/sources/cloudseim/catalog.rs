use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Every kind of event the simulator can fabricate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Auth,
    Mouse,
    Api,
    Lambda,
    DynamoDb,
    Sns,
    CloudWatch,
    S3,
    Ec2,
}

impl EventKind {
    /// Wire value of the `eventType` field.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Auth => "auth",
            EventKind::Mouse => "mouse",
            EventKind::Api => "api",
            EventKind::Lambda => "lambda",
            EventKind::DynamoDb => "dynamodb",
            EventKind::Sns => "sns",
            EventKind::CloudWatch => "cloudwatch",
            EventKind::S3 => "s3",
            EventKind::Ec2 => "ec2",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kinds take part in selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EventSet {
    /// Application telemetry only: auth, mouse, api.
    #[default]
    Minimal,
    /// Application telemetry plus AWS service activity.
    Extended,
}

impl EventSet {
    pub fn weights(self) -> &'static [(EventKind, u32)] {
        match self {
            EventSet::Minimal => MINIMAL_WEIGHTS,
            EventSet::Extended => EXTENDED_WEIGHTS,
        }
    }

    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        self.weights().iter().map(|(kind, _)| *kind)
    }
}

const MINIMAL_WEIGHTS: &[(EventKind, u32)] = &[
    (EventKind::Auth, 4),
    (EventKind::Mouse, 2),
    (EventKind::Api, 4),
];

const EXTENDED_WEIGHTS: &[(EventKind, u32)] = &[
    (EventKind::Auth, 4),
    (EventKind::Mouse, 2),
    (EventKind::Api, 4),
    (EventKind::Lambda, 2),
    (EventKind::DynamoDb, 2),
    (EventKind::Sns, 2),
    (EventKind::CloudWatch, 2),
    (EventKind::S3, 2),
    (EventKind::Ec2, 1),
];

pub const USERS: &[&str] = &["alice", "bob", "charlie", "dana"];
pub const API_KEYS: &[&str] = &["key-a", "key-b", "key-c"];
pub const API_ENDPOINTS: &[&str] = &["/v1/login", "/v1/orders", "/v1/profile"];
pub const FUNCTION_NAMES: &[&str] = &["AuthFn", "OrderFn", "ProfileFn"];
pub const TABLE_NAMES: &[&str] = &["Users", "Orders", "Profiles"];
pub const SNS_TOPICS: &[&str] = &["Alerts", "Orders", "Notifications"];
pub const METRIC_NAMES: &[&str] = &["CPUUtilization", "Errors", "Latency"];
pub const BUCKETS: &[&str] = &["frontend-assets", "logs", "backups"];

#[derive(Debug)]
pub enum CatalogError {
    EmptyEventSet,
    WeightedIndex(rand::distributions::WeightedError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyEventSet => write!(f, "no event kinds available"),
            CatalogError::WeightedIndex(err) => write!(f, "invalid event weights: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Weighted pick over the kinds of one event set.
#[derive(Debug, Clone)]
pub struct KindSelector {
    kinds: Vec<EventKind>,
    index: WeightedIndex<u32>,
}

impl KindSelector {
    pub fn new(set: EventSet) -> Result<Self, CatalogError> {
        let table = set.weights();
        if table.is_empty() {
            return Err(CatalogError::EmptyEventSet);
        }

        let kinds = table.iter().map(|(kind, _)| *kind).collect();
        let index = WeightedIndex::new(table.iter().map(|(_, weight)| *weight))
            .map_err(CatalogError::WeightedIndex)?;

        Ok(Self { kinds, index })
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> EventKind {
        self.kinds[self.index.sample(rng)]
    }
}
