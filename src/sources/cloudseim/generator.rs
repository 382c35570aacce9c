use super::catalog::{CatalogError, EventKind, KindSelector};
use super::templates::{
    build_api_event, build_auth_event, build_cloudwatch_event, build_dynamodb_event,
    build_ec2_event, build_lambda_event, build_mouse_event, build_s3_event, build_sns_event,
};
use crate::core::config::SourceConfig;
use crate::core::event::Event;
use crate::core::traits::EventSource;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds one event of a kind drawn from `selector`, stamped with `now`.
pub fn build_event(rng: &mut impl Rng, selector: &KindSelector, now: DateTime<Utc>) -> Event {
    let kind = selector.choose(rng);
    build_event_of_kind(rng, kind, now)
}

pub fn build_event_of_kind(rng: &mut impl Rng, kind: EventKind, now: DateTime<Utc>) -> Event {
    let timestamp = format_timestamp(now);
    match kind {
        EventKind::Auth => build_auth_event(rng, &timestamp),
        EventKind::Mouse => build_mouse_event(rng, &timestamp),
        EventKind::Api => build_api_event(rng, &timestamp),
        EventKind::Lambda => build_lambda_event(rng, &timestamp),
        EventKind::DynamoDb => build_dynamodb_event(rng, &timestamp),
        EventKind::Sns => build_sns_event(rng, &timestamp),
        EventKind::CloudWatch => build_cloudwatch_event(rng, &timestamp),
        EventKind::S3 => build_s3_event(rng, &timestamp),
        EventKind::Ec2 => build_ec2_event(rng, &timestamp),
    }
}

/// ISO-8601 with microseconds and an explicit `+00:00` offset.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Unbounded source of synthetic events stamped with the wall clock.
pub struct SimGenerator {
    rng: StdRng,
    selector: KindSelector,
}

impl SimGenerator {
    pub fn from_config(config: &SourceConfig, seed: Option<u64>) -> Result<Self, CatalogError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selector = KindSelector::new(config.event_set)?;
        Ok(Self { rng, selector })
    }

    /// Builds the next event as if the clock read `now`.
    pub fn event_at(&mut self, now: DateTime<Utc>) -> Event {
        build_event(&mut self.rng, &self.selector, now)
    }
}

impl EventSource for SimGenerator {
    fn next_event(&mut self) -> Option<Event> {
        Some(self.event_at(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::cloudseim::catalog::EventSet;
    use chrono::TimeZone;
    use serde_json::Value;

    fn extended() -> SourceConfig {
        SourceConfig {
            event_set: EventSet::Extended,
        }
    }

    fn require_str(value: &Value, field: &str) {
        assert!(
            value.get(field).and_then(Value::as_str).is_some_and(|s| !s.is_empty()),
            "missing {field} in {value}"
        );
    }

    #[test]
    fn every_kind_carries_its_fields() {
        let mut generator = SimGenerator::from_config(&extended(), Some(99)).expect("generator");
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        for _ in 0..2_000 {
            let event = generator.event_at(now);
            let value = serde_json::to_value(&event).expect("serialize");
            assert_eq!(value["eventType"], event.kind().as_str());
            assert_eq!(value["action"], event.action());
            require_str(&value, "ipAddress");
            require_str(&value, "timestamp");
            match event.kind() {
                EventKind::Auth => {
                    require_str(&value, "userId");
                    assert!(value["success"].is_boolean());
                }
                EventKind::Mouse => {
                    assert!(value["expectedPathDistance"].as_f64().unwrap() > 0.0);
                    assert!(value["mousePathDistance"].as_f64().unwrap() > 0.0);
                }
                EventKind::Api => {
                    require_str(&value, "apiKeyId");
                    require_str(&value, "endpoint");
                }
                EventKind::Lambda => require_str(&value, "functionName"),
                EventKind::DynamoDb => require_str(&value, "tableName"),
                EventKind::Sns => require_str(&value, "topic"),
                EventKind::CloudWatch => require_str(&value, "metricName"),
                EventKind::S3 => require_str(&value, "bucket"),
                EventKind::Ec2 => require_str(&value, "instanceId"),
            }
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut left = SimGenerator::from_config(&extended(), Some(1234)).expect("generator");
        let mut right = SimGenerator::from_config(&extended(), Some(1234)).expect("generator");
        for _ in 0..50 {
            assert_eq!(left.event_at(now), right.event_at(now));
        }
    }

    #[test]
    fn timestamp_has_utc_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(now), "2024-03-01T12:30:05.000000+00:00");

        let selector = KindSelector::new(EventSet::Minimal).expect("selector");
        let mut rng = StdRng::seed_from_u64(1);
        let event = build_event(&mut rng, &selector, now);
        assert_eq!(event.timestamp(), "2024-03-01T12:30:05.000000+00:00");
    }

    #[test]
    fn build_event_draws_kinds_from_selector() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let selector = KindSelector::new(EventSet::Extended).expect("selector");
        let mut rng = StdRng::seed_from_u64(77);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(build_event(&mut rng, &selector, now).kind());
        }
        assert_eq!(seen.len(), 9);
        assert!(EventSet::Extended.kinds().all(|kind| seen.contains(&kind)));
    }

    #[test]
    fn source_never_runs_dry() {
        let mut generator =
            SimGenerator::from_config(&SourceConfig::default(), None).expect("generator");
        for _ in 0..10 {
            let event = generator.next_event().expect("event");
            assert!(DateTime::parse_from_rfc3339(event.timestamp()).is_ok());
        }
    }
}
