use super::catalog::{
    API_ENDPOINTS, API_KEYS, BUCKETS, FUNCTION_NAMES, METRIC_NAMES, SNS_TOPICS, TABLE_NAMES, USERS,
};
use crate::core::event::{
    ApiAction, ApiEvent, AuthAction, AuthEvent, CloudWatchAction, CloudWatchEvent, DynamoDbAction,
    DynamoDbEvent, Ec2Action, Ec2Event, Event, LambdaAction, LambdaEvent, MouseAction, MouseEvent,
    S3Action, S3Event, SnsAction, SnsEvent,
};
use rand::Rng;

/// Share of auth attempts that fail.
const AUTH_FAILURE_RATE: f64 = 0.65;
const EXPECTED_PATH_MIN: f64 = 100.0;
const EXPECTED_PATH_MAX: f64 = 500.0;
/// Travelled path relative to the expected one. Wide enough that some
/// samples land well outside a detector's tolerance.
const PATH_SKEW_MIN: f64 = 0.45;
const PATH_SKEW_MAX: f64 = 1.65;
const INSTANCE_ID_MIN: u32 = 1_000_000;
const INSTANCE_ID_MAX: u32 = 9_999_999;

pub fn random_ip(rng: &mut impl Rng) -> String {
    format!("192.168.{}.{}", rng.gen_range(0..=10), rng.gen_range(1..=254))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform pick from a non-empty constant pool.
fn pick<T: Copy>(rng: &mut impl Rng, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

pub fn build_auth_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    let user_id = pick(rng, USERS).to_string();
    let success = rng.gen::<f64>() > AUTH_FAILURE_RATE;
    Event::Auth(AuthEvent {
        action: AuthAction::Login,
        user_id,
        ip_address: random_ip(rng),
        success,
        timestamp: timestamp.to_string(),
    })
}

pub fn build_mouse_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    let expected = rng.gen_range(EXPECTED_PATH_MIN..EXPECTED_PATH_MAX);
    let travelled = expected * rng.gen_range(PATH_SKEW_MIN..PATH_SKEW_MAX);
    Event::Mouse(MouseEvent {
        action: MouseAction::MouseMove,
        ip_address: random_ip(rng),
        expected_path_distance: round2(expected),
        mouse_path_distance: round2(travelled),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_api_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    let api_key_id = pick(rng, API_KEYS).to_string();
    let ip_address = random_ip(rng);
    Event::Api(ApiEvent {
        action: ApiAction::Request,
        api_key_id,
        ip_address,
        endpoint: pick(rng, API_ENDPOINTS).to_string(),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_lambda_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    Event::Lambda(LambdaEvent {
        action: pick(rng, LambdaAction::ALL),
        function_name: pick(rng, FUNCTION_NAMES).to_string(),
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_dynamodb_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    Event::DynamoDb(DynamoDbEvent {
        action: pick(rng, DynamoDbAction::ALL),
        table_name: pick(rng, TABLE_NAMES).to_string(),
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_sns_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    Event::Sns(SnsEvent {
        action: SnsAction::MessagePublished,
        topic: pick(rng, SNS_TOPICS).to_string(),
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_cloudwatch_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    Event::CloudWatch(CloudWatchEvent {
        action: CloudWatchAction::MetricPut,
        metric_name: pick(rng, METRIC_NAMES).to_string(),
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_s3_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    Event::S3(S3Event {
        action: pick(rng, S3Action::ALL),
        bucket: pick(rng, BUCKETS).to_string(),
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

pub fn build_ec2_event(rng: &mut impl Rng, timestamp: &str) -> Event {
    let action = pick(rng, Ec2Action::ALL);
    let instance_id = format!("i-{}", rng.gen_range(INSTANCE_ID_MIN..=INSTANCE_ID_MAX));
    Event::Ec2(Ec2Event {
        action,
        instance_id,
        ip_address: random_ip(rng),
        timestamp: timestamp.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TS: &str = "2024-01-01T00:00:00.000000+00:00";

    fn octets(ip: &str) -> Vec<u32> {
        ip.split('.').map(|part| part.parse().expect("octet")).collect()
    }

    #[test]
    fn ip_stays_in_lab_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let ip = random_ip(&mut rng);
            let parts = octets(&ip);
            assert_eq!(parts.len(), 4, "{ip}");
            assert_eq!(&parts[..2], &[192, 168]);
            assert!(parts[2] <= 10, "{ip}");
            assert!((1..=254).contains(&parts[3]), "{ip}");
        }
    }

    #[test]
    fn mouse_distances_are_positive_and_rounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let Event::Mouse(event) = build_mouse_event(&mut rng, TS) else {
                panic!("expected mouse event");
            };
            for value in [event.expected_path_distance, event.mouse_path_distance] {
                assert!(value > 0.0);
                assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6, "{value}");
            }
            assert!((100.0..=500.0).contains(&event.expected_path_distance));
            let ratio = event.mouse_path_distance / event.expected_path_distance;
            assert!((0.44..=1.66).contains(&ratio), "ratio={ratio}");
        }
    }

    #[test]
    fn auth_users_come_from_roster() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut saw_success = false;
        let mut saw_failure = false;
        for _ in 0..200 {
            let Event::Auth(event) = build_auth_event(&mut rng, TS) else {
                panic!("expected auth event");
            };
            assert!(USERS.contains(&event.user_id.as_str()));
            assert_eq!(event.action, AuthAction::Login);
            saw_success |= event.success;
            saw_failure |= !event.success;
        }
        assert!(saw_success && saw_failure);
    }

    #[test]
    fn ec2_instance_ids_have_seven_digits() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let Event::Ec2(event) = build_ec2_event(&mut rng, TS) else {
                panic!("expected ec2 event");
            };
            let digits = event.instance_id.strip_prefix("i-").expect("prefix");
            assert_eq!(digits.len(), 7);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn pick_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let action = pick(&mut rng, S3Action::ALL);
            assert!(S3Action::ALL.contains(&action));
            let bucket = pick(&mut rng, BUCKETS);
            let idx = BUCKETS.iter().position(|b| *b == bucket).expect("bucket from pool");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(123.456), 123.46);
        assert_eq!(round2(100.0), 100.0);
    }
}
