use crate::sources::cloudseim::catalog::EventKind;
use serde::Serialize;

/// One synthetic event, tagged by `eventType` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "eventType", rename_all = "lowercase")]
pub enum Event {
    Auth(AuthEvent),
    Mouse(MouseEvent),
    Api(ApiEvent),
    Lambda(LambdaEvent),
    DynamoDb(DynamoDbEvent),
    Sns(SnsEvent),
    CloudWatch(CloudWatchEvent),
    S3(S3Event),
    Ec2(Ec2Event),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Auth(_) => EventKind::Auth,
            Event::Mouse(_) => EventKind::Mouse,
            Event::Api(_) => EventKind::Api,
            Event::Lambda(_) => EventKind::Lambda,
            Event::DynamoDb(_) => EventKind::DynamoDb,
            Event::Sns(_) => EventKind::Sns,
            Event::CloudWatch(_) => EventKind::CloudWatch,
            Event::S3(_) => EventKind::S3,
            Event::Ec2(_) => EventKind::Ec2,
        }
    }

    /// Wire value of the `action` field.
    pub fn action(&self) -> &'static str {
        match self {
            Event::Auth(event) => event.action.as_str(),
            Event::Mouse(event) => event.action.as_str(),
            Event::Api(event) => event.action.as_str(),
            Event::Lambda(event) => event.action.as_str(),
            Event::DynamoDb(event) => event.action.as_str(),
            Event::Sns(event) => event.action.as_str(),
            Event::CloudWatch(event) => event.action.as_str(),
            Event::S3(event) => event.action.as_str(),
            Event::Ec2(event) => event.action.as_str(),
        }
    }

    pub fn ip_address(&self) -> &str {
        match self {
            Event::Auth(event) => &event.ip_address,
            Event::Mouse(event) => &event.ip_address,
            Event::Api(event) => &event.ip_address,
            Event::Lambda(event) => &event.ip_address,
            Event::DynamoDb(event) => &event.ip_address,
            Event::Sns(event) => &event.ip_address,
            Event::CloudWatch(event) => &event.ip_address,
            Event::S3(event) => &event.ip_address,
            Event::Ec2(event) => &event.ip_address,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            Event::Auth(event) => &event.timestamp,
            Event::Mouse(event) => &event.timestamp,
            Event::Api(event) => &event.timestamp,
            Event::Lambda(event) => &event.timestamp,
            Event::DynamoDb(event) => &event.timestamp,
            Event::Sns(event) => &event.timestamp,
            Event::CloudWatch(event) => &event.timestamp,
            Event::S3(event) => &event.timestamp,
            Event::Ec2(event) => &event.timestamp,
        }
    }
}

/// Login attempt by a known user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEvent {
    pub action: AuthAction,
    pub user_id: String,
    pub ip_address: String,
    pub success: bool,
    pub timestamp: String,
}

/// Mouse telemetry comparing the travelled path with the expected one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseEvent {
    pub action: MouseAction,
    pub ip_address: String,
    pub expected_path_distance: f64,
    pub mouse_path_distance: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    pub action: ApiAction,
    pub api_key_id: String,
    pub ip_address: String,
    pub endpoint: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaEvent {
    pub action: LambdaAction,
    pub function_name: String,
    pub ip_address: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamoDbEvent {
    pub action: DynamoDbAction,
    pub table_name: String,
    pub ip_address: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnsEvent {
    pub action: SnsAction,
    pub topic: String,
    pub ip_address: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudWatchEvent {
    pub action: CloudWatchAction,
    pub metric_name: String,
    pub ip_address: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Event {
    pub action: S3Action,
    pub bucket: String,
    pub ip_address: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2Event {
    pub action: Ec2Action,
    pub instance_id: String,
    pub ip_address: String,
    pub timestamp: String,
}

macro_rules! actions {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }
    };
}

actions!(AuthAction { Login => "login" });
actions!(MouseAction { MouseMove => "mouse_move" });
actions!(ApiAction { Request => "request" });
actions!(LambdaAction { Invoked => "invoked", Error => "error" });
actions!(DynamoDbAction { ItemWritten => "item_written", ItemDeleted => "item_deleted" });
actions!(SnsAction { MessagePublished => "message_published" });
actions!(CloudWatchAction { MetricPut => "metric_put" });
actions!(S3Action { FileUploaded => "file_uploaded", FileDeleted => "file_deleted" });
actions!(Ec2Action { InstanceStarted => "instance_started", InstanceStopped => "instance_stopped" });
