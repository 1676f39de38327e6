use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload delivered by a CloudWatch Logs subscription trigger.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AwsLogsEvent {
    pub awslogs: AwsLogs,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AwsLogs {
    /// base64(gzip(json)) of a [`CloudWatchLogsData`] document
    pub data: String,
}

/// The document carried, compressed, in [`AwsLogs::data`].
///
/// Every field is optional so partial documents still decode. Unknown
/// fields are ignored. Fields only used for diagnostics are kept as raw
/// JSON, so an unexpected shape there never fails a batch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CloudWatchLogsData {
    #[serde(default)]
    pub message_type: Option<Value>,
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub log_group: Option<String>,
    #[serde(default)]
    pub log_stream: Option<String>,
    #[serde(default)]
    pub subscription_filters: Option<Value>,
    #[serde(default)]
    pub log_events: Option<Vec<LogEvent>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LogEvent {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}
