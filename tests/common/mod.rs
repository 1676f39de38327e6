use awslogs_forwarder::logs::event::{AwsLogs, AwsLogsEvent};
use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{Compression, write::GzEncoder};
use serde_json::Value;
use std::io::Write;

/// Wraps `document` the way CloudWatch Logs does: gzip, then base64.
pub fn aws_logs_event(document: &Value) -> AwsLogsEvent {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(document.to_string().as_bytes())
        .expect("failed to compress document");
    let compressed = encoder.finish().expect("failed to finish gzip stream");

    AwsLogsEvent {
        awslogs: AwsLogs {
            data: STANDARD.encode(compressed),
        },
    }
}
