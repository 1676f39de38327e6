pub mod error;
pub mod transport;

pub use error::ForwardError;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, message_policy::MessagePolicy};
use crate::forwarder::transport::Transport;
use crate::logs::{batch::LogBatch, decoder, event::AwsLogsEvent};

pub const SUCCESS_MESSAGE: &str = "Logs processed successfully";

/// Body POSTed to the endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForwardPayload<'a> {
    pub log_group: Option<&'a str>,
    pub log_stream: Option<&'a str>,
    pub messages: &'a [String],
}

impl<'a> From<&'a LogBatch> for ForwardPayload<'a> {
    fn from(batch: &'a LogBatch) -> Self {
        ForwardPayload {
            log_group: batch.log_group.as_deref(),
            log_stream: batch.log_stream.as_deref(),
            messages: &batch.messages,
        }
    }
}

/// Outcome of a successful forward. Serializes to the invocation body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardResult {
    #[serde(skip)]
    pub status_code: u16,
    pub message: String,
    pub log_group: Option<String>,
    pub log_stream: Option<String>,
    pub log_count: usize,
}

impl ForwardResult {
    fn success(batch: LogBatch) -> Self {
        ForwardResult {
            status_code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            log_count: batch.messages.len(),
            log_group: batch.log_group,
            log_stream: batch.log_stream,
        }
    }
}

pub fn build_payload(batch: &LogBatch) -> Result<Vec<u8>, ForwardError> {
    serde_json::to_vec(&ForwardPayload::from(batch)).map_err(ForwardError::Encode)
}

pub struct Forwarder<T = reqwest::Client> {
    transport: T,
    endpoint: String,
    policy: MessagePolicy,
}

impl<T: Transport> Forwarder<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Forwarder {
            transport,
            endpoint: config.api_endpoint.clone(),
            policy: config.missing_message_policy,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Decodes the trigger payload and relays its messages to the endpoint.
    ///
    /// Only a 200 answer counts as success. Nothing is retried.
    pub async fn forward(&self, event: &AwsLogsEvent) -> Result<ForwardResult, ForwardError> {
        info!(
            "Received event with {} bytes of log data",
            event.awslogs.data.len()
        );
        let data = decoder::decode(&event.awslogs.data)?;
        info!(
            "Decoded log data, type: {:?}, owner: {:?}, filters: {:?}",
            data.message_type, data.owner, data.subscription_filters
        );
        debug!("Log events: {:?}", data.log_events);

        let batch = LogBatch::from_data(data, self.policy)?;
        let payload = build_payload(&batch)?;

        info!(
            "Sending {} messages from {:?}/{:?} to {}",
            batch.len(),
            batch.log_group,
            batch.log_stream,
            self.endpoint
        );
        debug!("Payload: {}", String::from_utf8_lossy(&payload));

        let response = self.transport.post_json(&self.endpoint, payload).await?;
        info!("Response status: {}", response.status);
        debug!("Response data: {}", response.body);

        if response.status != 200 {
            return Err(ForwardError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        info!("Successfully sent logs to API");
        Ok(ForwardResult::success(batch))
    }
}
