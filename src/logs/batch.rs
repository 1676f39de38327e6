use tracing::warn;

use crate::config::message_policy::MessagePolicy;
use crate::forwarder::ForwardError;
use crate::logs::event::CloudWatchLogsData;

/// Decoded contents of one trigger invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogBatch {
    pub log_group: Option<String>,
    pub log_stream: Option<String>,
    pub messages: Vec<String>,
}

impl LogBatch {
    /// Extracts group, stream and messages, keeping the order of `logEvents`.
    ///
    /// A missing `logEvents` array yields an empty batch. Events without a
    /// `message` are handled according to `policy`.
    pub fn from_data(data: CloudWatchLogsData, policy: MessagePolicy) -> Result<Self, ForwardError> {
        let events = data.log_events.unwrap_or_default();
        let mut messages = Vec::with_capacity(events.len());

        for (index, event) in events.into_iter().enumerate() {
            match (event.message, policy) {
                (Some(message), _) => messages.push(message),
                (None, MessagePolicy::Abort) => {
                    return Err(ForwardError::MalformedEvent { index });
                }
                (None, MessagePolicy::Skip) => {
                    warn!(
                        "Skipping log event at index {} without message, id: {:?}",
                        index, event.id
                    );
                }
            }
        }

        Ok(LogBatch {
            log_group: data.log_group,
            log_stream: data.log_stream,
            messages,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
