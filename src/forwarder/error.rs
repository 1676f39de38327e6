use thiserror::Error;

use crate::forwarder::transport::TransportError;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Failed to base64-decode log data: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Failed to gunzip log data: {0}")]
    Decompress(#[source] std::io::Error),
    #[error("Failed to parse log data as JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Log event at index {index} has no message field")]
    MalformedEvent { index: usize },
    #[error("Failed to serialize outbound payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("API error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ForwardError {
    /// Pipeline stage the error was raised in, used as a log field.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            ForwardError::Decode(_) => "decode",
            ForwardError::Decompress(_) => "decompress",
            ForwardError::Parse(_) => "parse",
            ForwardError::MalformedEvent { .. } => "extract",
            ForwardError::Encode(_) => "encode",
            ForwardError::Upstream { .. } => "upstream",
            ForwardError::Transport(_) => "transport",
        }
    }
}
