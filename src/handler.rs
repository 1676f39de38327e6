use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, error, info_span};

use crate::forwarder::{ForwardError, ForwardResult, Forwarder, transport::Transport};
use crate::logs::event::AwsLogsEvent;

/// What the function hands back to the Lambda runtime on success.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl TryFrom<ForwardResult> for InvocationResponse {
    type Error = ForwardError;

    fn try_from(result: ForwardResult) -> Result<Self, Self::Error> {
        let body = serde_json::to_string(&result).map_err(ForwardError::Encode)?;
        Ok(InvocationResponse {
            status_code: result.status_code,
            body,
        })
    }
}

/// Lambda entry point. Failures are logged, then returned to the runtime,
/// which records the invocation as failed.
pub async fn handler<T: Transport>(
    forwarder: &Forwarder<T>,
    event: LambdaEvent<AwsLogsEvent>,
) -> Result<InvocationResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async move {
        match forwarder
            .forward(&payload)
            .await
            .and_then(InvocationResponse::try_from)
        {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(stage = e.stage(), "Failed to forward logs: {}", e);
                Err(e.into())
            }
        }
    }
    .instrument(span)
    .await
}
