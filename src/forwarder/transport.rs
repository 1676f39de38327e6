use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error as ThisError;
use tracing::debug;

#[derive(ThisError, Debug, Clone, PartialEq)]
#[error("Error sending logs to API: {message}")]
pub struct TransportError {
    pub message: String,
}

/// Status and body of the endpoint's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Outbound seam of the forwarder, so tests can swap the network out.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` as `application/json`.
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, TransportError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, TransportError> {
        let post_time = std::time::Instant::now();
        let resp = self
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError {
                message: e.to_string(),
            })?;
        debug!("Post time: {:?}", post_time.elapsed());

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| TransportError {
            message: format!("failed to read response body: {e}"),
        })?;

        Ok(UpstreamResponse { status, body })
    }
}
