use std::io::Read;

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::forwarder::ForwardError;
use crate::logs::event::CloudWatchLogsData;

/// Turns the `awslogs.data` string into the subscription document.
///
/// Each stage fails with its own error, so a bad base64 string never reaches
/// the gzip decoder.
pub fn decode(data: &str) -> Result<CloudWatchLogsData, ForwardError> {
    let compressed = STANDARD.decode(data)?;
    let decompressed = decompress(&compressed)?;
    debug!(
        "Decoded {} compressed bytes into {} bytes of JSON",
        compressed.len(),
        decompressed.len()
    );
    serde_json::from_slice(&decompressed).map_err(ForwardError::Parse)
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, ForwardError> {
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(ForwardError::Decompress)?;
    Ok(decompressed)
}
