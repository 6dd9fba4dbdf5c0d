//! Response interception: turns non-success responses into [`ApiError`]s.

use reqwest::StatusCode;

use crate::errors::ApiError;
use crate::types::ErrorEnvelope;

const MAX_SNIPPET: usize = 2000;

/// Inspects one response before it reaches the decoder.
///
/// Success statuses pass through. Any other status is turned into an
/// [`ApiError`] built from the first entry of the Directus error body, or into
/// an `UNKNOWN` error carrying only the status when the body is empty or does
/// not have the expected shape. The body is only borrowed, so the caller can
/// still log or decode it afterwards.
pub fn intercept(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    tracing::error!(
        "Request failed with status {}: {}",
        status,
        truncate_body(&String::from_utf8_lossy(body))
    );

    let code = status.as_u16();
    let fallback = || ApiError::unknown_status(code, status.canonical_reason().unwrap_or(""));

    if body.is_empty() {
        return Err(fallback());
    }
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.first() {
            Some(entry) => Err(ApiError::from_entry(entry, Some(code))),
            None => Err(fallback()),
        },
        Err(e) => {
            tracing::debug!("Error body is not a Directus error envelope: {}", e);
            Err(fallback())
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_SNIPPET {
        body.to_string()
    } else {
        let mut end = MAX_SNIPPET;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
