use reqwest::StatusCode;

use crate::error::{CoreError, RpcError};

/// Parse a response body as JSON, whatever its shape or HTTP status.
///
/// An empty or non-JSON body is an error; the status and the body (truncated)
/// are echoed so the operator can see what actually answered on the port.
pub(super) fn decode_response_body(
    status: StatusCode,
    body: &str,
) -> Result<serde_json::Value, CoreError> {
    serde_json::from_str(body).map_err(|e| {
        RpcError::InvalidResponse(format!(
            "decode JSON response: {e}; status={status}; body={}",
            truncate_body(body)
        ))
        .into()
    })
}

const BODY_PREVIEW_CHARS: usize = 512;

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}
