use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace, warn};

use crate::error::{CoreError, RpcError};

use super::super::types::{classify_reply, JsonRpcRequest, Reply};
use super::super::NodeRpc;
use super::connection::parse_connection;
use super::protocol::decode_response_body;

/// Node JSON-RPC client over HTTP(S).
///
/// Sends one request per call. Request ids start at 1 and increase for the
/// lifetime of the client.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Create a new client for an HTTP URL.
    ///
    /// `timeout` bounds the whole exchange; `None` waits for as long as the
    /// node takes to answer.
    pub fn new(connection: &str, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let url = parse_connection(connection)?;

        let mut builder = reqwest::Client::builder().tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NodeRpc for HttpRpcClient {
    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(&self, request: &JsonRpcRequest) -> Result<serde_json::Value, CoreError> {
        debug!(
            rpc.id = request.id,
            rpc.method = %request.method,
            rpc.keyed = request.key.is_some(),
            url = %self.url,
            "rpc call"
        );

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(RpcError::from)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::from)?;
        debug!(
            rpc.id = request.id,
            rpc.method = %request.method,
            %status,
            body_len = body.len(),
            "rpc response"
        );
        trace!(rpc.id = request.id, body = %body, "rpc response body");

        if !status.is_success() {
            warn!(
                rpc.id = request.id,
                %status,
                "node answered with a non-success HTTP status"
            );
        }

        let decoded = decode_response_body(status, &body)?;

        if let Reply::Error { code, message } = classify_reply(&decoded) {
            warn!(
                rpc.id = request.id,
                rpc.method = %request.method,
                code,
                %message,
                "node returned a JSON-RPC error"
            );
        }

        Ok(decoded)
    }
}
