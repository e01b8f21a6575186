//! Node JSON-RPC abstraction layer.
//!
//! Defines the [`NodeRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]).

mod http_adapter;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{classify_reply, JsonRpcRequest, Reply};

use async_trait::async_trait;

use crate::error::CoreError;

/// Transport for sending a single JSON-RPC request to a node.
///
/// The response is returned as parsed JSON, untouched: callers decide what
/// to do with `result` or `error` members.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Hand out the id for the next request sent through this transport.
    fn next_request_id(&self) -> u64;

    /// POST `request` and parse the response body as JSON.
    async fn send(&self, request: &JsonRpcRequest) -> Result<serde_json::Value, CoreError>;
}
