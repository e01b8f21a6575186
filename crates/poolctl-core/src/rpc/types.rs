//! JSON-RPC envelope types shared by every transport.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Request
// ==============================================================================

/// A JSON-RPC 2.0 request with the node's optional top-level `key` field.
///
/// Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl JsonRpcRequest {
    /// A request with empty named params (`{}`) and no key.
    pub fn new(id: u64, method: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.to_owned(),
            params: serde_json::Value::Object(serde_json::Map::new()),
            key: None,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_owned());
        self
    }
}

// ==============================================================================
// Reply
// ==============================================================================

/// Shape of a parsed response body when read as a JSON-RPC reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Result(serde_json::Value),
    Error { code: i64, message: String },
    Other,
}

/// Classify a response body.
///
/// A standard error object is `{"code": <int>, "message": <string>}`; an
/// `error` member of any other shape counts as [`Reply::Other`].
pub fn classify_reply(body: &serde_json::Value) -> Reply {
    #[derive(Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    let Some(object) = body.as_object() else {
        return Reply::Other;
    };

    if let Some(err) = object.get("error").filter(|e| !e.is_null()) {
        return match serde_json::from_value::<JsonRpcError>(err.clone()) {
            Ok(parsed) => Reply::Error {
                code: parsed.code,
                message: parsed.message,
            },
            Err(_) => Reply::Other,
        };
    }

    match object.get("result") {
        Some(result) => Reply::Result(result.clone()),
        None => Reply::Other,
    }
}
