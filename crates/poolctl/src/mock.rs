use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use poolctl_core::rpc::{JsonRpcRequest, NodeRpc};
use poolctl_core::{CoreError, RpcError};

/// A mock node transport for testing. Records every request it is given and
/// answers with a canned reply, or fails as if nothing were listening.
pub struct MockRpc {
    outcome: Outcome,
    next_id: AtomicU64,
    sent: Mutex<Vec<JsonRpcRequest>>,
}

enum Outcome {
    Reply(serde_json::Value),
    Unreachable,
}

impl MockRpc {
    pub fn replying(reply: serde_json::Value) -> Self {
        Self::with_outcome(Outcome::Reply(reply))
    }

    pub fn unreachable() -> Self {
        Self::with_outcome(Outcome::Unreachable)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            next_id: AtomicU64::new(1),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<JsonRpcRequest> {
        self.sent.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(&self, request: &JsonRpcRequest) -> Result<serde_json::Value, CoreError> {
        self.sent
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());
        match &self.outcome {
            Outcome::Reply(reply) => Ok(reply.clone()),
            Outcome::Unreachable => Err(RpcError::Connect(
                "error sending request for url (http://localhost:7070/): Connection refused".into(),
            )
            .into()),
        }
    }
}
