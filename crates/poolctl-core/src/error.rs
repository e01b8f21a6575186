#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("RPC communication failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The endpoint could not be reached at all (refused, DNS, TLS handshake).
    #[error("could not connect: {0}")]
    Connect(String),

    /// The connection was made but sending or reading the exchange failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The node did not complete the exchange within the client timeout.
    #[error("timed out: {0}")]
    Timeout(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            RpcError::Timeout(message)
        } else if err.is_connect() {
            RpcError::Connect(message)
        } else {
            RpcError::Transport(message)
        }
    }
}

/// Render an error with its `source()` chain, since reqwest keeps the
/// useful part ("Connection refused") a few levels down.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
