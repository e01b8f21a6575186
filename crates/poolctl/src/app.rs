use std::io::Write;

use eyre::{eyre, WrapErr};
use poolctl_core::rpc::NodeRpc;
use poolctl_core::{clear_in_memory_pool_request, CoreError, RpcError};
use serde::Serialize;

/// Send `clearInMemoryPool` through `rpc`.
///
/// The request is printed before it goes out, the parsed reply once it
/// arrives. The reply is returned as-is; a JSON-RPC `error` member in it is
/// not a failure of the run.
pub async fn run<W: Write>(
    rpc: &dyn NodeRpc,
    endpoint: &str,
    out: &mut W,
    pretty: bool,
) -> eyre::Result<serde_json::Value> {
    let request = clear_in_memory_pool_request(rpc.next_request_id());
    write_json(out, &request, pretty).wrap_err("print request")?;

    let response = rpc.send(&request).await.map_err(|err| {
        let message = format_send_error(endpoint, &err);
        eyre!(message).wrap_err("while sending clearInMemoryPool to the node")
    })?;
    tracing::info!(rpc.id = request.id, "node replied");

    write_json(out, &response, pretty).wrap_err("print response")?;
    Ok(response)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> eyre::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn format_send_error(endpoint: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("request to `{endpoint}` failed"),
        format!("RPC error: {err}"),
    ];

    match err {
        CoreError::Rpc(RpcError::Connect(_)) => lines.push(
            "hint: nothing accepted the connection; verify the node is running and its RPC port"
                .into(),
        ),
        CoreError::Rpc(RpcError::Timeout(_)) => lines
            .push("hint: the node did not answer in time; raise --timeout or check node load".into()),
        CoreError::Rpc(RpcError::InvalidResponse(_)) => lines.push(
            "hint: the endpoint did not answer with JSON; verify --rpc-url points at the node RPC port"
                .into(),
        ),
        _ => {}
    }

    lines.join("\n")
}
