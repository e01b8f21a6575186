mod app;
mod cli;
#[cfg(test)]
mod mock;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use poolctl_core::rpc::HttpRpcClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the request and reply JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let rpc = HttpRpcClient::new(&args.rpc_url, args.timeout.map(Duration::from_secs))
        .wrap_err("configure node RPC client")?;
    tracing::debug!(url = rpc.url(), timeout = ?args.timeout, "sending clearInMemoryPool");

    let mut stdout = std::io::stdout().lock();
    app::run(&rpc, rpc.url(), &mut stdout, args.pretty).await?;

    Ok(())
}
