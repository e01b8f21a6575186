use clap::Parser;

/// poolctl: clear a node's in-memory transaction pool over JSON-RPC.
///
/// Prints the request it sends, then the node's reply, as JSON on stdout.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node JSON-RPC URL.
    #[arg(long, default_value = poolctl_core::DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Overall request timeout in seconds. Waits indefinitely when omitted.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Pretty-print the request and response JSON.
    #[arg(long)]
    pub pretty: bool,
}
