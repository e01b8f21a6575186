//! JSON-RPC client for node endpoints over HTTP(S).
//!
//! Implements [`NodeRpc`](super::NodeRpc) using `reqwest`.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
