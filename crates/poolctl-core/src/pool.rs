//! The `clearInMemoryPool` admin request.
//!
//! The node guards admin methods with an API key carried as a top-level
//! `key` field next to the standard JSON-RPC envelope. The key sent here is
//! fixed and identical on every invocation.

use crate::rpc::JsonRpcRequest;

/// JSON-RPC method that drops every pending transaction held in the node's
/// in-memory pool.
pub const CLEAR_IN_MEMORY_POOL: &str = "clearInMemoryPool";

/// Endpoint of a node running locally with the default RPC port.
pub const DEFAULT_RPC_URL: &str = "http://localhost:7070";

/// RSA public key, in XML form, that the node accepts as its admin API key.
pub const NODE_API_KEY: &str = concat!(
    "<RSAKeyValue><Modulus>",
    "rOLKNH5R++Kpr3UJtvitxB9av4elNymxrMi5q0aCQZCVYyej3+LRBYRZgnaMaQr57Sbj",
    "bwPU21ptxbWUtoNXvsYDWdd47ePRB+wQMUCT010nXOMAfSPKlJM3ixuehKu8pycd2hqy",
    "NCb+kSa6W4cCYfXQV9I7KxlzbYHIctuk0t69McTW/qPEy6wFmw4y1C9AUNdieXf63s8Q",
    "AoxQLIH98jfuGT4+CRe57UTZwMQUJYvvoI2pspIFFYHPZBUFirxSizTai7uEBc78IbhV",
    "YSL3aeziN1xJofhaXNkrD3nbUIE2uvp66j4FkG0/RhkJE1noC6vqKfc0wzj5Q3xGuP6I",
    "aw==",
    "</Modulus><Exponent>AQAB</Exponent></RSAKeyValue>",
);

/// Build the `clearInMemoryPool` request: empty params plus the admin key.
pub fn clear_in_memory_pool_request(id: u64) -> JsonRpcRequest {
    JsonRpcRequest::new(id, CLEAR_IN_MEMORY_POOL).with_key(NODE_API_KEY)
}
