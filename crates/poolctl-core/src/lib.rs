pub mod error;
pub mod pool;
pub mod rpc;

pub use error::{CoreError, RpcError};
pub use pool::{
    clear_in_memory_pool_request, CLEAR_IN_MEMORY_POOL, DEFAULT_RPC_URL, NODE_API_KEY,
};
