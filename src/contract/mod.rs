//! Course-evaluation contract integration.
//!
//! # Data Flow
//! ```text
//! Environment variable (private key) + configuration (endpoint, address)
//!     → wallet.rs (key loading, signing)
//!     → rpc.rs (provider round trips with timeouts)
//!     → client.rs (encode → estimate → price → nonce → sign → broadcast)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC round trips have configurable timeouts

pub mod abi;
pub mod client;
pub mod rpc;
pub mod types;
pub mod wallet;

pub use client::ContractClient;
pub use rpc::{HttpRpc, Rpc, RpcFailure};
pub use types::{ClientError, ClientResult, ReviewData, TxOutcome};
pub use wallet::Wallet;
