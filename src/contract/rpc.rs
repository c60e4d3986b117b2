//! Provider seam: the JSON-RPC primitives the submission pipeline needs.
//!
//! # Responsibilities
//! - Connect to the configured JSON-RPC endpoint
//! - Expose gas estimation, gas price, nonce, read-only call and broadcast
//! - Bound every round trip with the configured timeout
//!
//! The client depends on the [`Rpc`] trait rather than a concrete provider
//! so integration tests can substitute a programmable mock and count calls.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::config::schema::RpcConfig;

/// A single provider round trip failed.
#[derive(Debug, Error)]
pub enum RpcFailure {
    /// Endpoint unreachable or the transport broke mid-request.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Round trip exceeded the configured timeout.
    #[error("timed out after {0} seconds")]
    Timeout(u64),

    /// The node answered with a JSON-RPC error payload. For simulation and
    /// broadcast this is where revert reasons surface.
    #[error("node rejected request: {0}")]
    Rejected(String),
}

/// Provider primitives used by the contract client, object-safe for mocking.
#[async_trait]
pub trait Rpc: Send + Sync {
    /// Simulate the call from `from` and return the gas it would consume.
    async fn estimate_gas(&self, from: Address, to: Address, data: Bytes)
        -> Result<u64, RpcFailure>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128, RpcFailure>;

    /// Number of transactions sent from `address` (the next nonce).
    async fn transaction_count(&self, address: Address) -> Result<u64, RpcFailure>;

    /// Execute a read-only call and return the raw return data.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, RpcFailure>;

    /// Broadcast a raw signed transaction and return its hash.
    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, RpcFailure>;
}

/// Production [`Rpc`] implementation over an alloy HTTP provider.
#[derive(Clone)]
pub struct HttpRpc {
    provider: Arc<dyn Provider + Send + Sync>,
    timeout_duration: Duration,
    timeout_secs: u64,
}

impl HttpRpc {
    /// Connect to the endpoint named in `config`.
    ///
    /// The connection is lazy; an unreachable endpoint surfaces on the first
    /// round trip, not here.
    pub fn connect(config: &RpcConfig) -> Result<Self, RpcFailure> {
        let url: url::Url = config
            .url
            .parse()
            .map_err(|e| RpcFailure::Transport(format!("invalid RPC URL '{}': {}", config.url, e)))?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        tracing::info!(
            rpc_url = %config.url,
            chain_id = config.chain_id,
            timeout_secs = config.request_timeout_secs,
            "RPC provider initialized"
        );

        Ok(Self {
            provider,
            timeout_duration: Duration::from_secs(config.request_timeout_secs),
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Run one provider round trip under the configured timeout and
    /// normalize its failure modes.
    async fn round_trip<T, F>(&self, fut: F) -> Result<T, RpcFailure>
    where
        F: std::future::IntoFuture<Output = Result<T, RpcError<TransportErrorKind>>> + Send,
        F::IntoFuture: Send,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(classify(err)),
            Err(_) => Err(RpcFailure::Timeout(self.timeout_secs)),
        }
    }
}

/// Split node-level JSON-RPC errors (revert reasons, rejections) from
/// transport-level failures.
fn classify(err: RpcError<TransportErrorKind>) -> RpcFailure {
    match err.as_error_resp() {
        Some(payload) => RpcFailure::Rejected(payload.message.to_string()),
        None => RpcFailure::Transport(err.to_string()),
    }
}

#[async_trait]
impl Rpc for HttpRpc {
    async fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<u64, RpcFailure> {
        let request = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(data);
        self.round_trip(self.provider.estimate_gas(request)).await
    }

    async fn gas_price(&self) -> Result<u128, RpcFailure> {
        self.round_trip(self.provider.get_gas_price()).await
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, RpcFailure> {
        self.round_trip(self.provider.get_transaction_count(address))
            .await
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, RpcFailure> {
        let request = TransactionRequest::default().with_to(to).with_input(data);
        self.round_trip(self.provider.call(request)).await
    }

    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, RpcFailure> {
        let pending = self
            .round_trip(self.provider.send_raw_transaction(&raw))
            .await?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for HttpRpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRpc")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let err = RpcFailure::Timeout(10);
        assert_eq!(err.to_string(), "timed out after 10 seconds");

        let err = RpcFailure::Rejected("execution reverted: bad rating".to_string());
        assert!(err.to_string().contains("execution reverted"));
    }

    #[test]
    fn test_connect_rejects_bad_url() {
        let config = RpcConfig {
            url: "not a url".to_string(),
            ..RpcConfig::default()
        };
        let result = HttpRpc::connect(&config);
        assert!(matches!(result, Err(RpcFailure::Transport(_))));
    }
}
