//! Shared mock provider for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{keccak256, Address, Bytes, TxHash};
use async_trait::async_trait;

use teacheval_client::contract::{Rpc, RpcFailure};

/// Programmable mock provider.
///
/// Every primitive counts its invocations and records its arguments so
/// tests can assert not just what an operation returned but which round
/// trips it performed (and, as importantly, which it did not).
#[derive(Default)]
pub struct MockRpc {
    /// Gas returned by `estimate_gas`.
    pub gas_estimate: u64,
    /// Price returned by `gas_price`.
    pub gas_price: u128,
    /// Nonce returned by `transaction_count`.
    pub nonce: u64,
    /// Payload returned by `call`.
    pub call_return: Vec<u8>,

    /// When set, `estimate_gas` answers with this node rejection.
    pub reject_estimate: Option<String>,
    /// When set, `estimate_gas` fails at the transport layer.
    pub fail_estimate_transport: bool,
    /// When set, `gas_price` fails at the transport layer.
    pub fail_gas_price: bool,
    /// When set, `send_raw_transaction` answers with this node rejection.
    pub reject_send: Option<String>,

    pub estimate_calls: AtomicUsize,
    pub gas_price_calls: AtomicUsize,
    pub nonce_calls: AtomicUsize,
    pub call_calls: AtomicUsize,
    pub send_calls: AtomicUsize,

    /// Arguments of every `estimate_gas` invocation.
    pub estimated: Mutex<Vec<(Address, Address, Bytes)>>,
    /// Raw payload of every broadcast.
    pub sent: Mutex<Vec<Vec<u8>>>,
}

#[async_trait]
impl Rpc for MockRpc {
    async fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<u64, RpcFailure> {
        self.estimate_calls.fetch_add(1, Ordering::SeqCst);
        self.estimated.lock().unwrap().push((from, to, data));

        if self.fail_estimate_transport {
            return Err(RpcFailure::Transport("connection refused".to_string()));
        }
        if let Some(reason) = &self.reject_estimate {
            return Err(RpcFailure::Rejected(reason.clone()));
        }
        Ok(self.gas_estimate)
    }

    async fn gas_price(&self) -> Result<u128, RpcFailure> {
        self.gas_price_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_gas_price {
            return Err(RpcFailure::Transport("connection refused".to_string()));
        }
        Ok(self.gas_price)
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64, RpcFailure> {
        self.nonce_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.nonce)
    }

    async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, RpcFailure> {
        self.call_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.call_return.clone().into())
    }

    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, RpcFailure> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(raw.clone());

        if let Some(reason) = &self.reject_send {
            return Err(RpcFailure::Rejected(reason.clone()));
        }
        Ok(keccak256(&raw))
    }
}
