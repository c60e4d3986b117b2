//! Contract-call error taxonomy and result types.

use alloy::primitives::{TxHash, U256};
use serde::Serialize;
use thiserror::Error;

use crate::contract::rpc::RpcFailure;

/// Errors that can occur while invoking the course-evaluation contract.
///
/// Each submission step maps its failure onto exactly one of these kinds so
/// callers can tell an outage from a contract-side rejection. Nothing is
/// retried internally; the first failure aborts the whole operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Provider unreachable or the round trip timed out.
    #[error("provider request failed during {step}")]
    Network {
        /// The pipeline step whose round trip failed.
        step: &'static str,
        #[source]
        source: RpcFailure,
    },

    /// Simulating the call against current chain state reverted.
    #[error("gas estimation reverted: {reason}")]
    GasEstimation { reason: String },

    /// The signer rejected the request (malformed or invalid key).
    #[error("signing failed: {0}")]
    Signing(String),

    /// The network rejected the signed transaction (e.g. nonce too low).
    #[error("network rejected signed transaction: {0}")]
    Submission(String),

    /// The contract's logic rejected the call at broadcast time.
    #[error("contract reverted: {reason}")]
    ContractRevert { reason: String },

    /// Response payload did not match the expected return shape.
    #[error("failed to decode contract response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Wrap a provider failure with the pipeline step it occurred in.
    pub(crate) fn network(step: &'static str, source: RpcFailure) -> Self {
        Self::Network { step, source }
    }
}

/// Result type for contract-client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Outcome of a submitted state-changing transaction.
///
/// The hash identifies the transaction on the network; the submission
/// parameters are echoed so callers can log or audit what went on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOutcome {
    /// Hash of the signed transaction.
    pub tx_hash: TxHash,
    /// Gas limit obtained from simulation.
    pub gas_limit: u64,
    /// Gas price the transaction was priced at, in wei.
    pub gas_price: u128,
    /// Account nonce the transaction was assigned.
    pub nonce: u64,
}

/// Decoded return of `viewReview`: the stored scores in contract order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewData {
    pub scores: Vec<U256>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::GasEstimation {
            reason: "execution reverted: not enrolled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gas estimation reverted: execution reverted: not enrolled"
        );

        let err = ClientError::network("gas_price", RpcFailure::Timeout(10));
        assert_eq!(err.to_string(), "provider request failed during gas_price");

        let err = ClientError::Submission("nonce too low".to_string());
        assert!(err.to_string().contains("nonce too low"));
    }

    #[test]
    fn test_network_error_keeps_cause() {
        let err = ClientError::network("estimate_gas", RpcFailure::Transport("refused".into()));
        let source = std::error::Error::source(&err).expect("cause attached");
        assert!(source.to_string().contains("refused"));
    }
}
