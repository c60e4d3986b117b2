//! Contract client: four domain operations over one submission pipeline.
//!
//! # Responsibilities
//! - Translate choose/enroll/submit-review/view-review into contract calls
//! - Drive the shared submission pipeline for state-changing operations
//! - Map provider failures onto the error taxonomy
//!
//! Each operation is a single-shot request/response; the client keeps no
//! state between calls beyond the provider handle, the wallet and the
//! contract address, so concurrent invocations need no locking.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use std::sync::Arc;

use crate::contract::abi;
use crate::contract::rpc::{Rpc, RpcFailure};
use crate::contract::types::{ClientError, ClientResult, ReviewData, TxOutcome};
use crate::contract::wallet::Wallet;

/// Client for the externally deployed course-evaluation contract.
#[derive(Clone)]
pub struct ContractClient {
    rpc: Arc<dyn Rpc>,
    wallet: Wallet,
    contract_address: Address,
    /// Caller-pinned gas price in wei; `None` asks the provider per call.
    fixed_gas_price: Option<u128>,
}

impl ContractClient {
    /// Create a client over an established provider connection.
    pub fn new(
        rpc: Arc<dyn Rpc>,
        wallet: Wallet,
        contract_address: Address,
        fixed_gas_price: Option<u128>,
    ) -> Self {
        Self {
            rpc,
            wallet,
            contract_address,
            fixed_gas_price,
        }
    }

    /// The deployed contract address this client targets.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// The sender address transactions are signed with.
    pub fn sender(&self) -> Address {
        self.wallet.address()
    }

    /// Select a course for evaluation.
    pub async fn choose_course(&self, course_id: U256) -> ClientResult<TxOutcome> {
        self.submit("chooseCourse", abi::encode_choose_course(course_id))
            .await
    }

    /// Enroll the sender in a course.
    pub async fn enroll_course(&self, course_id: U256) -> ClientResult<TxOutcome> {
        self.submit("enrollCourse", abi::encode_enroll_course(course_id))
            .await
    }

    /// Submit an ordered list of rating scores for a course.
    ///
    /// Length and value-range constraints are enforced by the remote
    /// contract; the sequence is forwarded exactly as given and a
    /// contract-side rejection surfaces as [`ClientError::ContractRevert`].
    pub async fn submit_review(
        &self,
        course_id: U256,
        ratings: Vec<U256>,
    ) -> ClientResult<TxOutcome> {
        self.submit(
            "submitReview",
            abi::encode_submit_review(course_id, ratings),
        )
        .await
    }

    /// Read the stored scores for a course.
    ///
    /// Read-only `eth_call`: no signing, no gas estimation, no gas cost.
    pub async fn view_review(&self, course_id: U256) -> ClientResult<ReviewData> {
        let data = abi::encode_view_review(course_id);

        let raw = self
            .rpc
            .call(self.contract_address, data)
            .await
            .map_err(|e| ClientError::network("call", e))?;

        let scores =
            abi::decode_view_review(&raw).map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(%course_id, scores = scores.len(), "Review fetched");
        Ok(ReviewData { scores })
    }

    /// Shared submission pipeline for state-changing calls.
    ///
    /// estimate → price → nonce → sign → broadcast, each step feeding the
    /// next. Any failure aborts the whole operation before a later step
    /// runs, so a failed estimate or price fetch never produces a signed
    /// payload, let alone a broadcast.
    async fn submit(&self, method: &'static str, data: Bytes) -> ClientResult<TxOutcome> {
        let from = self.wallet.address();

        let gas_limit = self
            .rpc
            .estimate_gas(from, self.contract_address, data.clone())
            .await
            .map_err(|e| match e {
                RpcFailure::Rejected(reason) => ClientError::GasEstimation { reason },
                other => ClientError::network("estimate_gas", other),
            })?;

        let gas_price = match self.fixed_gas_price {
            Some(price) => price,
            None => self
                .rpc
                .gas_price()
                .await
                .map_err(|e| ClientError::network("gas_price", e))?,
        };

        let nonce = self
            .rpc
            .transaction_count(from)
            .await
            .map_err(|e| ClientError::network("transaction_count", e))?;

        let request = TransactionRequest::default()
            .with_from(from)
            .with_to(self.contract_address)
            .with_input(data)
            .with_gas_limit(gas_limit)
            .with_gas_price(gas_price)
            .with_nonce(nonce)
            .with_chain_id(self.wallet.chain_id());

        let raw = self.wallet.sign_request(request).await?;

        let tx_hash = self
            .rpc
            .send_raw_transaction(raw)
            .await
            .map_err(|e| match e {
                RpcFailure::Rejected(reason) if is_revert(&reason) => {
                    ClientError::ContractRevert { reason }
                }
                RpcFailure::Rejected(reason) => ClientError::Submission(reason),
                other => ClientError::network("send_raw_transaction", other),
            })?;

        tracing::info!(
            method,
            %tx_hash,
            gas_limit,
            gas_price,
            nonce,
            "Transaction submitted"
        );

        Ok(TxOutcome {
            tx_hash,
            gas_limit,
            gas_price,
            nonce,
        })
    }
}

impl std::fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("contract_address", &self.contract_address)
            .field("sender", &self.wallet.address())
            .field("fixed_gas_price", &self.fixed_gas_price)
            .finish()
    }
}

/// Node error payloads carry the contract's revert reason when execution
/// failed; anything else is a plain rejection of the transaction itself.
fn is_revert(reason: &str) -> bool {
    reason.to_ascii_lowercase().contains("revert")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_detection() {
        assert!(is_revert("execution reverted: too many ratings"));
        assert!(is_revert("VM Exception: revert"));
        assert!(!is_revert("nonce too low"));
        assert!(!is_revert("insufficient funds for gas * price + value"));
    }
}
