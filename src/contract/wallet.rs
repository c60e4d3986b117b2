//! Wallet management and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables or an explicit
//!   hex string handed to the constructor
//! - Keys are never logged or serialized
//! - `Debug` output shows the derived address, never key material

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;

use crate::contract::types::{ClientError, ClientResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "TEACHEVAL_PRIVATE_KEY";

/// Credentials holder: the signing key and the chain it signs for.
///
/// Holds no nonce state; the account nonce is fetched from the provider per
/// submission, so concurrent callers race at the network's ordering layer
/// rather than inside this process.
#[derive(Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    ///
    /// # Security
    /// The private key is parsed and stored in memory only. It is never
    /// logged.
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> ClientResult<Self> {
        // Strip 0x prefix if present
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ClientError::Signing(format!("invalid private key format: {}", e)))?;

        tracing::info!(
            address = %signer.address(),
            chain_id = chain_id,
            "Wallet initialized"
        );

        Ok(Self { signer, chain_id })
    }

    /// Load the wallet from the `TEACHEVAL_PRIVATE_KEY` environment variable.
    pub fn from_env(chain_id: u64) -> ClientResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            ClientError::Signing(format!(
                "environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key, chain_id)
    }

    /// Get the account address derived from the key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet signs for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign an assembled transaction request into a raw EIP-2718 payload
    /// ready for broadcast.
    ///
    /// The request must be complete (to, data, gas, gas price, nonce, chain
    /// id); a request the signer cannot complete is a signing failure.
    pub async fn sign_request(&self, request: TransactionRequest) -> ClientResult<Vec<u8>> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = request
            .build(&wallet)
            .await
            .map_err(|e| ClientError::Signing(e.to_string()))?;
        Ok(envelope.encoded_2718())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.signer.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
