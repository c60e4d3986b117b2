//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the contract client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Provider connection (endpoint, chain, timeouts).
    pub rpc: RpcConfig,

    /// Deployed contract to talk to.
    pub contract: ContractConfig,

    /// Sender account settings.
    pub account: AccountConfig,

    /// Gas pricing settings.
    pub gas: GasConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Provider connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// Per-round-trip timeout in seconds. Expiry surfaces as a network
    /// error to the caller.
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            chain_id: 1,
            request_timeout_secs: 10,
        }
    }
}

/// Deployed contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the course-evaluation contract.
    pub address: String,
}

/// Sender account configuration.
///
/// The private key itself never appears in the file; it is read from the
/// environment. The address here, when present, is cross-checked against
/// the one the key derives to at startup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AccountConfig {
    /// Expected sender address.
    pub address: Option<String>,
}

/// Gas pricing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GasConfig {
    /// Fixed gas price in wei. When unset, the current price is fetched
    /// from the provider per submission.
    pub fixed_gas_price_wei: Option<u128>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.rpc.url, "http://localhost:8545");
        assert_eq!(config.rpc.chain_id, 1);
        assert_eq!(config.rpc.request_timeout_secs, 10);
        assert!(config.gas.fixed_gas_price_wei.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_minimal_file_fills_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.contract.address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        assert_eq!(config.rpc.chain_id, 1);
        assert!(config.account.address.is_none());
    }

    #[test]
    fn test_full_file_parses() {
        let config: ClientConfig = toml::from_str(
            r#"
            [rpc]
            url = "https://mainnet.example/v3/key"
            chain_id = 1
            request_timeout_secs = 5

            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"

            [account]
            address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"

            [gas]
            fixed_gas_price_wei = 50

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.rpc.request_timeout_secs, 5);
        assert_eq!(config.gas.fixed_gas_price_wei, Some(50));
        assert_eq!(config.observability.log_level, "debug");
    }
}
