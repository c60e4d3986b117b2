//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0) and address/URL formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::ClientConfig;

/// A single semantic problem in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    InvalidRpcUrl(String),
    InvalidContractAddress(String),
    InvalidAccountAddress(String),
    ZeroTimeout,
    ZeroChainId,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidRpcUrl(url) => write!(f, "invalid rpc.url '{}'", url),
            ValidationError::InvalidContractAddress(addr) => {
                write!(f, "invalid contract.address '{}'", addr)
            }
            ValidationError::InvalidAccountAddress(addr) => {
                write!(f, "invalid account.address '{}'", addr)
            }
            ValidationError::ZeroTimeout => write!(f, "rpc.request_timeout_secs must be > 0"),
            ValidationError::ZeroChainId => write!(f, "rpc.chain_id must be > 0"),
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rpc.url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidRpcUrl(config.rpc.url.clone()));
    }

    if config.rpc.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.rpc.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }

    if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidContractAddress(
            config.contract.address.clone(),
        ));
    }

    if let Some(address) = &config.account.address {
        if address.parse::<Address>().is_err() {
            errors.push(ValidationError::InvalidAccountAddress(address.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
