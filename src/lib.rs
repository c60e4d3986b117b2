//! Client library for an externally deployed course-evaluation contract.
//!
//! Exposes one operation per contract method — choose a course, enroll,
//! submit a review, view reviews — over a shared sign-and-send pipeline.
//! All durable logic (rating storage, access control, aggregation) lives in
//! the contract; this crate only encodes calls, signs state-changing ones
//! and decodes read results.

pub mod config;
pub mod contract;
pub mod observability;

pub use config::ClientConfig;
pub use contract::{ClientError, ClientResult, ContractClient, HttpRpc, ReviewData, TxOutcome, Wallet};
