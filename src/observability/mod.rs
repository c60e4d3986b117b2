//! Observability: structured logging for the client.

pub mod logging;
