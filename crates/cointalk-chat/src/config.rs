//! Environment-sourced service configuration.

use std::env;

/// Gateway address used when `GATEWAY_BASE` is unset.
pub const DEFAULT_GATEWAY_BASE: &str = "http://localhost:5102";

const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5294";

/// Runtime configuration for a chat service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base address of the trading/wallet gateway.
    pub gateway_base: String,
    /// Origins the embedding HTTP server should allow to call the chat
    /// endpoint directly: the frontend and the gateway. The server wiring
    /// itself lives outside this crate.
    pub allowed_origins: Vec<String>,
}

impl ServiceConfig {
    pub fn new(gateway_base: impl Into<String>) -> Self {
        let gateway_base = gateway_base.into();
        Self {
            allowed_origins: vec![
                DEFAULT_FRONTEND_ORIGIN.to_owned(),
                gateway_base.clone(),
            ],
            gateway_base,
        }
    }

    /// Read configuration from the environment: `GATEWAY_BASE`,
    /// `FRONTEND_ORIGIN`, `GATEWAY_ORIGIN`, each with a local-dev default.
    pub fn from_env() -> Self {
        let gateway_base =
            env::var("GATEWAY_BASE").unwrap_or_else(|_| DEFAULT_GATEWAY_BASE.to_owned());
        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_owned());
        let gateway_origin =
            env::var("GATEWAY_ORIGIN").unwrap_or_else(|_| DEFAULT_GATEWAY_BASE.to_owned());

        Self {
            gateway_base,
            allowed_origins: vec![frontend_origin, gateway_origin],
        }
    }
}
