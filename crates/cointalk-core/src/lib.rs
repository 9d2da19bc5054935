//! # Cointalk Core
//!
//! Transport and resolution core for the cointalk conversational trading
//! front-end.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (CurrencyRecord, PriceQuote, DepositEvent) |
//! | [`gateway`] | Generic authenticated gateway invoker |
//! | [`http_client`] | HTTP client abstraction (reqwest/noop) |
//! | [`normalize`] | Locale-lenient amount and symbol normalization |
//! | [`resolver`] | Currency lookup with ticker price fallback |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cointalk_core::{CurrencyResolver, GatewayClient, HttpAuth, ReqwestHttpClient};
//!
//! let gateway = GatewayClient::new("http://localhost:5102", Arc::new(ReqwestHttpClient::new()));
//! let resolver = CurrencyResolver::new(gateway.clone());
//! let auth = HttpAuth::from_credential(Some("Bearer token"));
//! let resolved = resolver.resolve("BTC", &auth).await?;
//! ```
//!
//! ## Error Handling
//!
//! Gateway calls fail with a structured [`GatewayError`] (transport vs
//! status, with the response body when the gateway sent one). Resolution
//! fails with [`ResolveError`] only for a missing catalog or an unknown
//! symbol; an undeterminable price is a zero [`PriceQuote`] the caller must
//! check, not an error.

pub mod domain;
pub mod gateway;
pub mod http_client;
pub mod normalize;
pub mod resolver;

pub use domain::{CurrencyRecord, DepositEvent, PriceQuote, PriceSource, DEPOSIT_METHOD};
pub use gateway::{GatewayClient, GatewayError, GatewayErrorKind, GatewayResponse};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use normalize::{normalize_amount, normalize_symbol};
pub use resolver::{CurrencyResolver, ResolveError, ResolvedCurrency};
