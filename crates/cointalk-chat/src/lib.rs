//! # Cointalk Chat
//!
//! Conversational layer of the cointalk trading front-end: classifies
//! free-text commands, executes them against the gateway, and runs the
//! deposit event queue.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classifier`] | Ordered-rule intent classification |
//! | [`config`] | Environment-sourced service configuration |
//! | [`queue`] | Deposit event channel and background worker |
//! | [`service`] | `ChatService` lifecycle and `submit_message` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cointalk_chat::{ChatService, ServiceConfig};
//! use cointalk_core::ReqwestHttpClient;
//!
//! let service = ChatService::spawn(
//!     &ServiceConfig::from_env(),
//!     Arc::new(ReqwestHttpClient::new()),
//! );
//! let outcome = service.submit_message("deposit 200 USD", Some("Bearer tok")).await;
//! println!("{}", outcome.reply);
//! ```

pub mod classifier;
pub(crate) mod commands;
pub mod config;
pub mod queue;
pub mod service;

pub use classifier::{classify, Intent, ParsedCommand};
pub use config::{ServiceConfig, DEFAULT_GATEWAY_BASE};
pub use queue::{deposit_channel, run_worker, DepositPublisher, DepositReceiver};
pub use service::{ChatOutcome, ChatService};
