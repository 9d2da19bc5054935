//! Service lifecycle and the single inbound operation.

use std::sync::Arc;

use cointalk_core::{
    CurrencyResolver, DepositEvent, GatewayClient, HttpAuth, HttpClient,
};
use serde::Serialize;

use crate::classifier;
use crate::commands::{self, CommandContext};
use crate::config::ServiceConfig;
use crate::queue::{self, DepositPublisher};

/// Result of one inbound message: the reply is always present; `published`
/// and `event` are populated only by the deposit path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOutcome {
    pub reply: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<DepositEvent>,
}

impl ChatOutcome {
    pub(crate) fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            published: false,
            event: None,
        }
    }
}

/// The conversational front-end: classifies inbound messages and
/// orchestrates their execution against the gateway.
///
/// The deposit channel is owned here and injected into both sides at
/// construction time: the sender into the command executors, the receiver
/// into the background worker.
pub struct ChatService {
    gateway: GatewayClient,
    resolver: CurrencyResolver,
    deposits: DepositPublisher,
}

impl ChatService {
    /// Assemble a service over an existing gateway client and deposit
    /// publisher. The matching receiver must be driven by
    /// [`queue::run_worker`]; [`ChatService::spawn`] wires both for you.
    pub fn new(gateway: GatewayClient, deposits: DepositPublisher) -> Self {
        let resolver = CurrencyResolver::new(gateway.clone());
        Self {
            gateway,
            resolver,
            deposits,
        }
    }

    /// Build the full service: gateway client over the given transport,
    /// deposit channel, and a spawned worker task draining it.
    ///
    /// The worker runs until the service (the last sender) is dropped.
    pub fn spawn(config: &ServiceConfig, http: Arc<dyn HttpClient>) -> Self {
        let gateway = GatewayClient::new(config.gateway_base.clone(), http);
        let (deposits, receiver) = queue::deposit_channel();
        tokio::spawn(queue::run_worker(receiver, gateway.clone()));
        tracing::info!(gateway = %gateway.base(), "chat service started");
        Self::new(gateway, deposits)
    }

    /// Handle one inbound message. Always answers with a reply; downstream
    /// failures are rendered into text, never propagated.
    pub async fn submit_message(&self, message: &str, credential: Option<&str>) -> ChatOutcome {
        let auth = HttpAuth::from_credential(credential);
        let command = classifier::classify(message);
        tracing::debug!(intent = ?command.intent, "classified inbound message");

        commands::dispatch(
            &command,
            CommandContext {
                gateway: &self.gateway,
                resolver: &self.resolver,
                deposits: &self.deposits,
            },
            &auth,
        )
        .await
    }
}
