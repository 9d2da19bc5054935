use cointalk_core::{
    DepositEvent, GatewayClient, GatewayError, GatewayResponse, HttpAuth,
};
use serde_json::json;

use crate::classifier::ParsedCommand;
use crate::queue::DepositPublisher;
use crate::service::ChatOutcome;

/// Currency used when the message names none.
pub(crate) const DEFAULT_FIAT: &str = "USD";

/// Dual-path deposit: enqueue an event for the background worker, then
/// independently attempt the same gateway call synchronously. Both paths
/// are best-effort and share one reference id; the gateway deduplicates.
pub(super) async fn run(
    command: &ParsedCommand,
    gateway: &GatewayClient,
    deposits: &DepositPublisher,
    auth: &HttpAuth,
) -> ChatOutcome {
    let amount = command.amount.unwrap_or(0.0);
    let currency = command
        .symbol
        .clone()
        .unwrap_or_else(|| DEFAULT_FIAT.to_owned());

    let event = DepositEvent::new(amount, currency, auth.clone());
    let published = deposits.publish(event.clone());
    let queued = publish_label(published);

    let reply = match submit(gateway, &event, auth).await {
        Ok(response) => format!(
            "Deposit event {queued} and processed. Gateway: {}",
            response.body
        ),
        Err(error) => format!(
            "Deposit event {queued}. The immediate deposit call failed: {error} - \
             it will still be processed in the background."
        ),
    };

    ChatOutcome {
        reply,
        published,
        event: Some(event),
    }
}

fn publish_label(published: bool) -> &'static str {
    if published {
        "published via broker"
    } else {
        "queued locally"
    }
}

/// The deposit call both execution paths attempt.
///
/// Used by the synchronous path above and replayed verbatim by the
/// background worker; the shared reference id is the gateway's
/// deduplication handle.
pub(crate) async fn submit(
    gateway: &GatewayClient,
    event: &DepositEvent,
    auth: &HttpAuth,
) -> Result<GatewayResponse, GatewayError> {
    let body = json!({
        "currency": event.currency,
        "amount": event.amount,
        "method": event.method,
        "referenceId": event.reference_id,
        "source": "chatbot",
    });
    gateway
        .post_json("/transactions/deposit/fiat", &body, auth)
        .await
}
