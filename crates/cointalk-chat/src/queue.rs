//! Deposit event queue and its single background consumer.
//!
//! The channel is owned by the service lifecycle: [`deposit_channel`] is
//! called once at startup, the sender half goes to the request-handling
//! path and the receiver half to the worker task. There is no global
//! queue state.
//!
//! Delivery semantics are deliberately weak: unbounded FIFO, no
//! persistence, no retry. A restart drops pending events, a failed replay
//! is logged and dropped. Combined with the synchronous best-effort call
//! the deposit executor also makes, each deposit is at-most-once per path
//! and may reach the gateway twice; deduplication is the gateway's job via
//! the event's reference id.

use cointalk_core::{DepositEvent, GatewayClient};
use tokio::sync::mpsc;

use crate::commands::deposit;

/// Sending half of the deposit queue, held by the request-handling path.
#[derive(Clone)]
pub struct DepositPublisher {
    tx: mpsc::UnboundedSender<DepositEvent>,
}

/// Receiving half, drained by exactly one [`run_worker`] task.
pub type DepositReceiver = mpsc::UnboundedReceiver<DepositEvent>;

/// Open the deposit channel. Call once at service startup.
pub fn deposit_channel() -> (DepositPublisher, DepositReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DepositPublisher { tx }, rx)
}

impl DepositPublisher {
    /// Enqueue an event for background processing.
    ///
    /// Never blocks and always succeeds locally. The return value reports
    /// whether the event was published to an external broker - under
    /// current behavior that is permanently `false`; events are only ever
    /// queued in memory. (Whether a real broker integration was intended
    /// is an open question; see DESIGN.md.)
    pub fn publish(&self, event: DepositEvent) -> bool {
        let _ = self.tx.send(event);
        false
    }
}

/// Drain the queue one event at a time, replaying each deposit against the
/// gateway with the credential captured at enqueue time.
///
/// Runs until every sender is dropped. Failures are logged and the event
/// is dropped - no retry, no dead-letter store.
pub async fn run_worker(mut events: DepositReceiver, gateway: GatewayClient) {
    while let Some(event) = events.recv().await {
        tracing::debug!(
            reference_id = %event.reference_id,
            amount = event.amount,
            currency = %event.currency,
            "processing queued deposit event"
        );
        match deposit::submit(&gateway, &event, &event.auth).await {
            Ok(response) => tracing::debug!(
                reference_id = %event.reference_id,
                status = response.status,
                "queued deposit processed via gateway"
            ),
            Err(error) => tracing::warn!(
                reference_id = %event.reference_id,
                %error,
                "queued deposit failed; event dropped"
            ),
        }
    }
}
