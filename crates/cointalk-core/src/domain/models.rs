use serde::Serialize;
use uuid::Uuid;

use crate::http_client::HttpAuth;

/// Read-only projection of one gateway catalog entry.
///
/// The id is opaque to this service; it is echoed back verbatim in order
/// bodies. Catalog state is never cached - a record is only as fresh as the
/// resolution call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyRecord {
    pub id: String,
    pub symbol: String,
    pub current_price: Option<f64>,
}

/// Where a resolved price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    Catalog,
    TickerFallback,
}

/// Ephemeral price resolution result, computed once per resolution call.
///
/// A price of `0.0` means "unavailable"; callers must check before using it
/// in arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: f64,
    pub source: PriceSource,
}

impl PriceQuote {
    pub fn is_usable(&self) -> bool {
        self.price > 0.0
    }
}

/// Method tag attached to every deposit enacted through the chat surface.
pub const DEPOSIT_METHOD: &str = "CHATBOT";

/// Deposit recorded by the chat surface, owned by the queue until the
/// background worker consumes it. Never persisted; lost on restart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositEvent {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub amount: f64,
    pub currency: String,
    pub method: &'static str,
    pub reference_id: Uuid,
    /// Credential replayed by the background worker; never serialized.
    #[serde(skip)]
    pub auth: HttpAuth,
}

impl DepositEvent {
    /// Build a deposit event with a freshly generated reference id.
    ///
    /// The reference id is the idempotency key shared by the synchronous
    /// gateway call and the queued replay; the gateway deduplicates, this
    /// service does not.
    pub fn new(amount: f64, currency: impl Into<String>, auth: HttpAuth) -> Self {
        Self {
            event_type: "wallet.deposit",
            amount,
            currency: currency.into(),
            method: DEPOSIT_METHOD,
            reference_id: Uuid::new_v4(),
            auth,
        }
    }
}
