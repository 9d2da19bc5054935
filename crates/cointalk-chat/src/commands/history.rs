use cointalk_core::{GatewayClient, HttpAuth};
use serde_json::Value;

use super::{field, scalar_to_string};
use crate::service::ChatOutcome;

/// At most this many entries are rendered into the reply.
const MAX_ENTRIES: usize = 5;

const NO_TRANSACTIONS: &str = "No transactions found.";

pub(super) async fn run(gateway: &GatewayClient, auth: &HttpAuth) -> ChatOutcome {
    let transactions = match gateway.get("/transactions", auth).await {
        Ok(response) => response.body,
        Err(error) => {
            return ChatOutcome::reply(format!("Could not fetch your transactions: {error}"))
        }
    };

    let Some(entries) = transactions.as_array() else {
        return ChatOutcome::reply(format!("Transactions: {transactions}"));
    };
    if entries.is_empty() {
        return ChatOutcome::reply(NO_TRANSACTIONS);
    }

    let fragments: Vec<String> = entries.iter().take(MAX_ENTRIES).map(render_entry).collect();
    ChatOutcome::reply(format!("Recent transactions: {}", fragments.join(", ")))
}

/// `"{type} {amount} {symbol}"` with field-name synonyms; entries with no
/// recognizable field at all render raw.
fn render_entry(entry: &Value) -> String {
    let mut parts = Vec::new();
    if let Some(kind) = field(entry, &["type", "transactionType"]) {
        parts.push(scalar_to_string(kind));
    }
    if let Some(amount) = field(entry, &["amount", "value"]) {
        parts.push(scalar_to_string(amount));
    }
    if let Some(symbol) = field(entry, &["currencySymbol", "symbol", "currency"]) {
        parts.push(scalar_to_string(symbol));
    }

    if parts.is_empty() {
        entry.to_string()
    } else {
        parts.join(" ")
    }
}
