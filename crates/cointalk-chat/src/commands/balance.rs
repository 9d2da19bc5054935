use cointalk_core::{GatewayClient, HttpAuth};
use serde_json::Value;

use super::{field, scalar_to_string};
use crate::service::ChatOutcome;

/// Fetch the wallet summary and render it as one reply line.
pub(super) async fn run(gateway: &GatewayClient, auth: &HttpAuth) -> ChatOutcome {
    let summary = match gateway.get("/balance/summary", auth).await {
        Ok(response) => response.body,
        Err(error) => {
            return ChatOutcome::reply(format!("Could not fetch your balance: {error}"))
        }
    };

    let total = field(&summary, &["totalValueUsd", "totalValue"]).map(scalar_to_string);
    let entries = field(&summary, &["detailed", "positions"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut asset_parts = Vec::new();
    for entry in entries {
        let Some(symbol) = field(entry, &["symbol", "asset", "currency"]).and_then(Value::as_str)
        else {
            continue;
        };
        let Some(amount) = entry.get("amount") else {
            continue;
        };
        let mut piece = format!("{symbol}: {}", scalar_to_string(amount));
        if let Some(value) = field(entry, &["value", "currentValue"]) {
            piece.push_str(&format!(" (US$ {})", scalar_to_string(value)));
        }
        asset_parts.push(piece);
    }

    let mut summary_parts = Vec::new();
    if let Some(total) = total {
        summary_parts.push(format!("Total: US$ {total}"));
    }
    if !asset_parts.is_empty() {
        summary_parts.push(format!("Details: {}", asset_parts.join(", ")));
    }

    if summary_parts.is_empty() {
        // Unexpected payload shape: show it raw rather than hiding it.
        ChatOutcome::reply(format!("Balance: {summary}"))
    } else {
        ChatOutcome::reply(summary_parts.join(" | "))
    }
}
