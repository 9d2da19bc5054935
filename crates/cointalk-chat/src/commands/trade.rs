use cointalk_core::{CurrencyResolver, GatewayClient, HttpAuth, ResolvedCurrency};
use serde_json::json;
use uuid::Uuid;

use crate::classifier::ParsedCommand;
use crate::service::ChatOutcome;

/// Asset traded when the message names none.
pub(crate) const DEFAULT_ASSET: &str = "BTC";

// The gateway infers the user's account and wallet from the forwarded
// credential; chat-sourced orders carry fixed nil placeholders.
const PLACEHOLDER_ACCOUNT_ID: &str = "00000000-0000-0000-0000-000000000000";
const PLACEHOLDER_WALLET_ID: &str = "00000000-0000-0000-0000-000000000000";

struct OrderSetup {
    resolved: ResolvedCurrency,
    amount: f64,
    reference_id: Uuid,
}

/// Resolve the trade target; a resolver error becomes the reply verbatim.
async fn prepare(
    command: &ParsedCommand,
    resolver: &CurrencyResolver,
    auth: &HttpAuth,
) -> Result<OrderSetup, String> {
    let symbol = command.symbol.as_deref().unwrap_or(DEFAULT_ASSET);
    let resolved = resolver
        .resolve(symbol, auth)
        .await
        .map_err(|error| error.to_string())?;

    Ok(OrderSetup {
        resolved,
        amount: command.amount.unwrap_or(0.0),
        reference_id: Uuid::new_v4(),
    })
}

fn price_unavailable(symbol: &str, wanted: &str) -> String {
    format!(
        "The current price for {symbol} is unavailable, so the {wanted} cannot \
         be computed. Try again later."
    )
}

pub(super) async fn buy(
    command: &ParsedCommand,
    gateway: &GatewayClient,
    resolver: &CurrencyResolver,
    auth: &HttpAuth,
) -> ChatOutcome {
    let setup = match prepare(command, resolver, auth).await {
        Ok(setup) => setup,
        Err(reply) => return ChatOutcome::reply(reply),
    };
    let quote = &setup.resolved.quote;

    // Fiat-denominated orders carry the fiat amount directly; asset-denominated
    // orders need a usable price to convert units into fiat.
    let fiat_amount = if command.fiat_denominated {
        setup.amount
    } else {
        if !quote.is_usable() {
            return ChatOutcome::reply(price_unavailable(&quote.symbol, "fiat value"));
        }
        setup.amount * quote.price
    };

    let body = json!({
        "idAccount": PLACEHOLDER_ACCOUNT_ID,
        "idWallet": PLACEHOLDER_WALLET_ID,
        "idCurrency": setup.resolved.record.id,
        "fiatAmount": fiat_amount,
        "fee": 0.0,
        "createNewLot": true,
        "referenceId": setup.reference_id,
    });

    match gateway.post_json("/transactions/buy", &body, auth).await {
        Ok(response) => ChatOutcome::reply(format!(
            "Buy order submitted: US$ {fiat_amount} of {}. Gateway: {}",
            quote.symbol, response.body
        )),
        Err(error) => ChatOutcome::reply(format!("Buy order failed: {error}")),
    }
}

pub(super) async fn sell(
    command: &ParsedCommand,
    gateway: &GatewayClient,
    resolver: &CurrencyResolver,
    auth: &HttpAuth,
) -> ChatOutcome {
    let setup = match prepare(command, resolver, auth).await {
        Ok(setup) => setup,
        Err(reply) => return ChatOutcome::reply(reply),
    };
    let quote = &setup.resolved.quote;

    // The mirror of buy: fiat-denominated sells convert fiat into asset
    // units, asset-denominated sells carry the quantity directly.
    let crypto_amount = if command.fiat_denominated {
        if !quote.is_usable() {
            return ChatOutcome::reply(price_unavailable(&quote.symbol, "asset quantity"));
        }
        setup.amount / quote.price
    } else {
        setup.amount
    };

    // No lot-selection hints: which lots to liquidate is the gateway's call.
    let body = json!({
        "idAccount": PLACEHOLDER_ACCOUNT_ID,
        "idWallet": PLACEHOLDER_WALLET_ID,
        "idCurrency": setup.resolved.record.id,
        "criptoAmount": crypto_amount,
        "fee": 0.0,
        "referenceId": setup.reference_id,
    });

    match gateway.post_json("/transactions/sell", &body, auth).await {
        Ok(response) => ChatOutcome::reply(format!(
            "Sell order submitted: {crypto_amount} {}. Gateway: {}",
            quote.symbol, response.body
        )),
        Err(error) => ChatOutcome::reply(format!("Sell order failed: {error}")),
    }
}
