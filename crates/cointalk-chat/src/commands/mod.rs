//! One executor per intent.
//!
//! Executors are the only place downstream failures surface: every gateway
//! or resolution error is converted into a descriptive reply here, so
//! [`crate::service::ChatService::submit_message`] always answers with text
//! and never propagates an error to the inbound caller.

pub(crate) mod balance;
pub(crate) mod deposit;
pub(crate) mod history;
pub(crate) mod trade;

use cointalk_core::{CurrencyResolver, GatewayClient, HttpAuth};
use serde_json::Value;

use crate::classifier::{Intent, ParsedCommand};
use crate::queue::DepositPublisher;
use crate::service::ChatOutcome;

pub(crate) const LOGIN_PROMPT: &str =
    "I need your authentication token for that. Please log in and try again.";

const HELP_TEXT: &str = "I can handle these commands:\n\
    - 'balance' (or 'qual meu saldo') to see your wallet\n\
    - 'deposit 200 USD' to deposit fiat\n\
    - 'buy 100 USD of BTC' or 'buy 0.01 BTC' to buy\n\
    - 'sell 100 USD of BTC' or 'sell 0.01 BTC' to sell\n\
    - 'history' to list your latest transactions";

const FALLBACK_TEXT: &str = "Sorry, I did not understand. Try 'balance', \
    'deposit 200 USD', 'buy 100 USD of BTC', 'sell 0.01 BTC', or 'history'. \
    Say 'help' for the full list.";

/// Everything an executor may need, borrowed from the service.
pub(crate) struct CommandContext<'a> {
    pub gateway: &'a GatewayClient,
    pub resolver: &'a CurrencyResolver,
    pub deposits: &'a DepositPublisher,
}

/// Route a classified command to exactly one executor.
///
/// Help and Unknown need no credential; every other intent short-circuits
/// with the login prompt before any gateway call is attempted.
pub(crate) async fn dispatch(
    command: &ParsedCommand,
    ctx: CommandContext<'_>,
    auth: &HttpAuth,
) -> ChatOutcome {
    match command.intent {
        Intent::Help => ChatOutcome::reply(HELP_TEXT),
        Intent::Unknown => ChatOutcome::reply(FALLBACK_TEXT),
        _ if !auth.is_present() => ChatOutcome::reply(LOGIN_PROMPT),
        Intent::Balance => balance::run(ctx.gateway, auth).await,
        Intent::Deposit => deposit::run(command, ctx.gateway, ctx.deposits, auth).await,
        Intent::Buy => trade::buy(command, ctx.gateway, ctx.resolver, auth).await,
        Intent::Sell => trade::sell(command, ctx.gateway, ctx.resolver, auth).await,
        Intent::History => history::run(ctx.gateway, auth).await,
    }
}

/// First present field among the accepted synonyms.
pub(crate) fn field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| value.get(name))
}

/// Render a scalar for reply text: strings lose their quotes, everything
/// else renders as compact JSON.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
