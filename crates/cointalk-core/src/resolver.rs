//! Currency lookup and price resolution with ticker fallback.
//!
//! The catalog is authoritative when it carries a fresh price; newly listed
//! or illiquid assets often come back with a zero or missing price, so the
//! resolver falls back to live ticker lookups - the stablecoin-quoted pair
//! first, then the bare symbol - before giving up with a non-fatal zero.

use serde_json::Value;
use thiserror::Error;

use crate::domain::{CurrencyRecord, PriceQuote, PriceSource};
use crate::gateway::{GatewayClient, GatewayError};
use crate::http_client::HttpAuth;

/// Price-like fields probed on a ticker payload, in priority order.
const TICKER_PRICE_FIELDS: &[&str] = &["lastPrice", "price", "last", "close", "lastTradedPrice"];

/// Catalog fields probed for the listed price, in priority order.
const CATALOG_PRICE_FIELDS: &[&str] = &["currentPrice", "price", "lastPrice"];

/// Fatal resolution failures. A missing price is deliberately not one of
/// them: it resolves to a zero [`PriceQuote`] the caller must check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("currency catalog unavailable: {0}")]
    CatalogUnavailable(GatewayError),

    #[error("currency '{symbol}' was not found in the catalog")]
    CurrencyNotFound { symbol: String },
}

/// A resolved currency: the catalog record plus a usable-or-zero price.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCurrency {
    pub record: CurrencyRecord,
    pub quote: PriceQuote,
}

/// Resolves symbols against the gateway catalog with ticker fallback.
#[derive(Clone)]
pub struct CurrencyResolver {
    gateway: GatewayClient,
}

impl CurrencyResolver {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Resolve a symbol to a catalog record and a current price.
    ///
    /// # Errors
    ///
    /// [`ResolveError::CatalogUnavailable`] when the catalog fetch fails
    /// (not retried), [`ResolveError::CurrencyNotFound`] when the symbol is
    /// absent. A price that cannot be determined is NOT an error: the
    /// returned quote carries `price = 0.0` and callers must check
    /// [`PriceQuote::is_usable`] before doing arithmetic with it.
    pub async fn resolve(
        &self,
        symbol: &str,
        auth: &HttpAuth,
    ) -> Result<ResolvedCurrency, ResolveError> {
        let catalog = self
            .gateway
            .get("/currency", auth)
            .await
            .map_err(ResolveError::CatalogUnavailable)?;

        let record = find_catalog_entry(&catalog.body, symbol).ok_or_else(|| {
            ResolveError::CurrencyNotFound {
                symbol: symbol.to_owned(),
            }
        })?;

        if let Some(price) = record.current_price.filter(|p| *p > 0.0) {
            let quote = PriceQuote {
                symbol: record.symbol.clone(),
                price,
                source: PriceSource::Catalog,
            };
            return Ok(ResolvedCurrency { record, quote });
        }

        let price = self
            .ticker_fallback(&record.symbol, auth)
            .await
            .unwrap_or(0.0);
        let quote = PriceQuote {
            symbol: record.symbol.clone(),
            price,
            source: PriceSource::TickerFallback,
        };
        Ok(ResolvedCurrency { record, quote })
    }

    /// Probe ticker sources in fixed order; the first strictly positive
    /// price wins and the remaining candidates are skipped.
    async fn ticker_fallback(&self, symbol: &str, auth: &HttpAuth) -> Option<f64> {
        let pairs = [format!("{symbol}USDT"), symbol.to_owned()];
        for pair in pairs {
            let path = format!("/crypto/ticker/{}", urlencoding::encode(&pair));
            let Ok(response) = self.gateway.get(&path, auth).await else {
                continue;
            };
            if let Some(price) = extract_ticker_price(&response.body) {
                if price > 0.0 {
                    return Some(price);
                }
            }
        }
        None
    }
}

/// Case-insensitive linear scan over the catalog payload.
///
/// Tolerates the wrapper shape `{"value": [...]}` and Pascal-cased field
/// names, both of which the gateway has been observed to produce.
fn find_catalog_entry(catalog: &Value, symbol: &str) -> Option<CurrencyRecord> {
    let entries = match catalog {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(_) => catalog.get("value").and_then(Value::as_array)?.as_slice(),
        _ => return None,
    };

    entries.iter().find_map(|entry| {
        let entry_symbol = field(entry, &["symbol", "Symbol"])?.as_str()?;
        if !entry_symbol.eq_ignore_ascii_case(symbol) {
            return None;
        }

        let id = field(entry, &["id", "Id"]).map(scalar_to_string)?;
        let current_price = field(entry, CATALOG_PRICE_FIELDS).and_then(coerce_f64);

        Some(CurrencyRecord {
            id,
            symbol: entry_symbol.to_owned(),
            current_price,
        })
    })
}

/// Take the first *present* price-like field and coerce it; absent fields
/// fall through to the next name, a present-but-unusable value does not.
fn extract_ticker_price(body: &Value) -> Option<f64> {
    let raw = field(body, TICKER_PRICE_FIELDS)?;
    coerce_f64(raw)
}

fn field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| value.get(name))
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
