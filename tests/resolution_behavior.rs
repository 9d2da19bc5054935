//! Behavior-driven tests for currency resolution against the gateway.

use cointalk_core::{
    CurrencyResolver, GatewayClient, HttpAuth, HttpMethod, PriceSource, ResolveError,
};
use cointalk_tests::ScriptedHttpClient;

fn resolver_over(http: std::sync::Arc<ScriptedHttpClient>) -> CurrencyResolver {
    CurrencyResolver::new(GatewayClient::new("http://gateway.test", http))
}

#[tokio::test]
async fn stale_catalog_price_falls_back_to_ticker_value() {
    // Given: a catalog entry with a zero price and a live USDT-pair ticker
    let http = ScriptedHttpClient::new()
        .on(
            HttpMethod::Get,
            "/currency",
            200,
            r#"[{"id":"c-1","symbol":"BTC","currentPrice":0}]"#,
        )
        .on(
            HttpMethod::Get,
            "/crypto/ticker/BTCUSDT",
            200,
            r#"{"lastPrice":"123.45"}"#,
        )
        .arc();
    let resolver = resolver_over(http.clone());

    // When: the symbol resolves
    let resolved = resolver
        .resolve("BTC", &HttpAuth::None)
        .await
        .expect("resolution should succeed");

    // Then: the ticker price wins and is attributed to the fallback
    assert_eq!(resolved.quote.price, 123.45);
    assert_eq!(resolved.quote.source, PriceSource::TickerFallback);
}

#[tokio::test]
async fn ticker_sources_are_probed_in_fixed_order() {
    let http = ScriptedHttpClient::new()
        .on(HttpMethod::Get, "/currency", 200, r#"[{"id":"c-2","symbol":"XYZ"}]"#)
        .on(HttpMethod::Get, "/crypto/ticker/XYZ", 200, r#"{"price":7.5}"#)
        .arc();
    let resolver = resolver_over(http.clone());

    let resolved = resolver
        .resolve("XYZ", &HttpAuth::None)
        .await
        .expect("resolution should succeed");
    assert_eq!(resolved.quote.price, 7.5);

    // The stablecoin-quoted pair was tried first, then the bare symbol.
    let urls: Vec<String> = http.recorded().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            String::from("http://gateway.test/currency"),
            String::from("http://gateway.test/crypto/ticker/XYZUSDT"),
            String::from("http://gateway.test/crypto/ticker/XYZ"),
        ]
    );
}

#[tokio::test]
async fn unknown_symbol_is_a_not_found_error() {
    let http = ScriptedHttpClient::new()
        .on(
            HttpMethod::Get,
            "/currency",
            200,
            r#"[{"id":"c-1","symbol":"BTC","currentPrice":50000.0}]"#,
        )
        .arc();
    let resolver = resolver_over(http);

    let error = resolver
        .resolve("ZZZ", &HttpAuth::None)
        .await
        .expect_err("unknown symbol must fail");
    assert_eq!(
        error,
        ResolveError::CurrencyNotFound {
            symbol: String::from("ZZZ")
        }
    );
}

#[tokio::test]
async fn the_caller_credential_is_forwarded_on_every_resolution_call() {
    let http = ScriptedHttpClient::new()
        .on(HttpMethod::Get, "/currency", 200, r#"[{"id":"c-2","symbol":"XYZ"}]"#)
        .arc();
    let resolver = resolver_over(http.clone());

    let auth = HttpAuth::Forwarded(String::from("Bearer tok"));
    let _ = resolver.resolve("XYZ", &auth).await;

    let requests = http.recorded();
    assert!(!requests.is_empty());
    for request in requests {
        assert_eq!(
            request.headers.get("authorization").map(String::as_str),
            Some("Bearer tok"),
            "unauthenticated call to {}",
            request.url
        );
    }
}
