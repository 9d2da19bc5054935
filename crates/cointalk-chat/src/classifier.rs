//! Lexical intent classification.
//!
//! The classifier is an ordered rule table: each rule is a predicate plus
//! extractor over the lower-cased, trimmed message, and the first matching
//! rule wins. The fixed priority (Balance, Deposit, Buy, Sell, History,
//! Help) resolves overlaps - a message that lexically matches both a
//! financial query and a generic help phrase classifies as the financial
//! query.
//!
//! Vocabulary is bilingual (English plus the Portuguese command words the
//! chat surface launched with).

use cointalk_core::normalize::{normalize_amount, normalize_symbol};

/// Classified purpose of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Balance,
    Deposit,
    Buy,
    Sell,
    History,
    Help,
    Unknown,
}

/// Classifier output, produced fresh per inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub intent: Intent,
    pub raw_text: String,
    /// Non-negative after normalization; malformed numerics become `0.0`.
    pub amount: Option<f64>,
    pub symbol: Option<String>,
    /// True when the amount is quoted in fiat rather than asset units.
    pub fiat_denominated: bool,
}

struct Extraction {
    intent: Intent,
    amount: Option<f64>,
    symbol: Option<String>,
    fiat_denominated: bool,
}

impl Extraction {
    fn bare(intent: Intent) -> Self {
        Self {
            intent,
            amount: None,
            symbol: None,
            fiat_denominated: false,
        }
    }
}

type Rule = fn(&str, &[&str]) -> Option<Extraction>;

/// Rules in priority order; the first match wins.
const RULES: &[Rule] = &[balance, deposit, buy, sell, history, help];

const BALANCE_WORDS: &[&str] = &["balance", "saldo"];
const BALANCE_PHRASES: &[&str] = &["how much do i have", "quanto tenho", "quanto eu tenho"];
const DEPOSIT_WORDS: &[&str] = &["deposit", "depositar"];
const BUY_WORDS: &[&str] = &["buy", "comprar", "compra"];
const SELL_WORDS: &[&str] = &["sell", "vender", "venda"];
const HISTORY_WORDS: &[&str] = &[
    "history",
    "transactions",
    "statement",
    "extrato",
    "historico",
    "histórico",
];
const HELP_WORDS: &[&str] = &["help", "commands", "ajuda", "comandos"];
const HELP_PHRASES: &[&str] = &["what can you do", "o que você pode fazer"];
const FIAT_CODES: &[&str] = &["usd", "brl", "eur"];
const CONNECTORS: &[&str] = &["of", "de"];

/// Classify a message into exactly one command.
pub fn classify(message: &str) -> ParsedCommand {
    let raw_text = message.trim().to_owned();
    let lowered = raw_text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    for rule in RULES {
        if let Some(extraction) = rule(&lowered, &tokens) {
            return ParsedCommand {
                intent: extraction.intent,
                raw_text,
                amount: extraction.amount,
                symbol: extraction.symbol,
                fiat_denominated: extraction.fiat_denominated,
            };
        }
    }

    ParsedCommand {
        intent: Intent::Unknown,
        raw_text,
        amount: None,
        symbol: None,
        fiat_denominated: false,
    }
}

fn balance(lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    if contains_word(tokens, BALANCE_WORDS) || contains_phrase(lowered, BALANCE_PHRASES) {
        return Some(Extraction::bare(Intent::Balance));
    }
    None
}

fn deposit(_lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    let at = word_position(tokens, DEPOSIT_WORDS)?;
    let amount_token = tokens.get(at + 1).filter(|t| looks_numeric(t))?;
    let currency = tokens
        .get(at + 2)
        .filter(|t| t.chars().all(|c| c.is_alphabetic()))
        .map(|t| normalize_symbol(t));

    Some(Extraction {
        intent: Intent::Deposit,
        amount: Some(normalize_amount(amount_token)),
        symbol: currency,
        fiat_denominated: true,
    })
}

fn buy(_lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    trade(tokens, BUY_WORDS, Intent::Buy)
}

fn sell(_lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    trade(tokens, SELL_WORDS, Intent::Sell)
}

/// Shared buy/sell extraction: `<verb> <amount> [<fiat-code>] ["of"|"de"]
/// [<asset>]`. A captured fiat code marks the order fiat-denominated; the
/// asset token, when present, is the trade target.
fn trade(tokens: &[&str], words: &[&str], intent: Intent) -> Option<Extraction> {
    let at = word_position(tokens, words)?;
    let amount_token = tokens.get(at + 1).filter(|t| looks_numeric(t))?;
    let amount = normalize_amount(amount_token);

    let mut rest = tokens[at + 2..]
        .iter()
        .copied()
        .filter(|t| !CONNECTORS.contains(t));

    let mut fiat_denominated = false;
    let mut symbol = None;
    if let Some(token) = rest.next() {
        if FIAT_CODES.contains(&trimmed(token)) {
            fiat_denominated = true;
            symbol = rest.next().map(symbol_token);
        } else {
            symbol = Some(symbol_token(token));
        }
    }

    Some(Extraction {
        intent,
        amount: Some(amount),
        symbol,
        fiat_denominated,
    })
}

fn history(_lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    if contains_word(tokens, HISTORY_WORDS) {
        return Some(Extraction::bare(Intent::History));
    }
    None
}

fn help(lowered: &str, tokens: &[&str]) -> Option<Extraction> {
    if contains_word(tokens, HELP_WORDS) || contains_phrase(lowered, HELP_PHRASES) {
        return Some(Extraction::bare(Intent::Help));
    }
    None
}

fn contains_word(tokens: &[&str], words: &[&str]) -> bool {
    word_position(tokens, words).is_some()
}

fn word_position(tokens: &[&str], words: &[&str]) -> Option<usize> {
    tokens
        .iter()
        .position(|token| words.contains(&trimmed(token)))
}

fn contains_phrase(lowered: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lowered.contains(phrase))
}

fn looks_numeric(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Strip surrounding punctuation before treating a token as a symbol.
fn symbol_token(token: &str) -> String {
    normalize_symbol(trimmed(token))
}

fn trimmed(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_queries_classify_as_balance() {
        assert_eq!(classify("What is my balance?").intent, Intent::Balance);
        assert_eq!(classify("qual meu saldo").intent, Intent::Balance);
        assert_eq!(classify("how much do I have").intent, Intent::Balance);
    }

    #[test]
    fn balance_outranks_help_when_both_match() {
        // "help" and "balance" both appear; priority keeps the financial query.
        let command = classify("help me check my balance");
        assert_eq!(command.intent, Intent::Balance);
    }

    #[test]
    fn priority_order_holds_for_every_adjacent_pair() {
        assert_eq!(classify("deposit 10 usd into my balance").intent, Intent::Balance);
        assert_eq!(classify("deposit 10 usd to buy 1 btc").intent, Intent::Deposit);
        assert_eq!(classify("buy 1 btc then sell 1 btc").intent, Intent::Buy);
        assert_eq!(classify("sell 1 btc and show history").intent, Intent::Sell);
        assert_eq!(classify("history help").intent, Intent::History);
    }

    #[test]
    fn deposit_extracts_amount_and_currency() {
        let command = classify("deposit 200 usd");
        assert_eq!(command.intent, Intent::Deposit);
        assert_eq!(command.amount, Some(200.0));
        assert_eq!(command.symbol.as_deref(), Some("USD"));
    }

    #[test]
    fn deposit_with_comma_decimal_and_no_currency() {
        let command = classify("depositar 200,50");
        assert_eq!(command.intent, Intent::Deposit);
        assert_eq!(command.amount, Some(200.5));
        assert_eq!(command.symbol, None);
    }

    #[test]
    fn deposit_without_amount_is_not_a_deposit() {
        assert_eq!(classify("deposit").intent, Intent::Unknown);
    }

    #[test]
    fn fiat_denominated_buy_captures_fiat_and_asset() {
        let command = classify("buy 100 usd de btc");
        assert_eq!(command.intent, Intent::Buy);
        assert_eq!(command.amount, Some(100.0));
        assert_eq!(command.symbol.as_deref(), Some("BTC"));
        assert!(command.fiat_denominated);
    }

    #[test]
    fn asset_denominated_buy_has_no_fiat_flag() {
        let command = classify("buy 0.01 btc");
        assert_eq!(command.intent, Intent::Buy);
        assert_eq!(command.amount, Some(0.01));
        assert_eq!(command.symbol.as_deref(), Some("BTC"));
        assert!(!command.fiat_denominated);
    }

    #[test]
    fn buy_without_asset_leaves_symbol_empty() {
        let command = classify("comprar 50 usd");
        assert_eq!(command.intent, Intent::Buy);
        assert!(command.fiat_denominated);
        assert_eq!(command.symbol, None);
    }

    #[test]
    fn sell_mirrors_buy_extraction() {
        let command = classify("sell 100 usd of eth");
        assert_eq!(command.intent, Intent::Sell);
        assert_eq!(command.amount, Some(100.0));
        assert_eq!(command.symbol.as_deref(), Some("ETH"));
        assert!(command.fiat_denominated);

        let command = classify("vender 0.5 eth");
        assert_eq!(command.intent, Intent::Sell);
        assert!(!command.fiat_denominated);
    }

    #[test]
    fn history_and_help_words_classify() {
        assert_eq!(classify("show my transactions").intent, Intent::History);
        assert_eq!(classify("extrato").intent, Intent::History);
        assert_eq!(classify("help").intent, Intent::Help);
        assert_eq!(classify("what can you do?").intent, Intent::Help);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        let command = classify("xyz123");
        assert_eq!(command.intent, Intent::Unknown);
        assert_eq!(command.raw_text, "xyz123");
    }

    #[test]
    fn punctuation_around_tokens_is_tolerated() {
        assert_eq!(classify("Balance!").intent, Intent::Balance);
        let command = classify("buy 0.01 btc!");
        assert_eq!(command.symbol.as_deref(), Some("BTC"));
    }
}
