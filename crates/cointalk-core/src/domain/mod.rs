mod models;

pub use models::{CurrencyRecord, DepositEvent, PriceQuote, PriceSource, DEPOSIT_METHOD};
