//! Locale-lenient scalar normalization for chat-extracted tokens.

/// Parse a user-typed amount, accepting `.` or `,` as the decimal separator.
///
/// Malformed numeric text normalizes to `0.0` rather than failing; callers
/// cannot distinguish that from a genuinely typed zero. The leniency is
/// deliberate and matches the chat surface's forgiving contract.
pub fn normalize_amount(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Uppercase a currency/asset token. Absent tokens are the caller's problem;
/// each command supplies its own default.
pub fn normalize_symbol(token: &str) -> String {
    token.trim().to_ascii_uppercase()
}
