//! Display formatting for the metric boxes and the price card.

/// Group an integer's digits with comma separators.
pub fn thousands(value: u64) -> String {
    group_integer_digits(&value.to_string())
}

/// Format a currency amount to two decimals with comma separators,
/// e.g. `1234567.8` -> `"1,234,567.80"`.
pub fn currency(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .expect("two-decimal format always contains a point");

    let negative = integer_part.starts_with('-');
    let digits = integer_part.trim_start_matches('-');
    let grouped = group_integer_digits(digits);

    if negative {
        format!("-{grouped}.{decimal_part}")
    } else {
        format!("{grouped}.{decimal_part}")
    }
}

fn group_integer_digits(digits: &str) -> String {
    let reversed = digits.chars().rev().collect::<String>();
    let grouped = reversed
        .as_bytes()
        .chunks(3)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");
    grouped.chars().rev().collect()
}
