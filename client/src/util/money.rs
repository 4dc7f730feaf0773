//! Decimal amount parsing and display in whole cents.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Parse a user-entered amount such as `12`, `12.5`, or `1,204.99` into cents.
///
/// # Errors
///
/// Returns a message suitable for the form when the input is empty, negative,
/// has more than two fractional digits, or overflows.
pub fn parse_amount_cents(raw: &str) -> Result<i64, &'static str> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err("Enter an amount.");
    }
    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
        return Err("Amount must be a positive number.");
    }
    if frac.len() > 2 {
        return Err("Amount can have at most two decimals.");
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| "Amount is too large.")? };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| "Amount must be a positive number.")? * 10,
        _ => frac.parse().map_err(|_| "Amount must be a positive number.")?,
    };
    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .ok_or("Amount is too large.")?;
    if cents == 0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(cents)
}

/// Render cents as `1234.50`, with a leading `-` for negatives.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
