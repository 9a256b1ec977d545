//! Number formatting for card values.

#[cfg(test)]
#[path = "formatting_tests.rs"]
mod tests;

/// Formats a count with comma thousands separators, as en-US locales do.
///
/// # Examples
///
/// ```
/// use card_renderer::format_thousands;
///
/// assert_eq!(format_thousands(2845), "2,845");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}
