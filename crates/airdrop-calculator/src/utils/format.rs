/// Display formatting for token amounts and percentages
///
/// All engine arithmetic is real-valued; truncation to whole tokens happens
/// here and only here, using round-half-up.

/// Formats a token amount: round half-up to a whole number, then
/// thousands-separate with commas (e.g. `25000000.0` -> `"25,000,000"`).
pub fn format_tokens(amount: f64) -> String {
    let rounded = (amount + 0.5).floor() as i64;
    group_thousands(rounded)
}

/// Formats a percentage with a fixed number of decimals
/// (share text uses 1, aggregate display uses 2).
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
