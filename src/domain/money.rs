/// Amounts are plain floating point magnitudes; the sign lives in the
/// transaction kind, never in the value.
pub type Amount = f64;

/// Format an amount with two decimals for display.
/// Example: 54.234 -> "54.23", -12.5 -> "-12.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}
