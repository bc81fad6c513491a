use rust_decimal::Decimal;

/// Decimal places used when rendering rupee amounts
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds an amount to display precision.
///
/// Aggregation everywhere in the crate happens at full `Decimal` precision;
/// this is the single place an amount is rounded, and it must only be called
/// at render time by the presentation adapters.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Formats an amount as a fixed two-decimal string (e.g. `"1234.50"`).
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.width$}", round_display(amount), width = DISPLAY_SCALE as usize)
}
