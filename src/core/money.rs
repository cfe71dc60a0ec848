//! Fixed-scale decimal arithmetic
//!
//! Balances and amounts are kept at exactly two fractional digits. Rounding is
//! half-up; for two scale-2 operands it never actually triggers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every balance and amount
pub const SCALE: u32 = 2;

/// Rounding applied when a value is brought to [`SCALE`]
///
/// Ledger values are non-negative, where away-from-zero is half-up.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Round `value` to [`SCALE`] places and pad it to exactly that many digits
pub fn quantize(value: Decimal) -> Decimal {
    let mut quantized = value.round_dp_with_strategy(SCALE, ROUNDING);
    quantized.rescale(SCALE);
    quantized
}

/// Quantize `value`, or `None` if it cannot be held at exactly [`SCALE`] places
///
/// A 96-bit decimal has no room for two fractional digits once the integer
/// part reaches 27-28 digits; `rescale` then keeps a lower scale.
pub fn checked_quantize(value: Decimal) -> Option<Decimal> {
    let quantized = quantize(value);
    (quantized.scale() == SCALE).then_some(quantized)
}

/// Whether `value` is unchanged by rounding to [`SCALE`] places
pub fn is_whole_cents(value: Decimal) -> bool {
    value.round_dp_with_strategy(SCALE, ROUNDING) == value
}
