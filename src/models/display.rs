//! Display-ready balance records produced by the pipeline.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use super::balance::{Balance, Blockchain};

/// A balance enriched with its formatted amount and USD value.
///
/// Built fresh on every pipeline run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBalance {
    pub currency: String,
    pub amount: Decimal,
    pub blockchain: Blockchain,
    /// `amount` with exactly two fractional digits.
    pub formatted_amount: String,
    /// `price * amount`, zero when the currency has no price and
    /// saturated at `Decimal::MAX`/`Decimal::MIN` when the product overflows.
    pub usd_value: Decimal,
}

impl DisplayBalance {
    /// Enriches `balance` with the given unit price.
    pub fn from_balance(balance: &Balance, price: Decimal) -> Self {
        Self {
            currency: balance.currency.clone(),
            amount: balance.amount,
            blockchain: balance.blockchain.clone(),
            formatted_amount: format_amount(balance.amount),
            usd_value: usd_value(price, balance.amount),
        }
    }
}

/// `price * amount`, saturating instead of panicking on overflow.
pub fn usd_value(price: Decimal, amount: Decimal) -> Decimal {
    price.checked_mul(amount).unwrap_or_else(|| {
        debug!(%price, %amount, "USD value overflowed, saturating");
        if price.is_sign_negative() == amount.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Formats `amount` to two decimal places, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc().abs();
    // |fraction| < 1 with at most two places, so the product is exact.
    let cents = ((rounded - rounded.trunc()).abs() * Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{whole}.{cents:02}")
}
