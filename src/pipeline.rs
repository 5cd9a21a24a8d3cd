//! Balance pipeline: filter, enrich, and order raw balances for display.
//!
//! [`derive`] is a pure function of `(balances, prices)`. [`MemoizedPipeline`]
//! wraps it with a single-entry cache keyed on exactly those two inputs, so
//! callers can invoke it on every render and only pay for a recomputation
//! when the data actually changed.

use std::cmp::Reverse;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::models::{Balance, DisplayBalance, PriceTable};
use crate::priority::is_recognized;

/// Whether `balance` belongs in the display list.
///
/// Requires both a recognized chain and a strictly positive amount.
pub fn is_displayable(balance: &Balance) -> bool {
    is_recognized(&balance.blockchain) && balance.amount > Decimal::ZERO
}

/// Derives the ordered display list from raw balances and a price table.
///
/// Balances on unrecognized chains or with a non-positive amount are dropped
/// before any price lookup. Survivors are priced (missing prices count as
/// zero) and ordered by descending chain priority. The sort is stable, so
/// balances sharing a priority keep their input order.
pub fn derive(balances: &[Balance], prices: &PriceTable) -> Vec<DisplayBalance> {
    derive_with(balances, |currency| prices.get(currency))
}

/// [`derive`] with prices supplied by `price_of`.
///
/// `price_of` is only called for balances that pass [`is_displayable`].
pub fn derive_with<F>(balances: &[Balance], mut price_of: F) -> Vec<DisplayBalance>
where
    F: FnMut(&str) -> Option<Decimal>,
{
    let mut derived: Vec<DisplayBalance> = balances
        .iter()
        .filter(|balance| {
            let keep = is_displayable(balance);
            if !keep {
                trace!(
                    currency = %balance.currency,
                    blockchain = %balance.blockchain,
                    amount = %balance.amount,
                    recognized = is_recognized(&balance.blockchain),
                    "Dropping balance"
                );
            }
            keep
        })
        .map(|balance| {
            let price = price_of(&balance.currency).unwrap_or_else(|| {
                debug!(currency = %balance.currency, "No price listed, using zero");
                Decimal::ZERO
            });
            DisplayBalance::from_balance(balance, price)
        })
        .collect();

    // `sort_by_key` is a stable sort.
    derived.sort_by_key(|d| Reverse(d.blockchain.priority()));

    debug!(
        input = balances.len(),
        kept = derived.len(),
        "Derived display balances"
    );
    derived
}

/// Single-entry cache around [`derive`].
///
/// The cache key is the value of `(balances, prices)` and nothing else:
/// any change to either recomputes, and calling again with equal inputs
/// returns the cached list untouched.
#[derive(Debug, Default)]
pub struct MemoizedPipeline {
    key: Option<(Vec<Balance>, PriceTable)>,
    output: Vec<DisplayBalance>,
    recomputations: u64,
}

impl MemoizedPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the derived list for these inputs, recomputing only if they
    /// differ from the previous call.
    pub fn derive(&mut self, balances: &[Balance], prices: &PriceTable) -> &[DisplayBalance] {
        let fresh = match &self.key {
            Some((cached_balances, cached_prices)) => {
                cached_balances.as_slice() == balances && cached_prices == prices
            }
            None => false,
        };

        if fresh {
            trace!("Inputs unchanged, reusing derived balances");
        } else {
            self.output = derive(balances, prices);
            self.key = Some((balances.to_vec(), prices.clone()));
            self.recomputations += 1;
        }
        &self.output
    }

    /// Number of times [`derive`] has actually run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drops the cached result so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
