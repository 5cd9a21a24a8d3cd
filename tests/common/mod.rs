//! Shared test builders.

use rust_decimal::Decimal;
use walletview::{Balance, Blockchain, PriceTable};

/// Builds a balance from a chain name, parsed the way a source would.
pub fn balance(currency: &str, amount: Decimal, blockchain: &str) -> Balance {
    Balance::new(currency, amount, Blockchain::from(blockchain))
}

pub fn price_table(entries: &[(&str, Decimal)]) -> PriceTable {
    entries.iter().map(|(c, p)| (*c, *p)).collect()
}
