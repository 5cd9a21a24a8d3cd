//! Price table keyed by currency code.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// USD prices keyed by currency code, as supplied by a price source.
///
/// Lookups never fail: a currency without an entry is priced at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the price for `currency`.
    pub fn insert(&mut self, currency: impl Into<String>, price: Decimal) {
        self.prices.insert(currency.into(), price);
    }

    /// Returns the listed price, if any.
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Returns the price for `currency`, or zero when it is not listed.
    pub fn price_of(&self, currency: &str) -> Decimal {
        self.get(currency).unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_currency_prices_at_zero() {
        let prices: PriceTable = [("ATOM", dec!(2))].into_iter().collect();
        assert_eq!(prices.price_of("ATOM"), dec!(2));
        assert_eq!(prices.price_of("ETH"), Decimal::ZERO);
        assert_eq!(prices.get("ETH"), None);
    }

    #[test]
    fn deserialize_from_plain_map() {
        let json = r#"{"ATOM": 2.5, "ZIL": "0.02"}"#;
        let prices: PriceTable = serde_json::from_str(json).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.price_of("ATOM"), dec!(2.5));
        assert_eq!(prices.price_of("ZIL"), dec!(0.02));
    }

    #[test]
    fn insert_replaces_existing_price() {
        let mut prices = PriceTable::new();
        prices.insert("ETH", dec!(1800));
        prices.insert("ETH", dec!(1900));
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.price_of("ETH"), dec!(1900));
    }
}
