//! Balance and price sources.
//!
//! The pipeline never talks to a source directly: callers fetch a fresh
//! balance list and price table, then hand both to the pipeline.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Result, WalletError};
use crate::models::{Balance, PriceTable};

/// Supplies the raw per-chain balances of a wallet.
pub trait BalanceSource {
    fn balances(&self) -> Result<Vec<Balance>>;
}

/// Supplies the current USD price table.
pub trait PriceSource {
    fn prices(&self) -> Result<PriceTable>;
}

/// Fixed in-memory balances and prices.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub balances: Vec<Balance>,
    pub prices: PriceTable,
}

impl StaticSource {
    pub fn new(balances: Vec<Balance>, prices: PriceTable) -> Self {
        Self { balances, prices }
    }
}

impl BalanceSource for StaticSource {
    fn balances(&self) -> Result<Vec<Balance>> {
        Ok(self.balances.clone())
    }
}

impl PriceSource for StaticSource {
    fn prices(&self) -> Result<PriceTable> {
        Ok(self.prices.clone())
    }
}

/// Reads balances and prices from two JSON files on every call.
///
/// The balance file holds an array of `{currency, amount, blockchain}`
/// objects; the price file holds a `{ "CUR": price }` map.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    balances_path: PathBuf,
    prices_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(balances_path: impl Into<PathBuf>, prices_path: impl Into<PathBuf>) -> Self {
        Self {
            balances_path: balances_path.into(),
            prices_path: prices_path.into(),
        }
    }
}

impl BalanceSource for JsonFileSource {
    fn balances(&self) -> Result<Vec<Balance>> {
        let balances: Vec<Balance> = read_json(&self.balances_path)?;
        info!(
            path = %self.balances_path.display(),
            count = balances.len(),
            "Loaded balances"
        );
        Ok(balances)
    }
}

impl PriceSource for JsonFileSource {
    fn prices(&self) -> Result<PriceTable> {
        let prices: PriceTable = read_json(&self.prices_path)?;
        info!(
            path = %self.prices_path.display(),
            count = prices.len(),
            "Loaded prices"
        );
        Ok(prices)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "Reading JSON source");
    let contents = std::fs::read_to_string(path).map_err(|source| WalletError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Blockchain;
    use rust_decimal_macros::dec;

    #[test]
    fn static_source_returns_independent_copies() {
        let source = StaticSource::new(
            vec![Balance::new("ATOM", dec!(1), Blockchain::Osmosis)],
            [("ATOM", dec!(2))].into_iter().collect(),
        );
        let mut first = source.balances().unwrap();
        first[0].amount = dec!(99);

        assert_eq!(source.balances().unwrap()[0].amount, dec!(1));
        assert_eq!(source.prices().unwrap().price_of("ATOM"), dec!(2));
    }

    #[test]
    fn missing_file_reports_path() {
        let source = JsonFileSource::new("/nonexistent/balances.json", "/nonexistent/prices.json");
        let err = source.balances().unwrap_err();
        assert!(matches!(err, WalletError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/balances.json"));
    }
}
