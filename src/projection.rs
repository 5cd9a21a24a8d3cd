//! Row projection: turns derived balances into row view-models.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Blockchain, DisplayBalance};

/// Default text shown when there are no balances to list.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No wallet balances found";

/// Row identity: the `(blockchain, currency)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RowKey {
    pub blockchain: Blockchain,
    pub currency: String,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.blockchain, self.currency)
    }
}

/// Values a row renderer needs for one balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub key: RowKey,
    pub amount: Decimal,
    pub usd_value: Decimal,
    pub formatted_amount: String,
}

impl From<&DisplayBalance> for RowViewModel {
    fn from(balance: &DisplayBalance) -> Self {
        Self {
            key: RowKey {
                blockchain: balance.blockchain.clone(),
                currency: balance.currency.clone(),
            },
            amount: balance.amount,
            usd_value: balance.usd_value,
            formatted_amount: balance.formatted_amount.clone(),
        }
    }
}

/// Marker rendered in place of rows when nothing is displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

/// Output of [`project`]: either rows or the empty-state marker, never an
/// empty list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Projection {
    Rows(Vec<RowViewModel>),
    Empty(EmptyState),
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Projection::Empty(_))
    }

    /// Rows in display order; empty for the empty state.
    pub fn rows(&self) -> &[RowViewModel] {
        match self {
            Projection::Rows(rows) => rows,
            Projection::Empty(_) => &[],
        }
    }

    /// Sum of the USD value of every row, saturating at `Decimal::MAX`.
    pub fn total_usd_value(&self) -> Decimal {
        self.rows()
            .iter()
            .try_fold(Decimal::ZERO, |total, row| total.checked_add(row.usd_value))
            .unwrap_or(Decimal::MAX)
    }

    /// Keys that appear on more than one row, in first-repeat order.
    ///
    /// Duplicates are passed through by [`project`]; this only reports them.
    pub fn duplicate_keys(&self) -> Vec<RowKey> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for row in self.rows() {
            if !seen.insert(&row.key) && reported.insert(&row.key) {
                duplicates.push(row.key.clone());
            }
        }
        duplicates
    }
}

/// Maps derived balances 1:1 to rows, or to the default empty state.
pub fn project(balances: &[DisplayBalance]) -> Projection {
    project_with(balances, EmptyState::default())
}

/// Like [`project`], with a caller-supplied empty state.
pub fn project_with(balances: &[DisplayBalance], empty: EmptyState) -> Projection {
    if balances.is_empty() {
        return Projection::Empty(empty);
    }
    Projection::Rows(balances.iter().map(RowViewModel::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Balance;
    use rust_decimal_macros::dec;

    fn display(currency: &str, amount: Decimal, chain: Blockchain, price: Decimal) -> DisplayBalance {
        DisplayBalance::from_balance(&Balance::new(currency, amount, chain), price)
    }

    #[test]
    fn empty_input_yields_empty_state() {
        let projection = project(&[]);
        assert_eq!(projection, Projection::Empty(EmptyState::default()));
        assert!(projection.rows().is_empty());
        assert_eq!(projection.total_usd_value(), Decimal::ZERO);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let balances = vec![
            display("SHIB", dec!(1), Blockchain::Ethereum, Decimal::MAX),
            display("PEPE", dec!(1), Blockchain::Ethereum, Decimal::MAX),
        ];
        assert_eq!(project(&balances).total_usd_value(), Decimal::MAX);
    }

    #[test]
    fn custom_empty_message() {
        let projection = project_with(
            &[],
            EmptyState {
                message: "Nothing here".to_string(),
            },
        );
        match projection {
            Projection::Empty(state) => assert_eq!(state.message, "Nothing here"),
            Projection::Rows(_) => panic!("expected empty state"),
        }
    }

    #[test]
    fn rows_keep_order_and_values() {
        let balances = vec![
            display("ATOM", dec!(10), Blockchain::Osmosis, dec!(2)),
            display("ZIL", dec!(5), Blockchain::Zilliqa, dec!(1)),
        ];
        let projection = project(&balances);
        let rows = projection.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key.to_string(), "Osmosis-ATOM");
        assert_eq!(rows[0].formatted_amount, "10.00");
        assert_eq!(rows[0].usd_value, dec!(20));
        assert_eq!(rows[1].key.to_string(), "Zilliqa-ZIL");
        assert_eq!(projection.total_usd_value(), dec!(25));
    }

    #[test]
    fn duplicate_keys_are_passed_through_and_reported() {
        let balances = vec![
            display("NEO", dec!(1), Blockchain::Neo, dec!(0)),
            display("NEO", dec!(2), Blockchain::Neo, dec!(0)),
            display("NEO", dec!(3), Blockchain::Neo, dec!(0)),
        ];
        let projection = project(&balances);

        assert_eq!(projection.rows().len(), 3);
        assert_eq!(
            projection.duplicate_keys(),
            vec![RowKey {
                blockchain: Blockchain::Neo,
                currency: "NEO".to_string(),
            }]
        );
    }

    #[test]
    fn same_currency_on_different_chains_is_not_a_duplicate() {
        let balances = vec![
            display("USDC", dec!(1), Blockchain::Ethereum, dec!(1)),
            display("USDC", dec!(1), Blockchain::Arbitrum, dec!(1)),
        ];
        assert!(project(&balances).duplicate_keys().is_empty());
    }
}
