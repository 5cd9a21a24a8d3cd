//! Data models for wallet balances, prices, and their display form.

pub mod balance;
pub mod display;
pub mod price;

pub use balance::{Balance, Blockchain};
pub use display::DisplayBalance;
pub use price::PriceTable;
