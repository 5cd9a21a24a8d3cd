//! Wallet balance view library.
//!
//! Derives a prioritized, priced, display-ready list of wallet balances from
//! a raw balance list and a USD price table, and projects it into row
//! view-models for a renderer.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod priority;
pub mod projection;
pub mod sources;
pub mod triangular;
pub mod view;

pub use error::{Result, WalletError};
pub use models::{Balance, Blockchain, DisplayBalance, PriceTable};
pub use pipeline::{MemoizedPipeline, derive, derive_with};
pub use priority::priority;
pub use projection::{EmptyState, Projection, RowKey, RowViewModel, project};
pub use view::{ViewProps, WalletView};
