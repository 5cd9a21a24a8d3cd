//! Display priority of each blockchain.

use crate::models::Blockchain;

/// Priority given to chains outside the display table. Balances at this
/// priority are never shown.
pub const UNRECOGNIZED_PRIORITY: i32 = -99;

/// Returns the display rank of `blockchain`; higher sorts first.
pub const fn priority(blockchain: &Blockchain) -> i32 {
    match blockchain {
        Blockchain::Osmosis => 100,
        Blockchain::Ethereum => 50,
        Blockchain::Arbitrum => 30,
        Blockchain::Zilliqa => 20,
        Blockchain::Neo => 20,
        Blockchain::Other(_) => UNRECOGNIZED_PRIORITY,
    }
}

/// Whether balances on `blockchain` are eligible for display at all.
pub const fn is_recognized(blockchain: &Blockchain) -> bool {
    priority(blockchain) > UNRECOGNIZED_PRIORITY
}

impl Blockchain {
    /// Shorthand for [`priority`].
    pub const fn priority(&self) -> i32 {
        priority(self)
    }
}
