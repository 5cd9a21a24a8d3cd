//! Raw balance models as supplied by a balance source.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Blockchain a balance is held on.
///
/// Names the display table knows about get their own variant; anything else
/// is kept verbatim in [`Blockchain::Other`] instead of failing to parse.
///
/// Build values from names with `From<&str>`/`From<String>`. Constructing
/// `Other("Osmosis")` directly bypasses that mapping and yields an
/// unrecognized chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Other(String),
}

impl Blockchain {
    /// Returns the wire name of the chain.
    pub fn as_str(&self) -> &str {
        match self {
            Blockchain::Osmosis => "Osmosis",
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Arbitrum => "Arbitrum",
            Blockchain::Zilliqa => "Zilliqa",
            Blockchain::Neo => "Neo",
            Blockchain::Other(name) => name,
        }
    }
}

impl From<&str> for Blockchain {
    fn from(name: &str) -> Self {
        match name {
            "Osmosis" => Blockchain::Osmosis,
            "Ethereum" => Blockchain::Ethereum,
            "Arbitrum" => Blockchain::Arbitrum,
            "Zilliqa" => Blockchain::Zilliqa,
            "Neo" => Blockchain::Neo,
            other => Blockchain::Other(other.to_string()),
        }
    }
}

impl From<String> for Blockchain {
    fn from(name: String) -> Self {
        match Blockchain::from(name.as_str()) {
            Blockchain::Other(_) => Blockchain::Other(name),
            known => known,
        }
    }
}

impl From<Blockchain> for String {
    fn from(chain: Blockchain) -> Self {
        match chain {
            Blockchain::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single currency balance on one blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Balance {
    /// Currency code (e.g., "ATOM", "ETH").
    pub currency: String,
    /// Held amount. Sources may report zero or negative values.
    pub amount: Decimal,
    pub blockchain: Blockchain,
}

impl Balance {
    pub fn new(currency: impl Into<String>, amount: Decimal, blockchain: Blockchain) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain,
        }
    }
}
