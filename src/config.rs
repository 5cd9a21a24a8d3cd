//! Application configuration loaded from environment variables.
//!
//! - `WALLET_BALANCES_PATH` — balance file (default `balances.json`)
//! - `WALLET_PRICES_PATH` — price file (default `prices.json`)
//! - `WALLET_EMPTY_MESSAGE` — text shown when no balance is displayable
//! - `WALLET_TITLE` — optional heading printed above the rows
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use crate::projection::DEFAULT_EMPTY_MESSAGE;

const DEFAULT_BALANCES_PATH: &str = "balances.json";
const DEFAULT_PRICES_PATH: &str = "prices.json";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub sources: SourceConfig,
    pub view: ViewConfig,
}

/// Where the balance and price files live.
#[derive(Debug)]
pub struct SourceConfig {
    pub balances_path: PathBuf,
    pub prices_path: PathBuf,
}

/// Presentation settings. None of these feed the balance pipeline.
#[derive(Debug)]
pub struct ViewConfig {
    pub title: Option<String>,
    pub empty_message: String,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`WalletError::Config`](crate::WalletError::Config) if the
/// balance and price paths point at the same file.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let balances_path = PathBuf::from(
        non_empty_var("WALLET_BALANCES_PATH").unwrap_or_else(|| DEFAULT_BALANCES_PATH.to_string()),
    );
    let prices_path = PathBuf::from(
        non_empty_var("WALLET_PRICES_PATH").unwrap_or_else(|| DEFAULT_PRICES_PATH.to_string()),
    );
    let empty_message =
        non_empty_var("WALLET_EMPTY_MESSAGE").unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
    let title = non_empty_var("WALLET_TITLE");

    if balances_path == prices_path {
        return Err(crate::WalletError::Config(format!(
            "WALLET_BALANCES_PATH and WALLET_PRICES_PATH both point at {}",
            balances_path.display()
        )));
    }

    Ok(AppConfig {
        sources: SourceConfig {
            balances_path,
            prices_path,
        },
        view: ViewConfig {
            title,
            empty_message,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
