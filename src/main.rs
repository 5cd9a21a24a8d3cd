use tracing::info;
use tracing_subscriber::EnvFilter;

use walletview::WalletError;
use walletview::config::fetch_config;
use walletview::projection::Projection;
use walletview::sources::{BalanceSource, JsonFileSource, PriceSource};
use walletview::view::{ViewProps, WalletView};

fn main() -> Result<(), WalletError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_config = fetch_config()?;

    let source = JsonFileSource::new(
        app_config.sources.balances_path,
        app_config.sources.prices_path,
    );
    let balances = source.balances()?;
    let prices = source.prices()?;

    let mut view = WalletView::new(ViewProps {
        title: app_config.view.title,
        empty_message: app_config.view.empty_message,
    });

    if let Some(title) = view.title() {
        println!("{title}");
    }

    match view.render(&balances, &prices) {
        Projection::Empty(state) => println!("{}", state.message),
        projection @ Projection::Rows(_) => {
            for row in projection.rows() {
                println!(
                    "{:<24} {:>14} {:>14}",
                    row.key.to_string(),
                    row.formatted_amount,
                    row.usd_value.round_dp(2).to_string()
                );
            }
            let duplicates = projection.duplicate_keys();
            if !duplicates.is_empty() {
                info!(count = duplicates.len(), "Duplicate row keys in balances");
            }
            println!(
                "{:<24} {:>14} {:>14}",
                "total",
                "",
                projection.total_usd_value().round_dp(2).to_string()
            );
        }
    }

    Ok(())
}
