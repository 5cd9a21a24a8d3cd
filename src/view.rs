//! Wallet view: presentation props plus a memoized balance pipeline.

use crate::models::{Balance, PriceTable};
use crate::pipeline::MemoizedPipeline;
use crate::projection::{DEFAULT_EMPTY_MESSAGE, EmptyState, Projection, project_with};

/// Display props that never influence which balances are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProps {
    /// Heading shown above the rows, if any.
    pub title: Option<String>,
    pub empty_message: String,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            title: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

/// Renders a wallet's balances, recomputing the derived list only when the
/// balances or prices change.
#[derive(Debug, Default)]
pub struct WalletView {
    props: ViewProps,
    pipeline: MemoizedPipeline,
}

impl WalletView {
    pub fn new(props: ViewProps) -> Self {
        Self {
            props,
            pipeline: MemoizedPipeline::new(),
        }
    }

    pub fn props(&self) -> &ViewProps {
        &self.props
    }

    /// Heading to show above the rows, if one is set.
    pub fn title(&self) -> Option<&str> {
        self.props.title.as_deref()
    }

    /// Replaces the display props. The cached derivation is kept.
    pub fn set_props(&mut self, props: ViewProps) {
        self.props = props;
    }

    /// Produces the rows (or empty state) for the given inputs.
    pub fn render(&mut self, balances: &[Balance], prices: &PriceTable) -> Projection {
        let empty = EmptyState {
            message: self.props.empty_message.clone(),
        };
        let derived = self.pipeline.derive(balances, prices);
        project_with(derived, empty)
    }

    /// Number of pipeline recomputations so far.
    pub fn recomputations(&self) -> u64 {
        self.pipeline.recomputations()
    }
}
