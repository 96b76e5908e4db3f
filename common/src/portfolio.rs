// Portfolio Snapshot
// Capital, open positions and sizing policy for the portfolio-fit stage

use crate::instrument::TradeDirection;
use rust_decimal::Decimal;

/// One currently open position
#[derive(Debug, Clone)]
pub struct OpenPosition {
    pub symbol: String,
    pub direction: TradeDirection,
    pub quantity: u32,
    pub entry_price: Decimal,
    pub capital_allocated: Decimal,
}

/// Portfolio state and risk policy at evaluation time
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    /// Total capital available to the strategy
    pub capital: Decimal,
    /// Positions currently open
    pub open_positions: Vec<OpenPosition>,
    /// Fraction of capital risked per trade (e.g. 0.02 = 2%)
    pub risk_per_trade: Decimal,
    /// Maximum number of concurrently open positions
    pub max_concurrent_positions: usize,
}

impl PortfolioSnapshot {
    /// Number of currently open positions
    pub fn num_positions(&self) -> usize {
        self.open_positions.len()
    }
}
