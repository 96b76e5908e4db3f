// Option Chain Snapshot
// Per-strike open interest and implied volatility data

use rust_decimal::Decimal;

/// Open interest and implied volatility for one strike
#[derive(Debug, Clone)]
pub struct StrikeData {
    pub strike: Decimal,
    /// Call-side open interest
    pub call_oi: u64,
    /// Put-side open interest
    pub put_oi: u64,
    /// Change in call open interest over the session
    pub call_oi_change: i64,
    /// Change in put open interest over the session
    pub put_oi_change: i64,
    /// Call-side implied volatility (percent)
    pub call_iv: f64,
    /// Put-side implied volatility (percent)
    pub put_iv: f64,
}

/// Snapshot of the option chain around the trade
#[derive(Debug, Clone)]
pub struct OptionChainSnapshot {
    /// Chain entries, typically a window of strikes around ATM
    pub strikes: Vec<StrikeData>,
    /// Strike closest to the current spot price
    pub atm_strike: Decimal,
    /// Strike the trade targets
    pub target_strike: Decimal,
}

impl OptionChainSnapshot {
    /// Call-side implied volatility at the given strike, if present in the chain
    pub fn call_iv_at(&self, strike: Decimal) -> Option<f64> {
        self.strikes
            .iter()
            .find(|s| s.strike == strike)
            .map(|s| s.call_iv)
    }
}
