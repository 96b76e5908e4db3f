// Market Snapshot
// Spot, volatility index and multi-timeframe price history at evaluation time

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Single OHLCV candle
#[derive(Debug, Clone)]
pub struct Candle {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Price history across the three analysis timeframes
#[derive(Debug, Clone, Default)]
pub struct TimeframeHistory {
    /// Longest timeframe series (e.g. daily)
    pub long: Vec<Candle>,
    /// Intermediate timeframe series (e.g. hourly)
    pub medium: Vec<Candle>,
    /// Shortest timeframe series (e.g. 5-minute)
    pub short: Vec<Candle>,
}

/// Market state at the moment of evaluation
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Current spot price of the underlying
    pub spot: Decimal,
    /// Current volatility index level
    pub vix: f64,
    /// Recent volatility index readings, oldest first
    pub vix_history: Vec<f64>,
    /// Candle series per timeframe
    pub history: TimeframeHistory,
}
