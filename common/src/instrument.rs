// Instrument Identity
// Identifies the option contract an evaluation is about

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option contract type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

/// Desired trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Bullish,
    Bearish,
}

impl TradeDirection {
    /// The option type a directional trade uses
    pub fn option_type(&self) -> OptionType {
        match self {
            TradeDirection::Bullish => OptionType::Call,
            TradeDirection::Bearish => OptionType::Put,
        }
    }
}

/// Identity of the option contract under evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Underlying symbol (e.g. "NIFTY")
    pub symbol: String,
    /// Strike price of the contract
    pub strike: Decimal,
    /// Contract expiry date
    pub expiry: NaiveDate,
    /// Call or put
    pub option_type: OptionType,
    /// Desired direction for the trade
    pub direction: TradeDirection,
}
