// Shared Domain Model
// Instrument identity and the market/chain/risk/portfolio snapshots that make
// up one evaluation request

pub mod chain;
pub mod instrument;
pub mod market;
pub mod portfolio;
pub mod request;
pub mod risk;

pub use chain::{OptionChainSnapshot, StrikeData};
pub use instrument::{Instrument, OptionType, TradeDirection};
pub use market::{Candle, MarketSnapshot, TimeframeHistory};
pub use portfolio::{OpenPosition, PortfolioSnapshot};
pub use request::EvaluationRequest;
pub use risk::RiskContext;
