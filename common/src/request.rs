// Evaluation Request
// Immutable input bundle for one pipeline run

use crate::chain::OptionChainSnapshot;
use crate::instrument::Instrument;
use crate::market::MarketSnapshot;
use crate::portfolio::PortfolioSnapshot;
use crate::risk::RiskContext;

/// Everything one evaluation consumes. Created once per call, never mutated;
/// two requests with identical contents evaluate identically.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub instrument: Instrument,
    pub market: MarketSnapshot,
    pub chain: OptionChainSnapshot,
    pub risk: RiskContext,
    pub portfolio: PortfolioSnapshot,
}
