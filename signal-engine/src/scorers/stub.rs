// Deterministic Stub Scorers
// Fixed-result stand-ins for testing, development and historical replay

use super::{
    AlignmentInput, AlignmentScorer, GateResult, PortfolioFitResult, PortfolioInput,
    PortfolioScorer, PriceActionInput, PriceActionScorer, RegimeInput, RegimeScorer,
    RiskRegimeInput, RiskRegimeResult, RiskRegimeScorer, ScorerSet, StageScore,
    VolatilityInput, VolatilityScorer, WriterRatioInput, WriterRatioScorer,
};
use rust_decimal::Decimal;

/// Returns the same `StageScore` for every input; usable for stages 1-4
pub struct FixedStage(pub StageScore);

impl RegimeScorer for FixedStage {
    fn evaluate(&self, _input: &RegimeInput<'_>) -> StageScore {
        self.0.clone()
    }
}

impl PriceActionScorer for FixedStage {
    fn evaluate(&self, _input: &PriceActionInput<'_>) -> StageScore {
        self.0.clone()
    }
}

impl AlignmentScorer for FixedStage {
    fn evaluate(&self, _input: &AlignmentInput<'_>) -> StageScore {
        self.0.clone()
    }
}

impl VolatilityScorer for FixedStage {
    fn evaluate(&self, _input: &VolatilityInput<'_>) -> StageScore {
        self.0.clone()
    }
}

/// Returns the same `GateResult` for every input
pub struct FixedGate(pub GateResult);

impl WriterRatioScorer for FixedGate {
    fn evaluate(&self, _input: &WriterRatioInput<'_>) -> GateResult {
        self.0.clone()
    }
}

/// Returns the same `RiskRegimeResult` for every input
pub struct FixedRiskRegime(pub RiskRegimeResult);

impl RiskRegimeScorer for FixedRiskRegime {
    fn evaluate(&self, _input: &RiskRegimeInput<'_>) -> RiskRegimeResult {
        self.0.clone()
    }
}

/// Returns the same `PortfolioFitResult` for every input
pub struct FixedPortfolio(pub PortfolioFitResult);

impl PortfolioScorer for FixedPortfolio {
    fn evaluate(&self, _input: &PortfolioInput<'_>) -> PortfolioFitResult {
        self.0.clone()
    }
}

/// A full scorer set where every stage scores `score`, the gate passes,
/// trading is allowed and the position is allowed with a nominal allocation
pub fn uniform(score: f64) -> ScorerSet {
    ScorerSet {
        regime: Box::new(FixedStage(StageScore::new(score))),
        price_action: Box::new(FixedStage(StageScore::new(score))),
        alignment: Box::new(FixedStage(StageScore::new(score))),
        volatility: Box::new(FixedStage(StageScore::new(score))),
        writer_ratio: Box::new(FixedGate(GateResult::passed(score))),
        risk_regime: Box::new(FixedRiskRegime(RiskRegimeResult::allowed(score))),
        portfolio: Box::new(FixedPortfolio(PortfolioFitResult::sized(
            score,
            50,
            Decimal::from(10_000),
            Decimal::from(2_000),
        ))),
    }
}
