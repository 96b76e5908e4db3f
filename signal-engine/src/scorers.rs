// Scorer Contracts
// One trait per analysis stage. Scorers are pure and infallible: given
// well-formed input they must return a result, and an unrecoverable stage
// failure is a score-0 result with explanatory metrics, never an error.

use crate::trade::ProposedTrade;
use common::{Candle, OptionChainSnapshot, PortfolioSnapshot, RiskContext, TradeDirection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod stub;

/// Result of a plain scoring stage (stages 1-4)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageScore {
    /// Stage score in [0, 100]
    pub score: f64,
    /// Opaque stage-specific payload, preserved for audit only
    #[serde(default)]
    pub metrics: Value,
}

impl StageScore {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            metrics: Value::Null,
        }
    }

    pub fn with_metrics(score: f64, metrics: Value) -> Self {
        Self { score, metrics }
    }

    /// Conservative result for a stage that could not compute a meaningful value
    pub fn degraded(why: &str) -> Self {
        Self {
            score: 0.0,
            metrics: serde_json::json!({ "degraded": why }),
        }
    }
}

/// Result of the writer-ratio gate (stage 5). `gate_passed` is authoritative:
/// it is the only flag the orchestrator uses to short-circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateResult {
    pub score: f64,
    pub gate_passed: bool,
    #[serde(default)]
    pub metrics: Value,
}

impl GateResult {
    pub fn passed(score: f64) -> Self {
        Self {
            score,
            gate_passed: true,
            metrics: Value::Null,
        }
    }

    pub fn failed(score: f64) -> Self {
        Self {
            score,
            gate_passed: false,
            metrics: Value::Null,
        }
    }

    pub fn with_metrics(mut self, metrics: Value) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Result of the risk-regime stage (stage 6)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRegimeResult {
    pub score: f64,
    pub trading_allowed: bool,
    /// Textual restriction reason when trading is not allowed
    pub restriction: Option<String>,
    #[serde(default)]
    pub metrics: Value,
}

impl RiskRegimeResult {
    pub fn allowed(score: f64) -> Self {
        Self {
            score,
            trading_allowed: true,
            restriction: None,
            metrics: Value::Null,
        }
    }

    pub fn restricted(score: f64, why: &str) -> Self {
        Self {
            score,
            trading_allowed: false,
            restriction: Some(why.to_string()),
            metrics: Value::Null,
        }
    }
}

/// Result of the portfolio-fit stage (stage 7)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioFitResult {
    pub score: f64,
    pub position_allowed: bool,
    /// Warning text when the position is not allowed
    pub warning: Option<String>,
    /// Recommended contract quantity
    pub quantity: u32,
    /// Capital to allocate for the position
    pub capital_to_allocate: Decimal,
    /// Amount at risk between entry and stop
    pub risk_amount: Decimal,
    #[serde(default)]
    pub metrics: Value,
}

impl PortfolioFitResult {
    pub fn sized(score: f64, quantity: u32, capital_to_allocate: Decimal, risk_amount: Decimal) -> Self {
        Self {
            score,
            position_allowed: true,
            warning: None,
            quantity,
            capital_to_allocate,
            risk_amount,
            metrics: Value::Null,
        }
    }

    pub fn blocked(score: f64, warning: Option<String>) -> Self {
        Self {
            score,
            position_allowed: false,
            warning,
            quantity: 0,
            capital_to_allocate: Decimal::ZERO,
            risk_amount: Decimal::ZERO,
            metrics: Value::Null,
        }
    }
}

/// Input for the regime stage: spot, volatility index and the long-timeframe series
#[derive(Debug, Clone)]
pub struct RegimeInput<'a> {
    pub spot: Decimal,
    pub vix: f64,
    pub history: &'a [Candle],
}

/// Input for the price-action stage: the shortest timeframe series
#[derive(Debug, Clone)]
pub struct PriceActionInput<'a> {
    pub spot: Decimal,
    pub history: &'a [Candle],
}

/// Input for the multi-timeframe alignment stage
#[derive(Debug, Clone)]
pub struct AlignmentInput<'a> {
    pub long: &'a [Candle],
    pub medium: &'a [Candle],
    pub short: &'a [Candle],
}

/// Input for the volatility stage. `atm_iv` is resolved by the orchestrator
/// from the chain, with a configured fallback on lookup miss.
#[derive(Debug, Clone)]
pub struct VolatilityInput<'a> {
    pub vix: f64,
    pub vix_history: &'a [f64],
    pub atm_iv: f64,
}

/// Input for the writer-ratio gate
#[derive(Debug, Clone)]
pub struct WriterRatioInput<'a> {
    pub chain: &'a OptionChainSnapshot,
    pub direction: TradeDirection,
}

/// Input for the risk-regime stage
#[derive(Debug, Clone)]
pub struct RiskRegimeInput<'a> {
    pub risk: &'a RiskContext,
}

/// Input for the portfolio-fit stage. `signal_strength` is the unweighted
/// mean of the stage 1-6 scores.
#[derive(Debug, Clone)]
pub struct PortfolioInput<'a> {
    pub proposed: &'a ProposedTrade,
    pub portfolio: &'a PortfolioSnapshot,
    pub signal_strength: f64,
}

pub trait RegimeScorer: Send + Sync {
    fn evaluate(&self, input: &RegimeInput<'_>) -> StageScore;
}

pub trait PriceActionScorer: Send + Sync {
    fn evaluate(&self, input: &PriceActionInput<'_>) -> StageScore;
}

pub trait AlignmentScorer: Send + Sync {
    fn evaluate(&self, input: &AlignmentInput<'_>) -> StageScore;
}

pub trait VolatilityScorer: Send + Sync {
    fn evaluate(&self, input: &VolatilityInput<'_>) -> StageScore;
}

pub trait WriterRatioScorer: Send + Sync {
    fn evaluate(&self, input: &WriterRatioInput<'_>) -> GateResult;
}

pub trait RiskRegimeScorer: Send + Sync {
    fn evaluate(&self, input: &RiskRegimeInput<'_>) -> RiskRegimeResult;
}

pub trait PortfolioScorer: Send + Sync {
    fn evaluate(&self, input: &PortfolioInput<'_>) -> PortfolioFitResult;
}

/// One scorer per stage, in pipeline order
pub struct ScorerSet {
    pub regime: Box<dyn RegimeScorer>,
    pub price_action: Box<dyn PriceActionScorer>,
    pub alignment: Box<dyn AlignmentScorer>,
    pub volatility: Box<dyn VolatilityScorer>,
    pub writer_ratio: Box<dyn WriterRatioScorer>,
    pub risk_regime: Box<dyn RiskRegimeScorer>,
    pub portfolio: Box<dyn PortfolioScorer>,
}
