// Signal Record
// Write-once outcome of one evaluation, persisted for audit and backtesting

use crate::scorers::{GateResult, PortfolioFitResult, RiskRegimeResult, StageScore};
use chrono::{DateTime, Utc};
use common::Instrument;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status reason strings recorded on the signal
pub mod reason {
    pub const APPROVED: &str = "APPROVED";
    pub const WRITER_RATIO_FAILED: &str = "WRITER_RATIO_FAILED";
    pub const WEAK_SIGNAL: &str = "WEAK_SIGNAL";
    pub const PORTFOLIO_LIMITS: &str = "PORTFOLIO_LIMITS";
    pub const LOW_OVERALL_SCORE: &str = "LOW_OVERALL_SCORE";
}

/// Caller-facing recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Execute,
    Wait,
    Reject,
}

/// Persisted signal status; `Execute` maps to `Approved`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStatus {
    Approved,
    Wait,
    Rejected,
}

/// Execution parameters, present only on approved signals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    pub entry_price: Decimal,
    pub target_price: Decimal,
    pub stop_loss: Decimal,
    pub quantity: u32,
    pub capital_to_allocate: Decimal,
    pub risk_amount: Decimal,
}

/// All stage results of one evaluation. Stages 6 and 7 are absent exactly
/// when the writer-ratio gate short-circuited the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageBreakdown {
    pub regime: StageScore,
    pub price_action: StageScore,
    pub alignment: StageScore,
    pub volatility: StageScore,
    pub writer_ratio: GateResult,
    pub risk_regime: Option<RiskRegimeResult>,
    pub portfolio: Option<PortfolioFitResult>,
}

/// Persisted outcome of one evaluation. Write-once: a re-evaluation produces
/// a new record, preserving full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub id: Uuid,
    pub instrument: Instrument,
    pub stages: StageBreakdown,
    pub overall_score: f64,
    pub status: SignalStatus,
    pub status_reason: String,
    pub execution: Option<ExecutionParams>,
    pub created_at: DateTime<Utc>,
}

/// What `generate_signal` returns to the caller
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// True when the signal was approved for execution
    pub success: bool,
    /// The persisted signal record
    pub signal: Signal,
    /// All stage results, same as `signal.stages`
    pub analysis: StageBreakdown,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    /// Set for every non-Execute recommendation
    pub rejection_reason: Option<String>,
    /// Set only when approved
    pub execution: Option<ExecutionParams>,
}
