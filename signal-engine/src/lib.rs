// Trading-Signal Evaluation Engine
// Seven-stage analysis pipeline producing an auditable approve/wait/reject
// decision per evaluation request, with every evaluation persisted

pub mod config;
pub mod engine;
pub mod error;
pub mod scorers;
pub mod signal;
pub mod storage;
pub mod trade;

pub use config::{load_config, save_config, EngineConfig, StageWeights};
pub use engine::SignalEngine;
pub use error::{EngineError, StorageError};
pub use scorers::{
    AlignmentInput, AlignmentScorer, GateResult, PortfolioFitResult, PortfolioInput,
    PortfolioScorer, PriceActionInput, PriceActionScorer, RegimeInput, RegimeScorer,
    RiskRegimeInput, RiskRegimeResult, RiskRegimeScorer, ScorerSet, StageScore, VolatilityInput,
    VolatilityScorer, WriterRatioInput, WriterRatioScorer,
};
pub use signal::{
    reason, EvaluationOutcome, ExecutionParams, Recommendation, Signal, SignalStatus,
    StageBreakdown,
};
pub use storage::{InMemorySignalStorage, SignalStorage, StorageStats};
pub use trade::ProposedTrade;
