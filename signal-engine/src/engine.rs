// Signal Engine
// Runs the seven analysis stages in order, applies the writer-ratio veto,
// aggregates the weighted overall score, derives the final decision and
// persists the resulting signal

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::scorers::{
    AlignmentInput, PortfolioInput, PriceActionInput, RegimeInput, RiskRegimeInput, ScorerSet,
    VolatilityInput, WriterRatioInput,
};
use crate::signal::{
    reason, EvaluationOutcome, ExecutionParams, Recommendation, Signal, SignalStatus,
    StageBreakdown,
};
use crate::storage::SignalStorage;
use crate::trade;
use chrono::Utc;
use common::EvaluationRequest;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Seven-stage evaluation pipeline. Holds no mutable state: each call
/// operates on its own request and produces its own signal, so evaluations
/// may run concurrently.
pub struct SignalEngine {
    scorers: ScorerSet,
    storage: Arc<dyn SignalStorage>,
    config: EngineConfig,
}

impl SignalEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig, scorers: ScorerSet, storage: Arc<dyn SignalStorage>) -> Self {
        Self {
            scorers,
            storage,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one request end to end and persist the resulting signal.
    ///
    /// Each call is a single deterministic pass with no retries. The only
    /// error this returns is a persistence failure; every evaluation-level
    /// condition (gate veto, restrictions, weak scores) is an ordinary
    /// outcome recorded on the signal.
    pub async fn generate_signal(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationOutcome, EngineError> {
        let market = &request.market;
        let instrument = &request.instrument;

        // Stage 1: market regime on spot, volatility index and the long series
        let regime = self.scorers.regime.evaluate(&RegimeInput {
            spot: market.spot,
            vix: market.vix,
            history: &market.history.long,
        });
        debug!("regime stage: score={:.1}", regime.score);

        // Stage 2: price action on the shortest timeframe
        let price_action = self.scorers.price_action.evaluate(&PriceActionInput {
            spot: market.spot,
            history: &market.history.short,
        });
        debug!("price action stage: score={:.1}", price_action.score);

        // Stage 3: multi-timeframe alignment
        let alignment = self.scorers.alignment.evaluate(&AlignmentInput {
            long: &market.history.long,
            medium: &market.history.medium,
            short: &market.history.short,
        });
        debug!("alignment stage: score={:.1}", alignment.score);

        // Stage 4: volatility, with ATM IV resolved from the chain
        let atm_iv = trade::resolve_atm_iv(&request.chain, self.config.default_atm_iv);
        let volatility = self.scorers.volatility.evaluate(&VolatilityInput {
            vix: market.vix,
            vix_history: &market.vix_history,
            atm_iv,
        });
        debug!("volatility stage: score={:.1} atm_iv={:.1}", volatility.score, atm_iv);

        // Stage 5: writer ratio, the mandatory gate
        let writer_ratio = self.scorers.writer_ratio.evaluate(&WriterRatioInput {
            chain: &request.chain,
            direction: instrument.direction,
        });
        debug!(
            "writer ratio stage: score={:.1} gate_passed={}",
            writer_ratio.score, writer_ratio.gate_passed
        );

        if !writer_ratio.gate_passed {
            // Unconditional veto: no combination of other scores can override
            // it, and stages 6-7 never run.
            info!(
                "writer ratio gate failed for {}, rejecting without further stages",
                instrument.symbol
            );
            let signal = Signal {
                id: Uuid::new_v4(),
                instrument: instrument.clone(),
                stages: StageBreakdown {
                    regime,
                    price_action,
                    alignment,
                    volatility,
                    writer_ratio,
                    risk_regime: None,
                    portfolio: None,
                },
                overall_score: 0.0,
                status: SignalStatus::Rejected,
                status_reason: reason::WRITER_RATIO_FAILED.to_string(),
                execution: None,
                created_at: Utc::now(),
            };
            let persisted = self.storage.save(&signal).await?;
            return Ok(EvaluationOutcome {
                success: false,
                analysis: persisted.stages.clone(),
                overall_score: 0.0,
                recommendation: Recommendation::Reject,
                rejection_reason: Some(reason::WRITER_RATIO_FAILED.to_string()),
                execution: None,
                signal: persisted,
            });
        }

        // Stage 6: risk regime
        let risk_regime = self.scorers.risk_regime.evaluate(&RiskRegimeInput {
            risk: &request.risk,
        });
        debug!(
            "risk regime stage: score={:.1} trading_allowed={}",
            risk_regime.score, risk_regime.trading_allowed
        );

        // Stage 7: portfolio fit against the proposed trade
        let proposed = trade::propose(instrument, market.spot, &self.config);
        let signal_strength = (regime.score
            + price_action.score
            + alignment.score
            + volatility.score
            + writer_ratio.score
            + risk_regime.score)
            / 6.0;
        let portfolio = self.scorers.portfolio.evaluate(&PortfolioInput {
            proposed: &proposed,
            portfolio: &request.portfolio,
            signal_strength,
        });
        debug!(
            "portfolio stage: score={:.1} position_allowed={} quantity={}",
            portfolio.score, portfolio.position_allowed, portfolio.quantity
        );

        let overall_score = self.config.weights.weighted_mean(
            regime.score,
            price_action.score,
            alignment.score,
            volatility.score,
            writer_ratio.score,
            risk_regime.score,
            portfolio.score,
        );

        // Final decision, first matching rule wins
        let (recommendation, status, status_reason) = if !risk_regime.trading_allowed {
            (
                Recommendation::Wait,
                SignalStatus::Wait,
                risk_regime
                    .restriction
                    .clone()
                    .unwrap_or_else(|| reason::WEAK_SIGNAL.to_string()),
            )
        } else if !portfolio.position_allowed {
            (
                Recommendation::Reject,
                SignalStatus::Rejected,
                portfolio
                    .warning
                    .clone()
                    .unwrap_or_else(|| reason::PORTFOLIO_LIMITS.to_string()),
            )
        } else if overall_score >= self.config.execute_threshold {
            (
                Recommendation::Execute,
                SignalStatus::Approved,
                reason::APPROVED.to_string(),
            )
        } else if overall_score >= self.config.wait_threshold {
            (
                Recommendation::Wait,
                SignalStatus::Wait,
                risk_regime
                    .restriction
                    .clone()
                    .unwrap_or_else(|| reason::WEAK_SIGNAL.to_string()),
            )
        } else {
            (
                Recommendation::Reject,
                SignalStatus::Rejected,
                reason::LOW_OVERALL_SCORE.to_string(),
            )
        };

        let execution = if recommendation == Recommendation::Execute {
            Some(ExecutionParams {
                entry_price: proposed.entry,
                target_price: proposed.target,
                stop_loss: proposed.stop_loss,
                quantity: portfolio.quantity,
                capital_to_allocate: portfolio.capital_to_allocate,
                risk_amount: portfolio.risk_amount,
            })
        } else {
            None
        };

        info!(
            "{} {:?}: overall={:.1} recommendation={:?} ({})",
            instrument.symbol, instrument.direction, overall_score, recommendation, status_reason
        );

        let rejection_reason = if recommendation == Recommendation::Execute {
            None
        } else {
            Some(status_reason.clone())
        };

        let signal = Signal {
            id: Uuid::new_v4(),
            instrument: instrument.clone(),
            stages: StageBreakdown {
                regime,
                price_action,
                alignment,
                volatility,
                writer_ratio,
                risk_regime: Some(risk_regime),
                portfolio: Some(portfolio),
            },
            overall_score,
            status,
            status_reason,
            execution: execution.clone(),
            created_at: Utc::now(),
        };
        let persisted = self.storage.save(&signal).await?;

        Ok(EvaluationOutcome {
            success: recommendation == Recommendation::Execute,
            analysis: persisted.stages.clone(),
            overall_score,
            recommendation,
            rejection_reason,
            execution,
            signal: persisted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::scorers::stub::{self, FixedGate, FixedPortfolio, FixedRiskRegime, FixedStage};
    use crate::scorers::{
        GateResult, PortfolioFitResult, PortfolioScorer, RiskRegimeResult, StageScore,
        VolatilityScorer,
    };
    use crate::storage::{InMemorySignalStorage, StorageStats};
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
    use common::{
        Instrument, MarketSnapshot, OptionChainSnapshot, OptionType, PortfolioSnapshot,
        RiskContext, StrikeData, TimeframeHistory, TradeDirection,
    };
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    fn atm_strike_data(strike: i64, call_iv: f64) -> StrikeData {
        StrikeData {
            strike: Decimal::from(strike),
            call_oi: 150_000,
            put_oi: 420_000,
            call_oi_change: -5_000,
            put_oi_change: 12_000,
            call_iv,
            put_iv: call_iv + 0.8,
        }
    }

    fn sample_request() -> EvaluationRequest {
        EvaluationRequest {
            instrument: Instrument {
                symbol: "NIFTY".to_string(),
                strike: Decimal::from(100),
                expiry: NaiveDate::from_ymd_opt(2026, 9, 24).unwrap(),
                option_type: OptionType::Call,
                direction: TradeDirection::Bullish,
            },
            market: MarketSnapshot {
                spot: Decimal::from(100),
                vix: 14.2,
                vix_history: vec![13.8, 14.0, 14.5, 14.2],
                history: TimeframeHistory::default(),
            },
            chain: OptionChainSnapshot {
                strikes: vec![atm_strike_data(95, 15.0), atm_strike_data(100, 15.5)],
                atm_strike: Decimal::from(100),
                target_strike: Decimal::from(105),
            },
            risk: RiskContext {
                session_open: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
                session_close: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
                evaluated_at: Utc::now(),
                is_expiry_day: false,
                upcoming_events: vec![],
                current_volume: Decimal::from(500_000),
                average_volume: Decimal::from(450_000),
                circuit_breaker_active: false,
                day_of_week: Weekday::Tue,
            },
            portfolio: PortfolioSnapshot {
                capital: Decimal::from(100_000),
                open_positions: vec![],
                risk_per_trade: Decimal::from_str_exact("0.02").unwrap(),
                max_concurrent_positions: 5,
            },
        }
    }

    fn engine_with(scorers: ScorerSet) -> (SignalEngine, Arc<InMemorySignalStorage>) {
        let storage = Arc::new(InMemorySignalStorage::new());
        let engine = SignalEngine::new(EngineConfig::default(), scorers, storage.clone());
        (engine, storage)
    }

    #[tokio::test]
    async fn test_gate_failure_vetoes_regardless_of_scores() {
        // every other stage at the maximum, gate failed
        let mut scorers = stub::uniform(100.0);
        scorers.writer_ratio = Box::new(FixedGate(GateResult::failed(10.0)));
        let (engine, storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.recommendation, Recommendation::Reject);
        assert_eq!(
            outcome.rejection_reason.as_deref(),
            Some(reason::WRITER_RATIO_FAILED)
        );
        assert_eq!(outcome.overall_score, 0.0);
        assert!(outcome.execution.is_none());

        // short-circuited: stages 6-7 never ran
        assert!(outcome.signal.stages.risk_regime.is_none());
        assert!(outcome.signal.stages.portfolio.is_none());
        assert_eq!(outcome.signal.status, SignalStatus::Rejected);

        let rejected = storage.get_by_status(SignalStatus::Rejected).await.unwrap();
        assert_eq!(rejected.len(), 1);
    }

    #[tokio::test]
    async fn test_trading_restriction_forces_wait() {
        let mut scorers = stub::uniform(95.0);
        scorers.risk_regime = Box::new(FixedRiskRegime(RiskRegimeResult::restricted(
            30.0,
            "EXPIRY_DAY_RESTRICTED",
        )));
        let (engine, _storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();

        // never Execute while trading is restricted, no matter the score
        assert_eq!(outcome.recommendation, Recommendation::Wait);
        assert_eq!(outcome.signal.status, SignalStatus::Wait);
        assert_eq!(
            outcome.rejection_reason.as_deref(),
            Some("EXPIRY_DAY_RESTRICTED")
        );
        assert!(outcome.execution.is_none());
        assert!(outcome.signal.stages.risk_regime.is_some());
    }

    #[tokio::test]
    async fn test_position_block_rejects_with_warning() {
        let mut scorers = stub::uniform(95.0);
        scorers.portfolio = Box::new(FixedPortfolio(PortfolioFitResult::blocked(
            40.0,
            Some("MAX_POSITIONS_REACHED".to_string()),
        )));
        let (engine, _storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();
        assert_eq!(outcome.recommendation, Recommendation::Reject);
        assert_eq!(
            outcome.rejection_reason.as_deref(),
            Some("MAX_POSITIONS_REACHED")
        );
    }

    #[tokio::test]
    async fn test_position_block_falls_back_to_portfolio_limits() {
        let mut scorers = stub::uniform(95.0);
        scorers.portfolio = Box::new(FixedPortfolio(PortfolioFitResult::blocked(40.0, None)));
        let (engine, _storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();
        assert_eq!(outcome.recommendation, Recommendation::Reject);
        assert_eq!(
            outcome.rejection_reason.as_deref(),
            Some(reason::PORTFOLIO_LIMITS)
        );
    }

    #[tokio::test]
    async fn test_decision_thresholds_are_exact() {
        // all stages at the same score make the weighted mean equal that
        // score; trading was allowed, so score-band Waits fall back to the
        // WEAK_SIGNAL reason and score-band Rejects to LOW_OVERALL_SCORE
        for (score, expected, expected_reason) in [
            (70.0, Recommendation::Execute, None),
            (69.0, Recommendation::Wait, Some(reason::WEAK_SIGNAL)),
            (50.0, Recommendation::Wait, Some(reason::WEAK_SIGNAL)),
            (49.0, Recommendation::Reject, Some(reason::LOW_OVERALL_SCORE)),
        ] {
            let (engine, _storage) = engine_with(stub::uniform(score));
            let outcome = engine.generate_signal(&sample_request()).await.unwrap();
            assert_eq!(outcome.overall_score, score);
            assert_eq!(outcome.recommendation, expected, "score {}", score);
            assert_eq!(
                outcome.rejection_reason.as_deref(),
                expected_reason,
                "score {}",
                score
            );
        }
    }

    #[tokio::test]
    async fn test_restriction_without_text_falls_back_to_weak_signal() {
        let mut scorers = stub::uniform(95.0);
        scorers.risk_regime = Box::new(FixedRiskRegime(RiskRegimeResult {
            score: 30.0,
            trading_allowed: false,
            restriction: None,
            metrics: serde_json::Value::Null,
        }));
        let (engine, _storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();
        assert_eq!(outcome.recommendation, Recommendation::Wait);
        assert_eq!(outcome.rejection_reason.as_deref(), Some(reason::WEAK_SIGNAL));
        assert_eq!(outcome.signal.status_reason, reason::WEAK_SIGNAL);
    }

    #[tokio::test]
    async fn test_approved_signal_carries_execution_params() {
        let (engine, storage) = engine_with(stub::uniform(82.0));

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.recommendation, Recommendation::Execute);
        assert!(outcome.rejection_reason.is_none());
        assert_eq!(outcome.signal.status, SignalStatus::Approved);
        assert_eq!(outcome.signal.status_reason, reason::APPROVED);

        // bullish at spot 100 with the default 2%/5% bands
        let exec = outcome.execution.expect("approved signal has execution params");
        assert_eq!(exec.entry_price, Decimal::from(100));
        assert_eq!(exec.stop_loss, Decimal::from(98));
        assert_eq!(exec.target_price, Decimal::from(105));
        assert_eq!(exec.quantity, 50);
        assert_eq!(exec.capital_to_allocate, Decimal::from(10_000));
        assert_eq!(exec.risk_amount, Decimal::from(2_000));

        let approved = storage.get_by_status(SignalStatus::Approved).await.unwrap();
        assert_eq!(approved.len(), 1);
    }

    fn candle(open: i64, close: i64) -> common::Candle {
        common::Candle {
            open: Decimal::from(open),
            high: Decimal::from(close.max(open) + 1),
            low: Decimal::from(close.min(open) - 1),
            close: Decimal::from(close),
            volume: Decimal::from(10_000),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_stop_bands_ignore_price_action_zones() {
        // The stop/target band is fixed configuration: two requests whose
        // short-timeframe series (the price-action stage input) differ, run
        // through engines whose price-action stage scores differ, still get
        // identical entry/stop/target.
        let mut trending = sample_request();
        trending.market.history.short = vec![candle(98, 99), candle(99, 100)];
        let mut choppy = sample_request();
        choppy.market.history.short = vec![candle(103, 97), candle(97, 102)];

        let mut strong_zones = stub::uniform(82.0);
        strong_zones.price_action = Box::new(FixedStage(StageScore::new(95.0)));
        let (engine_a, _s) = engine_with(strong_zones);

        let mut weak_zones = stub::uniform(82.0);
        weak_zones.price_action = Box::new(FixedStage(StageScore::new(72.0)));
        let (engine_b, _s) = engine_with(weak_zones);

        let a = engine_a.generate_signal(&trending).await.unwrap();
        let b = engine_b.generate_signal(&choppy).await.unwrap();

        let exec_a = a.execution.unwrap();
        let exec_b = b.execution.unwrap();
        assert_eq!(exec_a.entry_price, exec_b.entry_price);
        assert_eq!(exec_a.stop_loss, exec_b.stop_loss);
        assert_eq!(exec_a.target_price, exec_b.target_price);
        assert_eq!(exec_a.stop_loss, Decimal::from(98));
        assert_eq!(exec_a.target_price, Decimal::from(105));
    }

    #[tokio::test]
    async fn test_bearish_execution_params() {
        let mut request = sample_request();
        request.instrument.direction = TradeDirection::Bearish;
        request.instrument.option_type = OptionType::Put;
        let (engine, _storage) = engine_with(stub::uniform(82.0));

        let outcome = engine.generate_signal(&request).await.unwrap();
        let exec = outcome.execution.unwrap();
        assert_eq!(exec.stop_loss, Decimal::from(102));
        assert_eq!(exec.target_price, Decimal::from(95));
    }

    #[tokio::test]
    async fn test_gate_is_double_weighted() {
        // six stages at 80, gate passed at 40: (80*6 + 40*2) / 8 = 70, on the
        // execute boundary
        let scorers = ScorerSet {
            regime: Box::new(FixedStage(StageScore::new(80.0))),
            price_action: Box::new(FixedStage(StageScore::new(80.0))),
            alignment: Box::new(FixedStage(StageScore::new(80.0))),
            volatility: Box::new(FixedStage(StageScore::new(80.0))),
            writer_ratio: Box::new(FixedGate(GateResult::passed(40.0))),
            risk_regime: Box::new(FixedRiskRegime(RiskRegimeResult::allowed(80.0))),
            portfolio: Box::new(FixedPortfolio(PortfolioFitResult::sized(
                80.0,
                50,
                Decimal::from(10_000),
                Decimal::from(2_000),
            ))),
        };
        let (engine, _storage) = engine_with(scorers);

        let outcome = engine.generate_signal(&sample_request()).await.unwrap();
        assert_eq!(outcome.overall_score, 70.0);
        assert_eq!(outcome.recommendation, Recommendation::Execute);
    }

    struct CapturingVolatility {
        seen_atm_iv: Arc<Mutex<Option<f64>>>,
    }

    impl VolatilityScorer for CapturingVolatility {
        fn evaluate(&self, input: &crate::scorers::VolatilityInput<'_>) -> StageScore {
            *self.seen_atm_iv.lock().unwrap() = Some(input.atm_iv);
            StageScore::new(75.0)
        }
    }

    #[tokio::test]
    async fn test_missing_atm_strike_falls_back_to_default_iv() {
        let seen = Arc::new(Mutex::new(None));
        let mut scorers = stub::uniform(75.0);
        scorers.volatility = Box::new(CapturingVolatility {
            seen_atm_iv: seen.clone(),
        });
        let (engine, _storage) = engine_with(scorers);

        let mut request = sample_request();
        request.chain.atm_strike = Decimal::from(103); // not in the chain

        let outcome = engine.generate_signal(&request).await.unwrap();
        assert!(outcome.success);
        assert_eq!(*seen.lock().unwrap(), Some(20.0));
    }

    #[tokio::test]
    async fn test_present_atm_strike_uses_chain_iv() {
        let seen = Arc::new(Mutex::new(None));
        let mut scorers = stub::uniform(75.0);
        scorers.volatility = Box::new(CapturingVolatility {
            seen_atm_iv: seen.clone(),
        });
        let (engine, _storage) = engine_with(scorers);

        engine.generate_signal(&sample_request()).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(15.5));
    }

    struct CapturingPortfolio {
        seen_strength: Arc<Mutex<Option<f64>>>,
    }

    impl PortfolioScorer for CapturingPortfolio {
        fn evaluate(&self, input: &crate::scorers::PortfolioInput<'_>) -> PortfolioFitResult {
            *self.seen_strength.lock().unwrap() = Some(input.signal_strength);
            PortfolioFitResult::sized(60.0, 25, Decimal::from(5_000), Decimal::from(1_000))
        }
    }

    #[tokio::test]
    async fn test_signal_strength_is_unweighted_mean_of_first_six() {
        let seen = Arc::new(Mutex::new(None));
        let scorers = ScorerSet {
            regime: Box::new(FixedStage(StageScore::new(60.0))),
            price_action: Box::new(FixedStage(StageScore::new(70.0))),
            alignment: Box::new(FixedStage(StageScore::new(80.0))),
            volatility: Box::new(FixedStage(StageScore::new(90.0))),
            writer_ratio: Box::new(FixedGate(GateResult::passed(50.0))),
            risk_regime: Box::new(FixedRiskRegime(RiskRegimeResult::allowed(50.0))),
            portfolio: Box::new(CapturingPortfolio {
                seen_strength: seen.clone(),
            }),
        };
        let (engine, _storage) = engine_with(scorers);

        engine.generate_signal(&sample_request()).await.unwrap();

        let strength = seen.lock().unwrap().expect("portfolio stage ran");
        let expected = (60.0 + 70.0 + 80.0 + 90.0 + 50.0 + 50.0) / 6.0;
        assert!((strength - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_identical_inputs_give_identical_signals_with_distinct_ids() {
        let (engine, storage) = engine_with(stub::uniform(82.0));
        let request = sample_request();

        let first = engine.generate_signal(&request).await.unwrap();
        let second = engine.generate_signal(&request).await.unwrap();

        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.recommendation, second.recommendation);
        assert_eq!(
            first.signal.stages.regime.score,
            second.signal.stages.regime.score
        );
        assert_eq!(first.signal.status, second.signal.status);

        // no dedup: two independent records
        assert_ne!(first.signal.id, second.signal.id);
        assert_eq!(storage.get_all().await.unwrap().len(), 2);
    }

    struct FailingStorage;

    #[async_trait::async_trait]
    impl SignalStorage for FailingStorage {
        async fn save(&self, _signal: &Signal) -> Result<Signal, StorageError> {
            Err(StorageError::Backend("disk full".to_string()))
        }

        async fn get(&self, _id: Uuid) -> Result<Option<Signal>, StorageError> {
            Ok(None)
        }

        async fn get_by_symbol(&self, _symbol: &str) -> Result<Vec<Signal>, StorageError> {
            Ok(vec![])
        }

        async fn get_by_status(
            &self,
            _status: SignalStatus,
        ) -> Result<Vec<Signal>, StorageError> {
            Ok(vec![])
        }

        async fn get_by_time_range(
            &self,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<Vec<Signal>, StorageError> {
            Ok(vec![])
        }

        async fn get_all(&self) -> Result<Vec<Signal>, StorageError> {
            Ok(vec![])
        }

        async fn stats(&self) -> Result<StorageStats, StorageError> {
            Ok(StorageStats {
                total_signals: 0,
                signals_by_status: Default::default(),
                oldest_signal: None,
                newest_signal: None,
            })
        }
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates_distinctly() {
        let engine = SignalEngine::new(
            EngineConfig::default(),
            stub::uniform(82.0),
            Arc::new(FailingStorage),
        );

        let err = engine.generate_signal(&sample_request()).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Persistence(StorageError::Backend(_))
        ));
    }
}
