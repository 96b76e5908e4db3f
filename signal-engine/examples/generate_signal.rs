// Example: Signal Evaluation
// Runs the seven-stage pipeline end to end with deterministic stub scorers
// and in-memory storage

use chrono::{NaiveDate, NaiveTime, Utc, Weekday};
use common::{
    EvaluationRequest, Instrument, MarketSnapshot, OptionChainSnapshot, OptionType,
    PortfolioSnapshot, RiskContext, StrikeData, TimeframeHistory, TradeDirection,
};
use rust_decimal::Decimal;
use signal_engine::scorers::stub::{self, FixedGate};
use signal_engine::{
    EngineConfig, EvaluationOutcome, GateResult, InMemorySignalStorage, SignalEngine,
    SignalStorage,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== Signal Engine - Evaluation Example ===\n");

    let request = create_sample_request();
    println!(
        "Instrument: {} {:?} strike {} exp {}",
        request.instrument.symbol,
        request.instrument.direction,
        request.instrument.strike,
        request.instrument.expiry
    );
    println!("Spot: {}  VIX: {:.1}\n", request.market.spot, request.market.vix);

    let storage = Arc::new(InMemorySignalStorage::new());

    // Strong deterministic stand-ins; production wires the seven real scorers
    let engine = SignalEngine::new(EngineConfig::default(), stub::uniform(82.0), storage.clone());

    println!("=== Evaluation 1: all stages strong ===\n");
    let outcome = engine.generate_signal(&request).await?;
    print_outcome(&outcome);

    // Same request through an engine whose writer-ratio gate fails: the
    // mandatory veto short-circuits the pipeline.
    let mut failing = stub::uniform(82.0);
    failing.writer_ratio = Box::new(FixedGate(GateResult::failed(12.0)));
    let vetoed_engine = SignalEngine::new(EngineConfig::default(), failing, storage.clone());

    println!("=== Evaluation 2: writer-ratio gate fails ===\n");
    let vetoed = vetoed_engine.generate_signal(&request).await?;
    print_outcome(&vetoed);

    println!("=== Storage ===\n");
    let stats = storage.stats().await?;
    println!("Total Signals: {}", stats.total_signals);
    for (status, count) in &stats.signals_by_status {
        println!("  {}: {}", status, count);
    }

    Ok(())
}

fn create_sample_request() -> EvaluationRequest {
    let strikes = vec![
        strike_data(19900, 14.8),
        strike_data(20000, 15.2),
        strike_data(20100, 15.9),
    ];

    EvaluationRequest {
        instrument: Instrument {
            symbol: "NIFTY".to_string(),
            strike: Decimal::from(20100),
            expiry: NaiveDate::from_ymd_opt(2026, 9, 24).unwrap(),
            option_type: OptionType::Call,
            direction: TradeDirection::Bullish,
        },
        market: MarketSnapshot {
            spot: Decimal::from(20025),
            vix: 13.4,
            vix_history: vec![12.9, 13.1, 13.6, 13.4],
            history: TimeframeHistory::default(),
        },
        chain: OptionChainSnapshot {
            strikes,
            atm_strike: Decimal::from(20000),
            target_strike: Decimal::from(20100),
        },
        risk: RiskContext {
            session_open: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            session_close: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            evaluated_at: Utc::now(),
            is_expiry_day: false,
            upcoming_events: vec![],
            current_volume: Decimal::from(1_250_000),
            average_volume: Decimal::from(1_100_000),
            circuit_breaker_active: false,
            day_of_week: Weekday::Wed,
        },
        portfolio: PortfolioSnapshot {
            capital: Decimal::from(500_000),
            open_positions: vec![],
            risk_per_trade: Decimal::from_str_exact("0.02").unwrap(),
            max_concurrent_positions: 5,
        },
    }
}

fn strike_data(strike: i64, call_iv: f64) -> StrikeData {
    StrikeData {
        strike: Decimal::from(strike),
        call_oi: 180_000,
        put_oi: 510_000,
        call_oi_change: -8_000,
        put_oi_change: 22_000,
        call_iv,
        put_iv: call_iv + 0.6,
    }
}

fn print_outcome(outcome: &EvaluationOutcome) {
    println!("Recommendation: {:?}", outcome.recommendation);
    println!("Overall Score: {:.1}", outcome.overall_score);
    println!("Status: {:?} ({})", outcome.signal.status, outcome.signal.status_reason);
    if let Some(reason) = &outcome.rejection_reason {
        println!("Rejection Reason: {}", reason);
    }
    if let Some(exec) = &outcome.execution {
        println!("Execution:");
        println!("  Entry: {}", exec.entry_price);
        println!("  Target: {}", exec.target_price);
        println!("  Stop Loss: {}", exec.stop_loss);
        println!("  Quantity: {}", exec.quantity);
        println!("  Capital: {}", exec.capital_to_allocate);
        println!("  Risk: {}", exec.risk_amount);
    }
    println!("Stages:");
    println!("  Regime: {:.1}", outcome.analysis.regime.score);
    println!("  Price Action: {:.1}", outcome.analysis.price_action.score);
    println!("  Alignment: {:.1}", outcome.analysis.alignment.score);
    println!("  Volatility: {:.1}", outcome.analysis.volatility.score);
    println!(
        "  Writer Ratio: {:.1} (gate passed: {})",
        outcome.analysis.writer_ratio.score, outcome.analysis.writer_ratio.gate_passed
    );
    match &outcome.analysis.risk_regime {
        Some(r) => println!("  Risk Regime: {:.1} (allowed: {})", r.score, r.trading_allowed),
        None => println!("  Risk Regime: skipped"),
    }
    match &outcome.analysis.portfolio {
        Some(p) => println!("  Portfolio: {:.1} (allowed: {})", p.score, p.position_allowed),
        None => println!("  Portfolio: skipped"),
    }
    println!();
}
