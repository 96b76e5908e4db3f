// Engine Configuration
// All weights, thresholds and bands the orchestrator branches on, exposed as
// explicit configuration so backtests can run alternate parameterizations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-stage weights for the overall score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageWeights {
    pub regime: f64,
    pub price_action: f64,
    pub alignment: f64,
    pub volatility: f64,
    /// The gatekeeper stage stays double-weighted even after it has passed
    pub writer_ratio: f64,
    pub risk_regime: f64,
    pub portfolio: f64,
}

impl Default for StageWeights {
    fn default() -> Self {
        Self {
            regime: 1.0,
            price_action: 1.0,
            alignment: 1.0,
            volatility: 1.0,
            writer_ratio: 2.0,
            risk_regime: 1.0,
            portfolio: 1.0,
        }
    }
}

impl StageWeights {
    /// Sum of all stage weights
    pub fn total(&self) -> f64 {
        self.regime
            + self.price_action
            + self.alignment
            + self.volatility
            + self.writer_ratio
            + self.risk_regime
            + self.portfolio
    }

    /// Weighted mean of the seven stage scores
    #[allow(clippy::too_many_arguments)]
    pub fn weighted_mean(
        &self,
        regime: f64,
        price_action: f64,
        alignment: f64,
        volatility: f64,
        writer_ratio: f64,
        risk_regime: f64,
        portfolio: f64,
    ) -> f64 {
        let weighted = self.regime * regime
            + self.price_action * price_action
            + self.alignment * alignment
            + self.volatility * volatility
            + self.writer_ratio * writer_ratio
            + self.risk_regime * risk_regime
            + self.portfolio * portfolio;
        weighted / self.total()
    }
}

/// Configuration for the signal engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Overall score at or above which a signal is approved for execution
    pub execute_threshold: f64,

    /// Overall score at or above which the engine waits instead of rejecting
    pub wait_threshold: f64,

    /// Minimum dominant-writer open-interest ratio for the gate to pass
    /// (consumed by writer-ratio scorer implementations)
    pub min_writer_ratio: f64,

    /// Stop-loss distance from entry (e.g. 0.02 = 2%)
    pub stop_loss_pct: Decimal,

    /// Target distance from entry (e.g. 0.05 = 5%)
    pub target_pct: Decimal,

    /// ATM implied volatility (percent) used when the ATM strike is missing
    /// from the chain
    pub default_atm_iv: f64,

    /// Per-stage weights for the overall score
    pub weights: StageWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execute_threshold: 70.0,
            wait_threshold: 50.0,
            min_writer_ratio: 2.5,
            stop_loss_pct: Decimal::from_str_exact("0.02").unwrap(), // 2%
            target_pct: Decimal::from_str_exact("0.05").unwrap(),    // 5%
            default_atm_iv: 20.0,
            weights: StageWeights::default(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> anyhow::Result<EngineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: EngineConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to TOML file
pub fn save_config(config: &EngineConfig, path: &str) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
