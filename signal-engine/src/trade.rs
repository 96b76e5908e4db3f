// Trade Parameter Derivation
// Fixed-band stop/target around entry and the ATM implied-volatility lookup

use crate::config::EngineConfig;
use common::{Instrument, OptionChainSnapshot, TradeDirection};
use rust_decimal::Decimal;
use tracing::debug;

/// Trade the engine proposes before sizing: entry at spot, stop and target at
/// fixed percentage bands in the signal's direction
#[derive(Debug, Clone)]
pub struct ProposedTrade {
    pub symbol: String,
    pub direction: TradeDirection,
    pub entry: Decimal,
    pub target: Decimal,
    pub stop_loss: Decimal,
}

/// Build the proposed trade for an instrument at the current spot price
pub fn propose(instrument: &Instrument, spot: Decimal, config: &EngineConfig) -> ProposedTrade {
    let (stop_loss, target) = derive_stops(
        instrument.direction,
        spot,
        config.stop_loss_pct,
        config.target_pct,
    );
    ProposedTrade {
        symbol: instrument.symbol.clone(),
        direction: instrument.direction,
        entry: spot,
        target,
        stop_loss,
    }
}

/// Stop and target at fixed percentage distances from entry. The bands are
/// configuration, not derived from price-action zones: with a 2% stop and a
/// 5% target the implied reward-to-risk is 2.5:1.
pub fn derive_stops(
    direction: TradeDirection,
    entry: Decimal,
    stop_pct: Decimal,
    target_pct: Decimal,
) -> (Decimal, Decimal) {
    match direction {
        TradeDirection::Bullish => (
            entry * (Decimal::ONE - stop_pct),
            entry * (Decimal::ONE + target_pct),
        ),
        TradeDirection::Bearish => (
            entry * (Decimal::ONE + stop_pct),
            entry * (Decimal::ONE - target_pct),
        ),
    }
}

/// Call-side implied volatility at the ATM strike. A lookup miss is a
/// documented fallback to the configured default, not an error.
pub fn resolve_atm_iv(chain: &OptionChainSnapshot, default_iv: f64) -> f64 {
    match chain.call_iv_at(chain.atm_strike) {
        Some(iv) => iv,
        None => {
            debug!(
                "ATM strike {} not found in chain, using default IV {:.1}%",
                chain.atm_strike, default_iv
            );
            default_iv
        }
    }
}
