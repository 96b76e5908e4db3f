// Signal Storage Interface
// Append-only persistence of signal records for audit and backtesting

use crate::error::StorageError;
use crate::signal::{Signal, SignalStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Trait for signal storage backends. Records are append-only: `save` must
/// never overwrite an existing record, and concurrent saves of distinct
/// signals need no cross-evaluation coordination.
#[async_trait::async_trait]
pub trait SignalStorage: Send + Sync {
    /// Persist a signal and return the stored record
    async fn save(&self, signal: &Signal) -> Result<Signal, StorageError>;

    /// Retrieve a signal by ID
    async fn get(&self, signal_id: Uuid) -> Result<Option<Signal>, StorageError>;

    /// Retrieve all signals for a symbol
    async fn get_by_symbol(&self, symbol: &str) -> Result<Vec<Signal>, StorageError>;

    /// Retrieve signals by persisted status
    async fn get_by_status(&self, status: SignalStatus) -> Result<Vec<Signal>, StorageError>;

    /// Retrieve signals within a time range
    async fn get_by_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Signal>, StorageError>;

    /// Get all signals (use with caution)
    async fn get_all(&self) -> Result<Vec<Signal>, StorageError>;

    /// Get storage statistics
    async fn stats(&self) -> Result<StorageStats, StorageError>;
}

/// Storage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageStats {
    pub total_signals: usize,
    pub signals_by_status: HashMap<String, usize>,
    pub oldest_signal: Option<DateTime<Utc>>,
    pub newest_signal: Option<DateTime<Utc>>,
}

/// In-memory signal storage (for testing and development)
pub struct InMemorySignalStorage {
    signals: tokio::sync::RwLock<HashMap<Uuid, Signal>>,
}

impl InMemorySignalStorage {
    pub fn new() -> Self {
        Self {
            signals: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySignalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SignalStorage for InMemorySignalStorage {
    async fn save(&self, signal: &Signal) -> Result<Signal, StorageError> {
        let mut signals = self.signals.write().await;
        if signals.contains_key(&signal.id) {
            return Err(StorageError::Duplicate(signal.id));
        }
        signals.insert(signal.id, signal.clone());
        Ok(signal.clone())
    }

    async fn get(&self, signal_id: Uuid) -> Result<Option<Signal>, StorageError> {
        let signals = self.signals.read().await;
        Ok(signals.get(&signal_id).cloned())
    }

    async fn get_by_symbol(&self, symbol: &str) -> Result<Vec<Signal>, StorageError> {
        let signals = self.signals.read().await;
        let matching = signals
            .values()
            .filter(|s| s.instrument.symbol == symbol)
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn get_by_status(&self, status: SignalStatus) -> Result<Vec<Signal>, StorageError> {
        let signals = self.signals.read().await;
        let matching = signals
            .values()
            .filter(|s| s.status == status)
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn get_by_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Signal>, StorageError> {
        let signals = self.signals.read().await;
        let matching = signals
            .values()
            .filter(|s| s.created_at >= start && s.created_at <= end)
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn get_all(&self) -> Result<Vec<Signal>, StorageError> {
        let signals = self.signals.read().await;
        Ok(signals.values().cloned().collect())
    }

    async fn stats(&self) -> Result<StorageStats, StorageError> {
        let signals = self.signals.read().await;

        let mut signals_by_status = HashMap::new();
        let mut oldest_signal = None;
        let mut newest_signal = None;

        for signal in signals.values() {
            let status_name = format!("{:?}", signal.status);
            *signals_by_status.entry(status_name).or_insert(0) += 1;

            if oldest_signal.is_none() || Some(signal.created_at) < oldest_signal {
                oldest_signal = Some(signal.created_at);
            }
            if newest_signal.is_none() || Some(signal.created_at) > newest_signal {
                newest_signal = Some(signal.created_at);
            }
        }

        Ok(StorageStats {
            total_signals: signals.len(),
            signals_by_status,
            oldest_signal,
            newest_signal,
        })
    }
}
