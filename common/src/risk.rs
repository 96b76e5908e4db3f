// Risk Context Snapshot
// Session, calendar and market-stress inputs for the risk-regime stage

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use rust_decimal::Decimal;

/// Session/time/volume/event state at evaluation time
#[derive(Debug, Clone)]
pub struct RiskContext {
    /// Trading session open (exchange local time)
    pub session_open: NaiveTime,
    /// Trading session close (exchange local time)
    pub session_close: NaiveTime,
    /// Instant the evaluation was requested
    pub evaluated_at: DateTime<Utc>,
    /// True when the contract expires today
    pub is_expiry_day: bool,
    /// Known upcoming events (policy announcements, earnings, ...)
    pub upcoming_events: Vec<String>,
    /// Traded volume so far in the session
    pub current_volume: Decimal,
    /// Average session volume over the lookback window
    pub average_volume: Decimal,
    /// True when an exchange circuit breaker is active
    pub circuit_breaker_active: bool,
    /// Day of week of the session
    pub day_of_week: Weekday,
}
