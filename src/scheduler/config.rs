//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;

/// How the dispatch order is derived while the clock advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Sort the whole set once by the discipline's key, then run it in that
    /// order, idling the clock forward whenever the next process has not
    /// arrived yet.
    #[default]
    StaticSort,
    /// At every dispatch point, choose the best process among those that
    /// have already arrived; idle only when none has.
    ReadyQueue,
}

/// Scheduling engine settings.
///
/// Deserializable so a host can keep it in a JSON settings file; missing
/// fields take their defaults.
///
/// ```
/// use u_cpusched::scheduler::{DispatchMode, EngineConfig};
///
/// let config = EngineConfig::default().with_dispatch_mode(DispatchMode::ReadyQueue);
/// assert_eq!(config.dispatch_mode, DispatchMode::ReadyQueue);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Static sort or ready-queue dispatch.
    pub dispatch_mode: DispatchMode,
    /// Final tie-break for equal dispatch keys.
    pub tie_breaker: TieBreaker,
}

impl EngineConfig {
    /// Sets the dispatch mode.
    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.dispatch_mode = mode;
        self
    }

    /// Sets the tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.dispatch_mode, DispatchMode::StaticSort);
        assert_eq!(config.tie_breaker, TieBreaker::InputOrder);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default()
            .with_dispatch_mode(DispatchMode::ReadyQueue)
            .with_tie_breaker(TieBreaker::ById);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"dispatch_mode":"ready_queue","tie_breaker":"by_id"}"#
        );
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"tie_breaker":"by_id"}"#).unwrap();
        assert_eq!(config.dispatch_mode, DispatchMode::StaticSort);
        assert_eq!(config.tie_breaker, TieBreaker::ById);
    }
}
