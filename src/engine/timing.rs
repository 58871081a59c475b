//! Per-session timing derived from the words-per-minute rate.

use crate::engine::config::WARM_UP_MS;
use crate::engine::error::EngineError;

/// Immutable timing parameters for one playback session.
///
/// Built once from the effective WPM before any renderer work starts and
/// never mutated afterwards; the scheduler only reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    wpm: u32,
    warm_up_ms: u64,
}

impl SessionParams {
    /// Rejects a zero rate before any scheduling can happen. Negative
    /// rates are unrepresentable at the type level.
    pub fn new(wpm: u32) -> Result<Self, EngineError> {
        if wpm == 0 {
            return Err(EngineError::InvalidRate(wpm));
        }
        Ok(Self {
            wpm,
            warm_up_ms: WARM_UP_MS,
        })
    }

    /// Overrides the fixed warm-up delay (tests drive this to zero).
    pub fn with_warm_up(mut self, warm_up_ms: u64) -> Self {
        self.warm_up_ms = warm_up_ms;
        self
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn seconds_per_unit(&self) -> f64 {
        60.0 / self.wpm as f64
    }

    /// Per-unit display duration, rounded rather than truncated so rates
    /// like 165 WPM don't drift a millisecond short on every word.
    pub fn millis_per_unit(&self) -> u64 {
        (self.seconds_per_unit() * 1000.0).round() as u64
    }

    pub fn warm_up_ms(&self) -> u64 {
        self.warm_up_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_300_wpm_is_200ms() {
        let params = SessionParams::new(300).unwrap();
        assert_eq!(params.seconds_per_unit(), 0.2);
        assert_eq!(params.millis_per_unit(), 200);
    }

    #[test]
    fn test_600_wpm_is_100ms() {
        let params = SessionParams::new(600).unwrap();
        assert_eq!(params.millis_per_unit(), 100);
    }

    #[test]
    fn test_165_wpm_rounds_up() {
        // 60,000 / 165 = 363.636...; truncation would give 363
        let params = SessionParams::new(165).unwrap();
        assert_eq!(params.millis_per_unit(), 364);
    }

    #[test]
    fn test_350_wpm_rounds_down() {
        // 60,000 / 350 = 171.428...
        let params = SessionParams::new(350).unwrap();
        assert_eq!(params.millis_per_unit(), 171);
    }

    #[test]
    fn test_zero_wpm_is_rejected() {
        assert!(matches!(
            SessionParams::new(0),
            Err(EngineError::InvalidRate(0))
        ));
    }

    #[test]
    fn test_default_warm_up_is_fixed() {
        let params = SessionParams::new(300).unwrap();
        assert_eq!(params.warm_up_ms(), 1500);
        let fast = SessionParams::new(900).unwrap();
        assert_eq!(fast.warm_up_ms(), 1500);
    }

    #[test]
    fn test_warm_up_override() {
        let params = SessionParams::new(300).unwrap().with_warm_up(0);
        assert_eq!(params.warm_up_ms(), 0);
    }
}
