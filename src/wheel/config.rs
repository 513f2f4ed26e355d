use std::time::Duration;

use crate::error::{Result, WheelError};
use crate::wheel::constants::{
    DEFAULT_FRAME_MS, DEFAULT_MAX_TURNS, DEFAULT_MIN_TURNS, DEFAULT_PULSE_MS, DEFAULT_SPIN_MS,
};

/// Presentation timing for a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    /// How long the wheel takes to come to rest.
    pub spin_duration: Duration,

    /// How long the winning sector pulses before the spin settles.
    pub pulse_duration: Duration,

    /// Minimum number of full turns per spin.
    pub min_turns: u32,

    /// Maximum number of full turns per spin (inclusive).
    pub max_turns: u32,

    /// Delay between frames when driving the animation in real time.
    pub frame_interval: Duration,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            spin_duration: Duration::from_millis(DEFAULT_SPIN_MS),
            pulse_duration: Duration::from_millis(DEFAULT_PULSE_MS),
            min_turns: DEFAULT_MIN_TURNS,
            max_turns: DEFAULT_MAX_TURNS,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<()> {
        if self.spin_duration.is_zero() {
            return Err(WheelError::InvalidConfig(
                "spin duration must be greater than zero".to_string(),
            ));
        }
        if self.pulse_duration.is_zero() {
            return Err(WheelError::InvalidConfig(
                "pulse duration must be greater than zero".to_string(),
            ));
        }
        if self.frame_interval.is_zero() {
            return Err(WheelError::InvalidConfig(
                "frame interval must be greater than zero".to_string(),
            ));
        }
        if self.min_turns == 0 || self.min_turns > self.max_turns {
            return Err(WheelError::InvalidConfig(format!(
                "turn range {}..={} is empty or starts at zero",
                self.min_turns, self.max_turns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SpinConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_turn_range() {
        let config = SpinConfig {
            min_turns: 9,
            max_turns: 8,
            ..SpinConfig::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_durations() {
        let config = SpinConfig {
            spin_duration: Duration::ZERO,
            ..SpinConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SpinConfig {
            pulse_duration: Duration::ZERO,
            ..SpinConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
