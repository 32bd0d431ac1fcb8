// src/store/state.rs
use crate::core::constants::{DEFAULT_REVEAL_DELAY_MS, DEFAULT_SWAP_DELAY_MS};
use crate::core::prelude::*;

/// What UI consumers observe. `is_changing_language` drives the overlay and
/// is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    pub language: LanguageCode,
    pub is_changing_language: bool,
}

impl LanguageState {
    pub fn idle(language: LanguageCode) -> Self {
        Self {
            language,
            is_changing_language: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Overlay hidden.
    Idle,
    /// Overlay shown, old language still active.
    PreSwap,
    /// Overlay shown, new language active behind it.
    PostSwap,
}

impl TransitionPhase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PreSwap => "pre-swap",
            Self::PostSwap => "post-swap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// From the request to the language swap.
    pub swap_delay: Duration,
    /// From the swap to hiding the overlay.
    pub reveal_delay: Duration,
}

impl TransitionTiming {
    pub fn from_config(config: &Config) -> Self {
        Self {
            swap_delay: config.swap_delay,
            reveal_delay: config.reveal_delay,
        }
    }

    pub fn total(&self) -> Duration {
        self.swap_delay + self.reveal_delay
    }
}

crate::impl_default!(TransitionTiming, TransitionTiming {
    swap_delay: Duration::from_millis(DEFAULT_SWAP_DELAY_MS),
    reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_overlay_window() {
        let timing = TransitionTiming::default();
        assert_eq!(timing.swap_delay, Duration::from_millis(100));
        assert_eq!(timing.total(), Duration::from_millis(1600));
    }

    #[test]
    fn timing_follows_config() {
        let mut config = Config::default();
        config.swap_delay = Duration::from_millis(5);
        config.reveal_delay = Duration::from_millis(20);
        let timing = TransitionTiming::from_config(&config);
        assert_eq!(timing.total(), Duration::from_millis(25));
    }
}
