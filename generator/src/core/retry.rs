//! Retry policy with randomized exponential backoff

use std::time::Duration;
use rand::Rng;

/// Bounded retry schedule for calls to the text provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Lower bound for every wait
    pub min_delay: Duration,
    /// Upper bound for every wait
    pub max_delay: Duration,
    /// Base of the exponential ceiling (`multiplier * 2^(attempt - 1)`)
    pub multiplier: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            multiplier: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Policy with millisecond-scale waits, for tests and local tooling
    pub fn fast(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            multiplier: Duration::from_millis(1),
        }
    }

    /// Upper bound of the wait after the given failed attempt (1-based)
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let ceiling = self.multiplier.saturating_mul(1u32 << exponent);
        ceiling.clamp(self.min_delay, self.max_delay.max(self.min_delay))
    }

    /// Randomized wait after the given failed attempt, within `[min_delay, ceiling]`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let low = self.min_delay.as_millis() as u64;
        let high = self.backoff_ceiling(attempt).as_millis() as u64;
        if high <= low {
            return Duration::from_millis(low);
        }
        Duration::from_millis(rand::thread_rng().gen_range(low..=high))
    }

    /// Whether another attempt is allowed after `attempt` failures
    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

/// Progress of one bounded attempt sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Attempting(u32),
    Succeeded(u32),
    Exhausted(u32),
}

impl AttemptState {
    /// Begin the first attempt
    pub fn start(self) -> Self {
        match self {
            AttemptState::Idle => AttemptState::Attempting(1),
            other => other,
        }
    }

    /// Record the outcome of the current attempt
    pub fn record(self, succeeded: bool, policy: &RetryPolicy) -> Self {
        match self {
            AttemptState::Attempting(n) if succeeded => AttemptState::Succeeded(n),
            AttemptState::Attempting(n) if policy.allows_retry_after(n) => AttemptState::Attempting(n + 1),
            AttemptState::Attempting(n) => AttemptState::Exhausted(n),
            other => other,
        }
    }
}
