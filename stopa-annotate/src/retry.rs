//! Bounded retry with a fixed delay

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// How many times to try and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, at least one is always made
    pub attempts: u32,
    /// Pause between two attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Policy with the given attempts and delay
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts,
            delay_ms: delay.as_millis() as u64,
        }
    }

    /// Single attempt, no waiting
    pub fn once() -> Self {
        Self {
            attempts: 1,
            delay_ms: 0,
        }
    }

    /// Pause between attempts
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Run `op` until it succeeds or the attempts are used up
    ///
    /// `op` receives the 1-based attempt number. Failures are logged; after
    /// the last one the result is `None`.
    pub fn run<T, E, F>(&self, what: &str, mut op: F) -> Option<T>
    where
        E: Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let attempts = self.attempts.max(1);

        for attempt in 1..=attempts {
            match op(attempt) {
                Ok(value) => return Some(value),
                Err(e) => {
                    log::debug!("{what}: attempt {attempt}/{attempts} failed: {e}");
                    if attempt < attempts && self.delay_ms > 0 {
                        thread::sleep(self.delay());
                    }
                }
            }
        }

        log::warn!("{what}: giving up after {attempts} attempts");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_on_first_success() {
        let policy = RetryPolicy::new(5, Duration::ZERO);
        let mut calls = 0;
        let result = policy.run("test", |attempt| {
            calls += 1;
            if attempt < 2 {
                Err("not yet")
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result, Some(2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_gives_up_after_all_attempts() {
        let policy = RetryPolicy::new(3, Duration::ZERO);
        let mut calls = 0;
        let result: Option<()> = policy.run("test", |_| {
            calls += 1;
            Err("never")
        });
        assert_eq!(result, None);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        let mut calls = 0;
        let _: Option<()> = policy.run("test", |_| {
            calls += 1;
            Err("never")
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_once_makes_a_single_attempt() {
        let policy = RetryPolicy::once();
        assert_eq!(policy.delay(), Duration::ZERO);

        let mut calls = 0;
        let result: Option<()> = policy.run("test", |_| {
            calls += 1;
            Err("never")
        });
        assert_eq!(result, None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_waits_between_attempts_only() {
        let policy = RetryPolicy::new(3, Duration::from_millis(20));
        let start = std::time::Instant::now();
        let _: Option<()> = policy.run("test", |_| Err("never"));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(40));
        assert!(elapsed < Duration::from_millis(1000));
    }

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 3);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }
}
