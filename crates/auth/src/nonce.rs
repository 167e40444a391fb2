//! Millisecond nonce generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// A clock set before the epoch reads as 0; the generator then falls back to
/// its `last + 1` sequence.
pub fn now_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as u64,
        Err(e) => {
            tracing::warn!(
                behind_ms = e.duration().as_millis() as u64,
                "System clock is before the Unix epoch, nonce falls back to 0"
            );
            0
        }
    }
}

/// Generates wall-clock derived nonces that strictly increase within the
/// process.
///
/// Each call yields `max(now_ms, last + 1)`, so two requests signed in the
/// same millisecond still receive distinct nonces. Nothing is persisted; after
/// a restart the sequence resumes from the wall clock.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the nonce for a single request attempt.
    pub fn next(&self) -> u64 {
        self.next_at(now_ms())
    }

    /// The most recently issued nonce, or 0 if none was issued yet.
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }

    fn next_at(&self, now: u64) -> u64 {
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_follows_wall_clock() {
        let before = now_ms();
        let nonce = NonceGenerator::new().next();
        let after = now_ms();

        assert!(nonce >= before && nonce <= after);
    }

    #[test]
    fn test_strictly_increasing_across_milliseconds() {
        let generator = NonceGenerator::new();

        let first = generator.next();
        std::thread::sleep(Duration::from_millis(2));
        let second = generator.next();

        assert!(second > first);
    }

    #[test]
    fn test_same_millisecond_tiebreak() {
        let generator = NonceGenerator::new();

        assert_eq!(generator.next_at(1_000), 1_000);
        assert_eq!(generator.next_at(1_000), 1_001);
        assert_eq!(generator.next_at(1_000), 1_002);
        assert_eq!(generator.last(), 1_002);
    }

    #[test]
    fn test_clock_step_back_does_not_repeat() {
        let generator = NonceGenerator::new();

        generator.next_at(5_000);
        assert_eq!(generator.next_at(4_000), 5_001);
        assert_eq!(generator.next_at(6_000), 6_000);
    }

    #[test]
    fn test_pre_epoch_clock_still_increases() {
        let generator = NonceGenerator::new();

        assert_eq!(generator.next_at(0), 1);
        assert_eq!(generator.next_at(0), 2);
    }

    #[test]
    fn test_concurrent_nonces_are_unique() {
        let generator = Arc::new(NonceGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || (0..250).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();

        assert_eq!(all.len(), total);
    }
}
