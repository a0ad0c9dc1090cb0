//! Cancellable one-shot timers and debouncing.
//!
//! Timers here are plain deadline records driven by an explicit `poll()` from
//! the owner's frame tick. Nothing runs on a background thread, so dropping
//! the owner drops its timers and a stale callback can never fire after
//! teardown. Each arm() bumps a generation counter; the token from an older
//! arm() can no longer match, which makes supersession races impossible by
//! construction.

use web_time::{Duration, Instant};

use crate::clock;

/// Generation handed out by [`SettleTimer::arm`]. Compare it against the
/// generation reported on expiry to detect stale wakeups.
pub type TimerGen = u64;

/// One-shot deadline with generation guarding.
#[derive(Debug, Default)]
pub struct SettleTimer {
    deadline: Option<Instant>,
    generation: TimerGen,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer. Any previously armed deadline is superseded.
    pub fn arm(&mut self, delay: Duration) -> TimerGen {
        self.generation += 1;
        self.deadline = Some(clock::now() + delay);
        self.generation
    }

    /// Disarm without firing. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the generation of the expired deadline, once, if it is due.
    pub fn poll(&mut self) -> Option<TimerGen> {
        match self.deadline {
            Some(d) if clock::now() >= d => {
                self.deadline = None;
                Some(self.generation)
            }
            _ => None,
        }
    }

    /// Current generation; a token below this is stale.
    pub fn generation(&self) -> TimerGen {
        self.generation
    }
}

/// Latest-wins debouncer: rapid calls collapse into one payload delivered
/// after a quiet period. Intermediate payloads are dropped, never delivered.
#[derive(Debug)]
pub struct Debounced<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `payload`, replacing any pending one and restarting the quiet
    /// period.
    pub fn call(&mut self, payload: T) {
        self.pending = Some((clock::now() + self.delay, payload));
    }

    /// Drop the pending payload, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the payload once its quiet period has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if clock::now() >= *deadline => {
                self.pending.take().map(|(_, p)| p)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{advance_test_now, clear_test_now, set_test_now};

    #[test]
    fn settle_timer_fires_once_after_delay() {
        set_test_now(Instant::now());
        let mut t = SettleTimer::new();
        let g = t.arm(Duration::from_millis(350));
        assert_eq!(t.poll(), None);
        advance_test_now(Duration::from_millis(349));
        assert_eq!(t.poll(), None);
        advance_test_now(Duration::from_millis(1));
        assert_eq!(t.poll(), Some(g));
        assert_eq!(t.poll(), None);
        clear_test_now();
    }

    #[test]
    fn rearm_supersedes_previous_generation() {
        set_test_now(Instant::now());
        let mut t = SettleTimer::new();
        let first = t.arm(Duration::from_millis(100));
        advance_test_now(Duration::from_millis(50));
        let second = t.arm(Duration::from_millis(100));
        advance_test_now(Duration::from_millis(100));
        let fired = t.poll();
        assert_eq!(fired, Some(second));
        assert_ne!(fired, Some(first));
        clear_test_now();
    }

    #[test]
    fn cancel_disarms() {
        set_test_now(Instant::now());
        let mut t = SettleTimer::new();
        t.arm(Duration::from_millis(10));
        t.cancel();
        advance_test_now(Duration::from_millis(20));
        assert_eq!(t.poll(), None);
        clear_test_now();
    }

    #[test]
    fn debounce_keeps_only_latest() {
        set_test_now(Instant::now());
        let mut d = Debounced::new(Duration::from_millis(300));
        d.call(2);
        advance_test_now(Duration::from_millis(100));
        d.call(1);
        advance_test_now(Duration::from_millis(299));
        assert_eq!(d.poll(), None);
        advance_test_now(Duration::from_millis(1));
        assert_eq!(d.poll(), Some(1));
        assert_eq!(d.poll(), None);
        clear_test_now();
    }

    #[test]
    fn debounce_cancel_drops_payload() {
        set_test_now(Instant::now());
        let mut d = Debounced::new(Duration::from_millis(300));
        d.call("x");
        d.cancel();
        advance_test_now(Duration::from_millis(400));
        assert_eq!(d.poll(), None);
        clear_test_now();
    }
}
