use std::sync::OnceLock;
use web_time::Instant;

/// Time source for animations and timers.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

static CLOCK: OnceLock<Box<dyn Clock>> = OnceLock::new();

thread_local! {
    static TEST_CLOCK: std::cell::RefCell<Option<Instant>> = const { std::cell::RefCell::new(None) };
}

pub(crate) fn now() -> Instant {
    if let Some(t) = TEST_CLOCK.with(|c| *c.borrow()) {
        return t;
    }
    CLOCK.get().map(|c| c.now()).unwrap_or_else(Instant::now)
}

/// Install a global clock. The platform sets SystemClock; installing twice is a no-op.
pub fn set_clock(clock: Box<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

/// Install the default system clock if none present (idempotent).
pub fn ensure_system_clock() {
    let _ = CLOCK.set(Box::new(SystemClock));
}

/// Pin the current thread to a fixed test instant. Timers and animations on
/// this thread read the pinned time until it is advanced or cleared.
pub fn set_test_now(t: Instant) {
    TEST_CLOCK.with(|c| *c.borrow_mut() = Some(t));
}

/// Advance the pinned test time. Panics in tests that never pinned one.
pub fn advance_test_now(by: web_time::Duration) {
    TEST_CLOCK.with(|c| {
        let mut c = c.borrow_mut();
        let base = c.expect("advance_test_now called without set_test_now");
        *c = Some(base + by);
    });
}

/// Drop the thread-local test time and fall back to the installed clock.
pub fn clear_test_now() {
    TEST_CLOCK.with(|c| *c.borrow_mut() = None);
}
