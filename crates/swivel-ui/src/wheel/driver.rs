use swivel_core::{Debounced, SettleTimer};
use web_time::Duration;

use super::flags::ScrollFlags;
use super::surface::SharedSurface;
use super::{EXTERNAL_DEBOUNCE, PROGRAMMATIC_SETTLE, RETRY_DELAY, SCROLL_ANIMATION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ScrollRequest {
    pub index: usize,
    pub animated: bool,
}

/// The only component permitted to command the scroll surface.
///
/// Tap- and correction-driven commands go out immediately through
/// [`ScrollDriver::scroll_to`]; external index churn is funneled through a
/// latest-wins debouncer so intermediate targets are never animated through.
/// A command the surface rejects is retried once after a fixed delay and then
/// dropped — a missed visual update, never an error to the parent.
pub(super) struct ScrollDriver {
    surface: SharedSurface,
    item_height_px: f32,
    external: Debounced<ScrollRequest>,
    /// Clears the programmatic bracket after an animated command settles.
    completion: SettleTimer,
    retry: SettleTimer,
    retry_request: Option<ScrollRequest>,
}

impl ScrollDriver {
    pub fn new(surface: SharedSurface, item_height_px: f32) -> Self {
        Self {
            surface,
            item_height_px,
            external: Debounced::new(EXTERNAL_DEBOUNCE),
            completion: SettleTimer::new(),
            retry: SettleTimer::new(),
            retry_request: None,
        }
    }

    /// Queue an external-index-driven scroll; rapid calls collapse into the
    /// most recent target.
    pub fn request_external(&mut self, index: usize, animated: bool) {
        self.external.call(ScrollRequest { index, animated });
    }

    /// Requeue a debounced request that fired while the user was dragging;
    /// it re-applies after another quiet period.
    pub fn defer_external(&mut self, request: ScrollRequest) {
        self.external.call(request);
    }

    pub fn poll_external(&mut self) -> Option<ScrollRequest> {
        self.external.poll()
    }

    pub fn cancel_external(&mut self) {
        self.external.cancel();
    }

    /// Issue a scroll command now. `index` must already be clamped.
    pub fn scroll_to(&mut self, flags: &ScrollFlags, index: usize, animated: bool) {
        self.cancel_retry();
        self.issue(flags, ScrollRequest { index, animated }, true);
    }

    /// A superseded command's pending re-issue must not fire; drag-start in
    /// particular would otherwise see the retry land mid-drag.
    pub fn cancel_retry(&mut self) {
        self.retry.cancel();
        self.retry_request = None;
    }

    /// The in-flight animation's settlement becomes a no-op once the flags
    /// have moved on (drag-start, residual momentum-end).
    pub fn cancel_completion(&mut self) {
        self.completion.cancel();
    }

    /// Advance the driver's timers. Called from the owner's frame tick.
    pub fn tick(&mut self, flags: &ScrollFlags) {
        if self.completion.poll().is_some() {
            flags.end_programmatic();
        }
        if self.retry.poll().is_some()
            && let Some(request) = self.retry_request.take()
        {
            self.issue(flags, request, false);
        }
    }

    fn issue(&mut self, flags: &ScrollFlags, request: ScrollRequest, allow_retry: bool) {
        let offset_px = request.index as f32 * self.item_height_px;
        flags.begin_programmatic();

        match self.surface.scroll_to_offset(offset_px, request.animated) {
            Ok(()) => {
                if request.animated {
                    self.completion.arm(SCROLL_ANIMATION + PROGRAMMATIC_SETTLE);
                } else {
                    flags.end_programmatic();
                }
            }
            Err(e) => {
                // The bracket still times out on the animated path so a
                // failed command cannot wedge interactivity.
                if request.animated {
                    self.completion.arm(SCROLL_ANIMATION + PROGRAMMATIC_SETTLE);
                } else {
                    flags.end_programmatic();
                }
                if allow_retry {
                    log::debug!(
                        "scroll to index {} failed ({e}); retrying in {:?}",
                        request.index,
                        RETRY_DELAY
                    );
                    self.retry.arm(RETRY_DELAY);
                    self.retry_request = Some(request);
                } else {
                    log::debug!("scroll to index {} failed twice ({e}); giving up", request.index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::surface::RecordingSurface;
    use swivel_core::SurfaceError;
    use swivel_core::clock::{advance_test_now, clear_test_now, set_test_now};
    use web_time::Instant;

    fn setup() -> (std::rc::Rc<RecordingSurface>, ScrollDriver, ScrollFlags) {
        set_test_now(Instant::now());
        let surface = RecordingSurface::new();
        let driver = ScrollDriver::new(surface.clone(), 35.0);
        (surface, driver, ScrollFlags::new())
    }

    #[test]
    fn instant_scroll_brackets_synchronously() {
        let (surface, mut driver, flags) = setup();
        driver.scroll_to(&flags, 4, false);
        assert_eq!(*surface.commands.borrow(), vec![(140.0, false)]);
        assert!(!flags.is_programmatic());
        clear_test_now();
    }

    #[test]
    fn animated_scroll_holds_bracket_until_settle() {
        let (_, mut driver, flags) = setup();
        driver.scroll_to(&flags, 2, true);
        assert!(flags.is_programmatic());
        advance_test_now(Duration::from_millis(379));
        driver.tick(&flags);
        assert!(flags.is_programmatic());
        advance_test_now(Duration::from_millis(1));
        driver.tick(&flags);
        assert!(!flags.is_programmatic());
        clear_test_now();
    }

    #[test]
    fn failed_command_retries_once_then_gives_up() {
        let (surface, mut driver, flags) = setup();
        surface.fail_next(SurfaceError::TargetNotMeasured { offset_px: 350 });
        driver.scroll_to(&flags, 10, false);
        assert!(surface.commands.borrow().is_empty());

        advance_test_now(RETRY_DELAY);
        driver.tick(&flags);
        assert_eq!(*surface.commands.borrow(), vec![(350.0, false)]);

        // A double failure is dropped silently.
        let (surface, mut driver, flags) = setup();
        surface.fail_next(SurfaceError::TargetNotMeasured { offset_px: 350 });
        surface.fail_next(SurfaceError::TargetNotMeasured { offset_px: 350 });
        driver.scroll_to(&flags, 10, false);
        advance_test_now(RETRY_DELAY);
        driver.tick(&flags);
        advance_test_now(RETRY_DELAY);
        driver.tick(&flags);
        assert!(surface.commands.borrow().is_empty());
        assert!(!flags.is_programmatic());
        clear_test_now();
    }

    #[test]
    fn external_requests_collapse_to_latest() {
        let (_, mut driver, _) = setup();
        driver.request_external(2, true);
        advance_test_now(Duration::from_millis(100));
        driver.request_external(1, true);
        advance_test_now(Duration::from_millis(299));
        assert_eq!(driver.poll_external(), None);
        advance_test_now(Duration::from_millis(1));
        assert_eq!(
            driver.poll_external(),
            Some(ScrollRequest {
                index: 1,
                animated: true
            })
        );
        clear_test_now();
    }
}
