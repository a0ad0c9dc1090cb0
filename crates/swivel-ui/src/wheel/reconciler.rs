use swivel_core::SettleTimer;

use super::TAP_SETTLE;

/// Owns the authoritative selected index and the pending-tap record.
///
/// Every index that enters from outside (prop, tap, momentum arithmetic,
/// dataset mutation) passes through [`IndexReconciler::clamp`]; an
/// out-of-range value is a recoverable input, never a panic.
pub(super) struct IndexReconciler {
    selected: usize,
    data_len: usize,
    pending_tap: Option<usize>,
    tap_timer: SettleTimer,
}

impl IndexReconciler {
    pub fn new(initial: usize, data_len: usize) -> Self {
        let mut r = Self {
            selected: 0,
            data_len,
            pending_tap: None,
            tap_timer: SettleTimer::new(),
        };
        r.selected = r.clamp(initial);
        r
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn clamp(&self, index: usize) -> usize {
        if self.data_len == 0 {
            0
        } else {
            index.min(self.data_len - 1)
        }
    }

    /// Accept `index` as the authoritative selection. Callers clamp first.
    pub fn accept(&mut self, index: usize) {
        debug_assert!(index == self.clamp(index));
        self.selected = index;
    }

    /// Record a new dataset length. Growth never moves the selection; a
    /// shrink below it returns the clamped index the caller must correct to.
    pub fn set_data_len(&mut self, len: usize) -> Option<usize> {
        self.data_len = len;
        let clamped = self.clamp(self.selected);
        if clamped != self.selected {
            self.selected = clamped;
            Some(clamped)
        } else {
            None
        }
    }

    /// Begin a tap settlement for `index`, superseding any previous one.
    pub fn begin_tap(&mut self, index: usize) {
        self.pending_tap = Some(index);
        self.tap_timer.arm(TAP_SETTLE);
    }

    /// Drop the outstanding tap, if any, and disarm its timer. Used by
    /// drag-start and external prop changes, which both outrank a tap.
    pub fn cancel_pending_tap(&mut self) {
        self.pending_tap = None;
        self.tap_timer.cancel();
    }

    /// Settlement check: returns the tapped index once its timer has elapsed
    /// and nothing superseded it in the meantime. Re-arming replaces the
    /// deadline, so a superseded tap's expiry can never surface here.
    pub fn poll_tap(&mut self) -> Option<usize> {
        self.tap_timer.poll()?;
        self.pending_tap.take()
    }
}
