use std::cell::Cell;

use swivel_core::{Signal, signal};

/// Single source of truth for *why* the viewport is moving.
///
/// `programmatic` is a signal so the view layer can mirror it into list
/// interactivity (drags are refused while the picker drives the position);
/// the mirror only reads, it never writes back. `user_scrolling` stays a
/// plain cell since nothing outside the decision loop observes it.
///
/// Steady state never has both flags set: a user drag-start forcibly clears
/// the programmatic flag before raising its own.
pub struct ScrollFlags {
    user_scrolling: Cell<bool>,
    programmatic: Signal<bool>,
}

impl Default for ScrollFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollFlags {
    pub fn new() -> Self {
        Self {
            user_scrolling: Cell::new(false),
            programmatic: signal(false),
        }
    }

    /// Drag-start: user input pre-empts any in-flight programmatic scroll.
    pub fn begin_user_scroll(&self) {
        self.user_scrolling.set(true);
        self.set_programmatic(false);
    }

    /// Momentum-end. Idempotent.
    pub fn end_user_scroll(&self) {
        self.user_scrolling.set(false);
    }

    pub fn begin_programmatic(&self) {
        self.set_programmatic(true);
    }

    pub fn end_programmatic(&self) {
        self.set_programmatic(false);
    }

    pub fn is_user_scrolling(&self) -> bool {
        self.user_scrolling.get()
    }

    pub fn is_programmatic(&self) -> bool {
        self.programmatic.get()
    }

    /// Handle for view-layer interactivity mirroring.
    pub fn programmatic_signal(&self) -> Signal<bool> {
        self.programmatic.clone()
    }

    fn set_programmatic(&self, v: bool) {
        // Only publish transitions; observers key off edges.
        if self.programmatic.get() != v {
            self.programmatic.set(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn drag_start_clears_programmatic() {
        let flags = ScrollFlags::new();
        flags.begin_programmatic();
        assert!(flags.is_programmatic());
        flags.begin_user_scroll();
        assert!(flags.is_user_scrolling());
        assert!(!flags.is_programmatic());
    }

    #[test]
    fn end_user_scroll_is_idempotent() {
        let flags = ScrollFlags::new();
        flags.begin_user_scroll();
        flags.end_user_scroll();
        flags.end_user_scroll();
        assert!(!flags.is_user_scrolling());
    }

    #[test]
    fn programmatic_signal_publishes_edges_only() {
        let flags = ScrollFlags::new();
        let edges = Rc::new(RefCell::new(Vec::new()));
        let e = edges.clone();
        flags.programmatic_signal().subscribe(move |v| e.borrow_mut().push(*v));

        flags.begin_programmatic();
        flags.begin_programmatic();
        flags.end_programmatic();
        flags.end_programmatic();
        assert_eq!(*edges.borrow(), vec![true, false]);
    }
}
