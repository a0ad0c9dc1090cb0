use std::rc::Rc;

use swivel_core::{ImpactStyle, SharedHaptics, haptics};

pub type OnChange<T> = Rc<dyn Fn(&T, usize)>;

/// Sole caller of the outward `on_change` callback and the settle haptic.
///
/// Deliveries are queued rather than invoked in place: the owner drains the
/// queue once its own mutable borrow is released, so a parent reacting to
/// `on_change` may immediately push a new index back in without re-entering
/// the decision loop mid-mutation. The haptic pulse still fires at
/// transition time; it is fire-and-forget and never gates the report.
pub(super) struct ChangeNotifier<T> {
    on_change: OnChange<T>,
    haptics: SharedHaptics,
    last_reported: Option<usize>,
    queued: Vec<(T, usize)>,
}

impl<T: Clone> ChangeNotifier<T> {
    /// `initial` primes the dedup so the first settle from the mount prop is
    /// never reported as a change.
    pub fn new(on_change: OnChange<T>, haptics: SharedHaptics, initial: usize) -> Self {
        Self {
            on_change,
            haptics,
            last_reported: Some(initial),
            queued: Vec::new(),
        }
    }

    /// Queue a report for `index`, unless it matches the last reported value
    /// or falls outside `data`.
    pub fn report(&mut self, data: &[T], index: usize) {
        if index >= data.len() || self.last_reported == Some(index) {
            return;
        }
        self.last_reported = Some(index);
        haptics::pulse(&*self.haptics, ImpactStyle::Light);
        self.queued.push((data[index].clone(), index));
    }

    /// Deliver everything queued since the last flush. Called with no borrow
    /// of the picker state held.
    pub fn take_queued(&mut self) -> Vec<(T, usize)> {
        std::mem::take(&mut self.queued)
    }

    pub fn callback(&self) -> OnChange<T> {
        self.on_change.clone()
    }
}
