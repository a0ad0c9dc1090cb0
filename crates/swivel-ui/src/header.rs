//! Screen header slots. A screen installs its header into a registry owned
//! by the app shell; the shell renders whatever is currently installed and
//! exposes the measured height so content can pad itself below an absolute
//! header.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use swivel_core::{Modifier, Signal, View, ViewKind, signal, theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderSlot {
    Default,
    Absolute,
}

#[derive(Clone)]
pub struct HeaderRegistry {
    slots: Rc<RefCell<HashMap<HeaderSlot, View>>>,
    height: Signal<f32>,
}

impl Default for HeaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRegistry {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(HashMap::new())),
            height: signal(0.0),
        }
    }

    /// Screens install on focus and clear on blur; a later install replaces
    /// the previous occupant of the slot.
    pub fn install(&self, slot: HeaderSlot, view: View) {
        self.slots.borrow_mut().insert(slot, view);
    }

    pub fn clear(&self, slot: HeaderSlot) {
        self.slots.borrow_mut().remove(&slot);
    }

    pub fn take_current(&self, slot: HeaderSlot) -> Option<View> {
        self.slots.borrow_mut().remove(&slot)
    }

    pub fn is_installed(&self, slot: HeaderSlot) -> bool {
        self.slots.borrow().contains_key(&slot)
    }

    /// Measured height of the rendered header, fed back by the layout pass.
    pub fn set_height(&self, h: f32) {
        if self.height.get() != h {
            self.height.set(h);
        }
    }

    pub fn height(&self) -> f32 {
        self.height.get()
    }

    pub fn height_signal(&self) -> Signal<f32> {
        self.height.clone()
    }
}

/// Build a header bar and install it into `registry`.
#[allow(non_snake_case)]
pub fn Header(registry: &HeaderRegistry, slot: HeaderSlot, content: View) -> View {
    let bar = View::new(ViewKind::Column)
        .modifier(
            Modifier::new()
                .fill_max_width()
                .padding_values(swivel_core::PaddingValues {
                    bottom: 24.0,
                    ..Default::default()
                })
                .background(theme().background.with_alpha(230)),
        )
        .child(content);
    registry.install(slot, bar);
    // The screen's own subtree contributes nothing at the call site.
    View::new(ViewKind::Box)
}

/// Placeholder matching the current header height plus `extra`, so scrolling
/// content starts below an absolute header.
#[allow(non_snake_case)]
pub fn HeaderSpacer(registry: &HeaderRegistry, extra: f32) -> View {
    View::new(ViewKind::Box)
        .modifier(Modifier::new().fill_max_width().height(registry.height() + extra))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_replaces_and_clear_empties() {
        let reg = HeaderRegistry::new();
        assert!(!reg.is_installed(HeaderSlot::Default));

        Header(&reg, HeaderSlot::Default, View::new(ViewKind::Box));
        assert!(reg.is_installed(HeaderSlot::Default));
        assert!(!reg.is_installed(HeaderSlot::Absolute));

        Header(&reg, HeaderSlot::Default, View::new(ViewKind::Row));
        let v = reg.take_current(HeaderSlot::Default).unwrap();
        assert!(matches!(v.kind, ViewKind::Column));

        reg.clear(HeaderSlot::Default);
        assert!(!reg.is_installed(HeaderSlot::Default));
    }

    #[test]
    fn spacer_tracks_measured_height() {
        let reg = HeaderRegistry::new();
        reg.set_height(64.0);
        let spacer = HeaderSpacer(&reg, 8.0);
        assert_eq!(spacer.modifier.height, Some(72.0));
    }
}
