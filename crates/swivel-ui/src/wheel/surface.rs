use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::SurfaceError;

/// Host scroll surface the picker issues commands against.
///
/// This is the only write path to the visual scroll position. The host's
/// continuous offset updates and gesture lifecycle flow back in through
/// [`super::WheelPickerState`]'s handler methods.
pub trait ScrollSurface {
    /// Move the list viewport to `offset_px`, optionally animated. Fails with
    /// [`SurfaceError::TargetNotMeasured`] when the target row has no layout
    /// yet; callers retry once and then drop the command.
    fn scroll_to_offset(&self, offset_px: f32, animated: bool) -> Result<(), SurfaceError>;
}

pub type SharedSurface = Rc<dyn ScrollSurface>;

/// Surface that records every command, for tests and headless hosts.
#[derive(Default)]
pub struct RecordingSurface {
    pub commands: RefCell<Vec<(f32, bool)>>,
    /// Pre-programmed failures, consumed front-to-back before any success.
    pub failures: RefCell<Vec<SurfaceError>>,
}

impl RecordingSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn fail_next(&self, err: SurfaceError) {
        self.failures.borrow_mut().push(err);
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to_offset(&self, offset_px: f32, animated: bool) -> Result<(), SurfaceError> {
        if !self.failures.borrow().is_empty() {
            return Err(self.failures.borrow_mut().remove(0));
        }
        self.commands.borrow_mut().push((offset_px, animated));
        Ok(())
    }
}
