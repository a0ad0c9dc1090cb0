use std::rc::Rc;

/// Strength of an impact pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Haptic engine capability, provided by the platform shell.
///
/// Pulses are fire-and-forget: a platform that cannot vibrate returns an
/// error which callers ignore. Feedback never gates a logical state change.
pub trait Haptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), crate::SurfaceError>;
}

pub type SharedHaptics = Rc<dyn Haptics>;

/// Default engine for hosts without a vibration motor.
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), crate::SurfaceError> {
        Ok(())
    }
}

/// Trigger a pulse and swallow any failure, logging at debug level.
pub fn pulse(haptics: &dyn Haptics, style: ImpactStyle) {
    if let Err(e) = haptics.impact(style) {
        log::debug!("haptic pulse dropped: {e}");
    }
}
