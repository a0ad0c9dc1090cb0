use thiserror::Error;

/// Failures reported by platform capability surfaces (scroll host, haptic
/// engine). These never propagate out of a component: callers recover with a
/// bounded retry, a clamp, or by dropping the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The scroll target has not been measured/laid out yet.
    #[error("scroll target not yet measured (offset {offset_px}px)")]
    TargetNotMeasured { offset_px: i64 },

    /// The host rejected or cannot perform the request.
    #[error("capability unavailable: {0}")]
    Unavailable(&'static str),
}
