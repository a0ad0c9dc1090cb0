//! Linear and circular progress indicators.

use std::rc::Rc;

use swivel_core::{
    AnimatedValue, AnimationSpec, Brush, Easing, Modifier, Vec2, View, ViewKind, theme,
};
use web_time::Duration;

/// Segmented progress bar. `value` is measured against `max_value`
/// (100 when absent). Hosts that want the fill tweened drive `value`
/// through an [`AnimatedValue`] and rebuild per frame.
#[allow(non_snake_case)]
pub fn ProgressBar(
    value: f32,
    max_value: Option<f32>,
    dashes: usize,
    dash_gap: f32,
    brush: Option<Brush>,
) -> View {
    let t = theme();
    let fraction = (value / max_value.unwrap_or(100.0)).clamp(0.0, 1.0);
    let dashes = dashes.max(1);
    let fill: Brush = brush.unwrap_or_else(|| t.progress_active.into());

    // Each dash fills independently: full up to the boundary, partial in the
    // dash the fraction lands in, empty past it.
    let mut row = View::new(ViewKind::Row).modifier(
        Modifier::new()
            .fill_max_width()
            .height(16.0)
            .gap(dash_gap),
    );
    for i in 0..dashes {
        let start = i as f32 / dashes as f32;
        let end = (i + 1) as f32 / dashes as f32;
        let local = ((fraction - start) / (end - start)).clamp(0.0, 1.0);

        let mut dash = View::new(ViewKind::Stack).modifier(
            Modifier::new()
                .flex_grow(1.0)
                .fill_max_height()
                .clip_rounded(4.0)
                .background(t.progress_inactive),
        );
        if local > 0.0 {
            dash = dash.child(View::new(ViewKind::Row).child(
                View::new(ViewKind::Box).modifier(
                    Modifier::new()
                        .flex_grow(local)
                        .fill_max_height()
                        .clip_rounded(4.0)
                        .background(fill.clone()),
                ),
            ).child(
                View::new(ViewKind::Box).modifier(Modifier::new().flex_grow(1.0 - local)),
            ));
        }
        row = row.child(dash);
    }
    row
}

/// Ring progress with a tweened sweep.
pub struct ProgressCircleState {
    progress: AnimatedValue<f32>,
}

impl ProgressCircleState {
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: AnimatedValue::new(0.0, AnimationSpec::tween(duration, Easing::EaseInOut)),
        }
    }

    /// Retarget the sweep; `percent` is in `0..=100`.
    pub fn set_percent(&mut self, percent: f32) {
        self.progress.set_target((percent / 100.0).clamp(0.0, 1.0));
    }

    pub fn fraction(&self) -> f32 {
        *self.progress.get()
    }

    pub fn tick(&mut self) -> bool {
        self.progress.update()
    }
}

impl Default for ProgressCircleState {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[allow(non_snake_case)]
pub fn ProgressCircle(state: &ProgressCircleState, size: f32, stroke_width: f32) -> View {
    let t = theme();
    let fraction = state.fraction();
    let radius = size / 2.0 - stroke_width / 2.0;
    let ring = t.progress_active;
    let track = t.progress_inactive.with_alpha(38);

    View::new(ViewKind::Canvas {
        paint: Rc::new(move |scope| {
            let center = Vec2 {
                x: scope.size.width / 2.0,
                y: scope.size.height / 2.0,
            };
            scope.circle_stroke(center, radius, track, stroke_width);
            if fraction > 0.0 {
                // Sweep starts at twelve o'clock.
                scope.arc(center, radius, -90.0, fraction * 360.0, ring, stroke_width);
            }
        }),
    })
    .modifier(Modifier::new().size(size, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swivel_core::clock::{advance_test_now, clear_test_now, set_test_now};
    use swivel_core::{DrawCommand, DrawScope, Size};
    use web_time::Instant;

    fn painted(view: &View) -> Vec<DrawCommand> {
        match &view.kind {
            ViewKind::Canvas { paint } => {
                let mut scope = DrawScope::new(Size {
                    width: 100.0,
                    height: 100.0,
                });
                paint(&mut scope);
                scope.commands
            }
            _ => panic!("not a canvas"),
        }
    }

    #[test]
    fn circle_sweep_follows_animated_fraction() {
        set_test_now(Instant::now());
        let mut s = ProgressCircleState::new(Duration::from_millis(100));
        s.set_percent(50.0);
        advance_test_now(Duration::from_millis(100));
        s.tick();
        assert_eq!(s.fraction(), 0.5);

        let cmds = painted(&ProgressCircle(&s, 100.0, 15.0));
        assert_eq!(cmds.len(), 2);
        match &cmds[1] {
            DrawCommand::Arc {
                start_deg,
                sweep_deg,
                ..
            } => {
                assert_eq!(*start_deg, -90.0);
                assert_eq!(*sweep_deg, 180.0);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        clear_test_now();
    }

    #[test]
    fn zero_progress_draws_only_the_track() {
        let s = ProgressCircleState::default();
        let cmds = painted(&ProgressCircle(&s, 100.0, 15.0));
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn bar_fills_dashes_in_order() {
        // Half of the default max over 4 dashes: two full, two empty.
        let bar = ProgressBar(50.0, None, 4, 10.0, None);
        assert_eq!(bar.children.len(), 4);
        assert_eq!(bar.children[0].children.len(), 1);
        assert_eq!(bar.children[1].children.len(), 1);
        assert!(bar.children[2].children.is_empty());
        assert!(bar.children[3].children.is_empty());
    }
}
