//! Segmented control with a sliding indicator pill.

use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::{
    AnimatedValue, AnimationSpec, Easing, ImpactStyle, Modifier, SettleTimer, SharedHaptics,
    View, ViewKind, haptics, theme,
};
use web_time::Duration;

const SLIDE_DURATION: Duration = Duration::from_millis(700);
/// The landing haptic fires shortly before the slide visually completes.
const HAPTIC_AT: Duration = Duration::from_millis(560);

pub type OnSegmentChange = Rc<dyn Fn(usize, &str)>;

pub struct SegmentState {
    labels: Vec<String>,
    selected: usize,
    /// Measured `(x, width)` per segment, fed back by the layout pass.
    layouts: Vec<Option<(f32, f32)>>,
    indicator_x: AnimatedValue<f32>,
    indicator_width: AnimatedValue<f32>,
    positioned: bool,
    haptic_timer: SettleTimer,
    haptics: SharedHaptics,
    on_change: OnSegmentChange,
}

impl SegmentState {
    pub fn new(
        labels: Vec<String>,
        selected: usize,
        haptics: SharedHaptics,
        on_change: OnSegmentChange,
    ) -> Self {
        let selected = selected.min(labels.len().saturating_sub(1));
        let spec = AnimationSpec::tween(SLIDE_DURATION, Easing::EaseInOut);
        Self {
            layouts: vec![None; labels.len()],
            labels,
            selected,
            indicator_x: AnimatedValue::new(0.0, spec),
            indicator_width: AnimatedValue::new(0.0, spec),
            positioned: false,
            haptic_timer: SettleTimer::new(),
            haptics,
            on_change,
        }
    }

    /// Layout feedback for one segment. The first measurement of the selected
    /// segment snaps the indicator into place without animating.
    pub fn set_segment_layout(&mut self, index: usize, x: f32, width: f32) {
        if index >= self.layouts.len() {
            return;
        }
        self.layouts[index] = Some((x, width));
        if !self.positioned && index == self.selected {
            self.indicator_x.snap_to(x);
            self.indicator_width.snap_to(width);
            self.positioned = true;
        }
    }

    /// Select a segment. Ignored until its layout is known; a repeat select
    /// is a no-op.
    pub fn select(&mut self, index: usize) {
        if index == self.selected || index >= self.labels.len() {
            return;
        }
        let Some((x, width)) = self.layouts[index] else {
            return;
        };
        self.selected = index;
        self.indicator_x.set_target(x);
        self.indicator_width.set_target(width);
        self.haptic_timer.arm(HAPTIC_AT);
        (self.on_change)(index, &self.labels[index]);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn indicator(&self) -> (f32, f32) {
        (*self.indicator_x.get(), *self.indicator_width.get())
    }

    pub fn tick(&mut self) -> bool {
        let moving = self.indicator_x.update();
        let sizing = self.indicator_width.update();
        if self.haptic_timer.poll().is_some() {
            haptics::pulse(&*self.haptics, ImpactStyle::Medium);
        }
        moving || sizing || self.haptic_timer.is_armed()
    }
}

#[allow(non_snake_case)]
pub fn SegmentedControl(state: &Rc<RefCell<SegmentState>>) -> View {
    let s = state.borrow();
    let t = theme();
    let (ix, iw) = s.indicator();

    let indicator = View::new(ViewKind::Box).modifier(
        Modifier::new()
            .width(iw)
            .fill_max_height()
            .clip_rounded(8.0)
            .background(t.segment_background)
            .transform(swivel_core::Transform {
                translate_x: ix,
                ..swivel_core::Transform::identity()
            }),
    );

    let mut row = View::new(ViewKind::Row).modifier(Modifier::new().fill_max_width().gap(20.0));
    for (i, label) in s.labels().iter().enumerate() {
        let color = if i == s.selected() {
            t.segment_active_font
        } else {
            t.segment_inactive_font
        };
        let st = state.clone();
        row = row.child(
            View::new(ViewKind::Box)
                .modifier(
                    Modifier::new()
                        .padding_values(swivel_core::PaddingValues {
                            top: 5.0,
                            bottom: 5.0,
                            left: 10.0,
                            right: 10.0,
                        })
                        .on_press(move || st.borrow_mut().select(i)),
                )
                .child(View::new(ViewKind::Text {
                    text: label.clone(),
                    color,
                    font_size: 16.0,
                })),
        );
    }

    View::new(ViewKind::Stack)
        .modifier(Modifier::new().fill_max_width())
        .child(indicator)
        .child(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use swivel_core::NoopHaptics;
    use swivel_core::clock::{advance_test_now, clear_test_now, set_test_now};
    use web_time::Instant;

    fn control(selected: usize) -> (SegmentState, Rc<Cell<Option<usize>>>) {
        let picked = Rc::new(Cell::new(None));
        let sink = picked.clone();
        let s = SegmentState::new(
            vec!["day".into(), "week".into(), "month".into()],
            selected,
            Rc::new(NoopHaptics),
            Rc::new(move |i, _| sink.set(Some(i))),
        );
        (s, picked)
    }

    #[test]
    fn first_layout_snaps_indicator_without_animation() {
        set_test_now(Instant::now());
        let (mut s, _) = control(1);
        s.set_segment_layout(0, 0.0, 40.0);
        s.set_segment_layout(1, 60.0, 50.0);
        assert_eq!(s.indicator(), (60.0, 50.0));
        clear_test_now();
    }

    #[test]
    fn select_animates_and_notifies() {
        set_test_now(Instant::now());
        let (mut s, picked) = control(0);
        s.set_segment_layout(0, 0.0, 40.0);
        s.set_segment_layout(2, 120.0, 55.0);

        s.select(2);
        assert_eq!(picked.get(), Some(2));
        assert_eq!(s.selected(), 2);
        // Mid-slide the indicator is between the two layouts.
        advance_test_now(Duration::from_millis(350));
        s.tick();
        let (x, _) = s.indicator();
        assert!(x > 0.0 && x < 120.0);

        advance_test_now(SLIDE_DURATION);
        s.tick();
        assert_eq!(s.indicator(), (120.0, 55.0));
        clear_test_now();
    }

    #[test]
    fn select_without_layout_is_ignored() {
        set_test_now(Instant::now());
        let (mut s, picked) = control(0);
        s.set_segment_layout(0, 0.0, 40.0);
        s.select(1);
        assert_eq!(picked.get(), None);
        assert_eq!(s.selected(), 0);
        clear_test_now();
    }

    #[test]
    fn reselect_is_a_noop() {
        set_test_now(Instant::now());
        let (mut s, picked) = control(0);
        s.set_segment_layout(0, 0.0, 40.0);
        s.select(0);
        assert_eq!(picked.get(), None);
        clear_test_now();
    }
}
