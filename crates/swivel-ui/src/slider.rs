//! Draggable slider over a normalized `0..=1` track, with snap points, a
//! crossing haptic, and a spring settle onto the nearest point at release.

use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::{
    AnimatedValue, AnimationSpec, Color, ImpactStyle, Modifier, Rect, SharedHaptics, Transform,
    Vec2, View, ViewKind, haptics, theme,
};
use web_time::Duration;

/// Release snaps to the nearest point when within this distance. Dense snap
/// grids (more than five points) only snap inside the window; sparse ones
/// always snap.
const SNAP_THRESHOLD: f32 = 0.1;
/// How close a drag must pass a snap point to count as a crossing.
const CROSSING_THRESHOLD: f32 = 0.02;
const SETTLE_SPRING_DAMPING: f32 = 15.0;
const SETTLE_SPRING_STIFFNESS: f32 = 150.0;

pub type OnValueChange = Rc<dyn Fn(f32)>;
pub type OnSnap = Rc<dyn Fn(usize, f32)>;

pub struct SliderState {
    value: AnimatedValue<f32>,
    snap_points: Vec<f32>,
    dragging: bool,
    last_value: f32,
    haptics: SharedHaptics,
    on_value_change: Option<OnValueChange>,
    on_snap: Option<OnSnap>,
}

impl SliderState {
    pub fn new(
        initial: f32,
        snap_points: Vec<f32>,
        haptics: SharedHaptics,
        on_value_change: Option<OnValueChange>,
        on_snap: Option<OnSnap>,
    ) -> Self {
        let initial = initial.clamp(0.0, 1.0);
        Self {
            value: AnimatedValue::new(
                initial,
                AnimationSpec::spring(
                    SETTLE_SPRING_DAMPING,
                    SETTLE_SPRING_STIFFNESS,
                    Duration::from_millis(400),
                ),
            ),
            snap_points,
            dragging: false,
            last_value: initial,
            haptics,
            on_value_change,
            on_snap,
        }
    }

    pub fn value(&self) -> f32 {
        *self.value.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn snap_points(&self) -> &[f32] {
        &self.snap_points
    }

    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.last_value = self.value();
    }

    /// Thumb moved to `value` (already normalized by the host). Reports every
    /// update and pulses when the drag passes over a snap point.
    pub fn drag_update(&mut self, value: f32) {
        if !self.dragging {
            return;
        }
        let value = value.clamp(0.0, 1.0);
        self.value.snap_to(value);
        if let Some(cb) = &self.on_value_change {
            cb(value);
        }
        self.check_crossing(value, self.last_value);
        self.last_value = value;
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
        let current = self.value();
        let Some((index, snap)) = self.nearest_snap(current) else {
            return;
        };
        if (current - snap).abs() <= SNAP_THRESHOLD || self.snap_points.len() <= 5 {
            if let Some(cb) = &self.on_snap {
                cb(index, snap);
            }
            if let Some(cb) = &self.on_value_change {
                cb(snap);
            }
            self.value.set_target(snap);
        }
    }

    pub fn tick(&mut self) -> bool {
        self.value.update()
    }

    fn nearest_snap(&self, value: f32) -> Option<(usize, f32)> {
        self.snap_points
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| {
                (a.1 - value)
                    .abs()
                    .partial_cmp(&(b.1 - value).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    fn check_crossing(&mut self, current: f32, previous: f32) {
        for (i, snap) in self.snap_points.iter().copied().enumerate() {
            let crossed = (previous < snap && current >= snap)
                || (previous > snap && current <= snap);
            if crossed && (current - snap).abs() <= CROSSING_THRESHOLD {
                haptics::pulse(&*self.haptics, ImpactStyle::Medium);
                if let Some(cb) = &self.on_snap {
                    cb(i, snap);
                }
            }
        }
    }
}

#[allow(non_snake_case)]
pub fn Slider(state: &Rc<RefCell<SliderState>>, width: f32, thumb_size: f32) -> View {
    let s = state.borrow();
    let t = theme();
    let track_h = 4.0;
    let value = s.value();

    let track = View::new(ViewKind::Box).modifier(
        Modifier::new()
            .width(width)
            .height(track_h)
            .clip_rounded(2.0)
            .background(t.muted),
    );
    let active = View::new(ViewKind::Box).modifier(
        Modifier::new()
            .width(value * width)
            .height(track_h)
            .clip_rounded(2.0)
            .background(t.primary),
    );

    let markers: Vec<(f32, bool)> = s
        .snap_points()
        .iter()
        .map(|&p| (p * width, value >= p))
        .collect();
    let indicators = View::new(ViewKind::Canvas {
        paint: Rc::new(move |scope| {
            for (x, passed) in &markers {
                let color = if *passed { t.primary } else { t.muted };
                scope.rect(
                    Rect {
                        x: x - 1.0,
                        y: scope.size.height / 2.0 - 4.0,
                        w: 2.0,
                        h: 8.0,
                    },
                    color,
                    1.0,
                );
            }
        }),
    })
    .modifier(Modifier::new().width(width).height(8.0));

    let thumb_scale = if s.is_dragging() { 1.2 } else { 1.0 };
    let thumb = View::new(ViewKind::Canvas {
        paint: Rc::new(move |scope| {
            scope.circle(
                Vec2 {
                    x: scope.size.width / 2.0,
                    y: scope.size.height / 2.0,
                },
                scope.size.width / 2.0,
                Color::WHITE,
            );
        }),
    })
    .modifier(
        Modifier::new().size(thumb_size, thumb_size).transform(Transform {
            translate_x: value * width - thumb_size / 2.0,
            scale: thumb_scale,
            ..Transform::identity()
        }),
    );

    View::new(ViewKind::Stack)
        .modifier(Modifier::new().width(width).height(40.0))
        .child(track)
        .child(active)
        .child(indicators)
        .child(thumb)
}
