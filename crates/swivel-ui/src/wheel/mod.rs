//! # Wheel picker
//!
//! A snapping vertical picker that reconciles three sources of scroll-position
//! truth against one visual position: an externally-controlled index, user
//! drag/momentum scrolling, and tap-to-select animations.
//!
//! The split mirrors the responsibilities:
//!
//! - [`ScrollFlags`] — why the viewport is moving right now.
//! - [`IndexReconciler`] (internal) — which index is authoritative and when a
//!   tentative change settles.
//! - [`ScrollDriver`] (internal) — the only writer of the visual position,
//!   with debouncing for external churn and one bounded retry.
//! - [`ChangeNotifier`] (internal) — deduplicated outward `on_change` plus
//!   the settle haptic.
//!
//! [`WheelPickerState`] owns all four and is single-threaded: every timer is
//! a deadline record advanced by [`WheelPickerState::tick`] from the frame
//! loop, so dropping the state cancels everything outstanding and a stale
//! timer can never fire after unmount.
//!
//! Outward callbacks (`on_change`, `on_end_reached`) never run while the
//! state is mutably borrowed: handlers queue them and [`dispatch`] delivers
//! after the borrow is released, so a parent may push a new index right back
//! in from its callback.

mod driver;
mod flags;
mod notifier;
mod reconciler;
pub mod surface;

pub use flags::ScrollFlags;
pub use notifier::OnChange;
pub use surface::{RecordingSurface, ScrollSurface, SharedSurface};

use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::{
    Callback, ImpactStyle, Modifier, PaddingValues, SharedHaptics, Signal, Transform, View,
    ViewKind, dp_to_px, geometry, haptics, signal, theme,
};
use web_time::Duration;

use driver::ScrollDriver;
use notifier::ChangeNotifier;
use reconciler::IndexReconciler;

/// Height of one row, in dp. Also the snap interval.
pub const ITEM_HEIGHT_DP: f32 = 35.0;
/// Rows visible in the viewport; the selection sits on the center row.
pub const VISIBLE_ROWS: usize = 5;

/// Programmatic scroll animation length.
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(300);
/// Tap settlement: animation length plus a 50ms margin.
pub const TAP_SETTLE: Duration = Duration::from_millis(350);
/// Extra margin before an animated command's programmatic bracket clears.
pub const PROGRAMMATIC_SETTLE: Duration = Duration::from_millis(80);
/// Quiet period collapsing rapid external index changes.
pub const EXTERNAL_DEBOUNCE: Duration = Duration::from_millis(300);
/// Delay before the single retry of a rejected scroll command.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);
/// Fraction of the viewport from the end at which `on_end_reached` fires.
const END_REACHED_THRESHOLD: f32 = 0.5;

/// Rows hidden above the first and below the last item so edge items can
/// reach the center.
const EDGE_SPACER_ROWS: usize = 2;
/// Rows composed beyond the visible window on each side.
const OVERDRAW_ROWS: usize = 2;

pub struct WheelPickerProps<T> {
    pub index: usize,
    pub data: Vec<T>,
    pub on_change: OnChange<T>,
    pub label: Option<String>,
    pub on_end_reached: Option<Callback>,
}

/// Decision core of the picker. Constructed with its collaborators up front;
/// the host wires list events to the `handle_*` methods and calls [`tick`]
/// once per frame.
///
/// [`tick`]: WheelPickerState::tick
pub struct WheelPickerState<T: Clone + 'static> {
    data: Vec<T>,
    flags: ScrollFlags,
    reconciler: IndexReconciler,
    driver: ScrollDriver,
    notifier: ChangeNotifier<T>,
    haptics: SharedHaptics,
    scroll_offset: Signal<f32>,
    item_height_px: f32,
    /// Target of the in-flight debounced external request, if any.
    external_target: Option<usize>,
    on_end_reached: Option<Callback>,
    end_reached_queued: bool,
    end_reached_armed: bool,
    label: Option<String>,
}

impl<T: Clone + 'static> WheelPickerState<T> {
    pub fn new(props: WheelPickerProps<T>, surface: SharedSurface, haptics: SharedHaptics) -> Self {
        let item_height_px = dp_to_px(ITEM_HEIGHT_DP);
        let reconciler = IndexReconciler::new(props.index, props.data.len());
        let initial = reconciler.selected();
        let flags = ScrollFlags::new();
        let mut driver = ScrollDriver::new(surface, item_height_px);

        // First mount positions instantly; nothing has been rendered yet, so
        // there is nothing to animate from and nothing to report.
        driver.scroll_to(&flags, initial, false);

        Self {
            notifier: ChangeNotifier::new(props.on_change, haptics.clone(), initial),
            data: props.data,
            flags,
            reconciler,
            driver,
            haptics,
            scroll_offset: signal(initial as f32 * item_height_px),
            item_height_px,
            external_target: None,
            on_end_reached: props.on_end_reached,
            end_reached_queued: false,
            end_reached_armed: true,
            label: props.label,
        }
    }

    /// External index prop changed. The request is debounced; only the most
    /// recent target survives rapid churn, and it cancels any pending tap.
    pub fn set_index(&mut self, index: usize) {
        let index = self.reconciler.clamp(index);
        let current_target = self.external_target.unwrap_or(self.reconciler.selected());
        if index == current_target {
            return;
        }
        self.reconciler.cancel_pending_tap();
        self.external_target = Some(index);
        self.driver.request_external(index, true);
    }

    /// Replace the dataset. Growth never moves the selection; a shrink below
    /// it clamps and issues one corrective instant scroll.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        if self.data.is_empty() {
            self.external_target = None;
            self.driver.cancel_external();
        }
        if let Some(clamped) = self.reconciler.set_data_len(self.data.len()) {
            log::warn!("wheel data shrank below selection; clamping to {clamped}");
            self.driver.scroll_to(&self.flags, clamped, false);
            self.notifier.report(&self.data, clamped);
        }
        if let Some(t) = self.external_target {
            self.external_target = Some(self.reconciler.clamp(t));
        }
    }

    /// Row tap. Dropped outright while any scroll is in flight; a tap on the
    /// selected row is a no-op. Otherwise supersedes the previous pending tap
    /// and starts an animated scroll plus a settlement window.
    pub fn handle_item_press(&mut self, index: usize) {
        haptics::pulse(&*self.haptics, ImpactStyle::Medium);
        if self.flags.is_user_scrolling() || self.flags.is_programmatic() {
            return;
        }
        let index = self.reconciler.clamp(index);
        if index == self.reconciler.selected() {
            return;
        }
        self.driver.scroll_to(&self.flags, index, true);
        self.reconciler.begin_tap(index);
    }

    /// Drag-start: user authority. Clears the programmatic flag, abandons the
    /// in-flight command's settlement and any pending retry, and drops any
    /// pending tap.
    pub fn handle_scroll_begin_drag(&mut self) {
        self.flags.begin_user_scroll();
        self.driver.cancel_completion();
        self.driver.cancel_retry();
        self.reconciler.cancel_pending_tap();
    }

    /// Momentum came to rest. A residual event from a programmatic scroll
    /// only clears flags; a genuine user settle snaps to the nearest index
    /// and reports immediately.
    pub fn handle_momentum_end(&mut self, offset_px: f32) {
        if self.flags.is_programmatic() {
            self.driver.cancel_completion();
            self.flags.end_programmatic();
            self.flags.end_user_scroll();
            return;
        }
        let nearest = (offset_px / self.item_height_px).round().max(0.0) as usize;
        let index = self.reconciler.clamp(nearest);
        if index != self.reconciler.selected() {
            self.reconciler.accept(index);
            self.notifier.report(&self.data, index);
        }
        self.flags.end_user_scroll();
    }

    /// Continuous offset update from the surface. Feeds the derived row
    /// transforms and the end-reached check; never a decision point.
    pub fn handle_scroll(&mut self, offset_px: f32) {
        self.scroll_offset.set(offset_px);
        if self.on_end_reached.is_none() {
            return;
        }
        let len = self.reconciler.data_len();
        if len == 0 {
            return;
        }
        let max_offset = (len - 1) as f32 * self.item_height_px;
        let viewport = self.item_height_px * VISIBLE_ROWS as f32;
        if offset_px >= max_offset - END_REACHED_THRESHOLD * viewport {
            if self.end_reached_armed {
                self.end_reached_armed = false;
                self.end_reached_queued = true;
            }
        } else {
            self.end_reached_armed = true;
        }
    }

    /// Frame tick: resolves the debounced external request, tap settlement,
    /// and the driver's completion/retry timers.
    pub fn tick(&mut self) {
        if let Some(request) = self.driver.poll_external() {
            if self.flags.is_user_scrolling() {
                // Programmatic writes stop while the user drags; re-apply
                // after another quiet period.
                self.driver.defer_external(request);
            } else {
                let index = self.reconciler.clamp(request.index);
                self.external_target = None;
                self.reconciler.cancel_pending_tap();
                self.reconciler.accept(index);
                self.driver.scroll_to(&self.flags, index, request.animated);
                self.notifier.report(&self.data, index);
            }
        }

        if let Some(tapped) = self.reconciler.poll_tap() {
            let index = self.reconciler.clamp(tapped);
            self.reconciler.accept(index);
            self.notifier.report(&self.data, index);
        }

        self.driver.tick(&self.flags);
    }

    pub fn selected_index(&self) -> usize {
        self.reconciler.selected()
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.data.get(self.reconciler.selected())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    pub fn scroll_offset_signal(&self) -> Signal<f32> {
        self.scroll_offset.clone()
    }

    /// False while a programmatic scroll is in flight; the list must refuse
    /// new drags so position has a single writer.
    pub fn scroll_enabled(&self) -> bool {
        !self.flags.is_programmatic()
    }

    pub fn flags(&self) -> &ScrollFlags {
        &self.flags
    }

    pub fn item_height_px(&self) -> f32 {
        self.item_height_px
    }

    fn take_end_reached(&mut self) -> bool {
        std::mem::take(&mut self.end_reached_queued)
    }
}

/// Run a mutation against the picker state, then deliver any queued outward
/// callbacks with the borrow released. All view-layer event closures go
/// through here.
pub fn dispatch<T: Clone + 'static>(
    state: &Rc<RefCell<WheelPickerState<T>>>,
    f: impl FnOnce(&mut WheelPickerState<T>),
) {
    let (on_change, queued, end_reached) = {
        let mut s = state.borrow_mut();
        f(&mut s);
        let end = if s.take_end_reached() {
            s.on_end_reached.clone()
        } else {
            None
        };
        (s.notifier.callback(), s.notifier.take_queued(), end)
    };
    for (value, index) in queued {
        on_change(&value, index);
    }
    if let Some(cb) = end_reached {
        cb();
    }
}

/// Per-row wheel transform, derived purely from the current offset. Runs on
/// the host's frame-synchronized style path and must not touch decision
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemTransform {
    pub rotate_x_deg: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
}

/// Tilt a row away from the viewport center, cosine-compensating the lost
/// height so spacing holds. Rows far outside the window skip the math.
pub fn item_transform(scroll_offset_px: f32, index: usize, item_height_px: f32) -> ItemTransform {
    let h = item_height_px;
    let center_offset = h * (VISIBLE_ROWS as f32 / 2.0);
    let center_y = index as f32 * h + center_offset;
    let raw = scroll_offset_px + center_offset;

    if (raw - center_y).abs() > h * 3.0 {
        return ItemTransform::default();
    }

    let deg = geometry::interpolate(
        raw,
        &[
            center_y - h * 2.0,
            center_y - h * 0.67,
            center_y + h * 0.67,
            center_y + h * 2.0,
        ],
        &[-50.0, -30.0, 30.0, 50.0],
    )
    .clamp(-50.0, 50.0);

    let inner_h = (deg.to_radians()).cos() * h;
    ItemTransform {
        rotate_x_deg: deg,
        padding_top: if deg < 0.0 { h - inner_h } else { 0.0 },
        padding_bottom: if deg > 0.0 { h - inner_h } else { 0.0 },
    }
}

/// Build the picker's view subtree around `state`: a snapping scroll surface
/// with windowed rows, spacer runs for the off-screen ranges, and an
/// optional unit label beside the wheel.
#[allow(non_snake_case)]
pub fn WheelPicker<T>(state: &Rc<RefCell<WheelPickerState<T>>>) -> View
where
    T: Clone + std::fmt::Display + 'static,
{
    let s = state.borrow();
    let item_h = s.item_height_px();
    let picker_h = item_h * VISIBLE_ROWS as f32;
    let offset = s.scroll_offset();
    let len = s.data().len();

    let first = ((offset / item_h).floor().max(0.0) as usize).saturating_sub(OVERDRAW_ROWS);
    let last = (first + VISIBLE_ROWS + OVERDRAW_ROWS * 2).min(len);

    let mut children = Vec::new();
    let leading = EDGE_SPACER_ROWS + first;
    children.push(View::new(ViewKind::Box).modifier(Modifier::new().height(leading as f32 * item_h)));

    for i in first..last {
        let value = &s.data()[i];
        let t = item_transform(offset, i, item_h);
        let alpha = row_alpha(offset, i, item_h);
        let st = state.clone();
        let row = View::new(ViewKind::Box)
            .modifier(
                Modifier::new()
                    .height(item_h)
                    .alpha(alpha)
                    .padding_values(PaddingValues {
                        top: t.padding_top,
                        bottom: t.padding_bottom,
                        ..PaddingValues::default()
                    })
                    .transform(Transform {
                        rotate_x_deg: t.rotate_x_deg,
                        ..Transform::identity()
                    })
                    .on_press(move || dispatch(&st, |s| s.handle_item_press(i))),
            )
            .child(View::new(ViewKind::Text {
                text: value.to_string(),
                color: theme().foreground,
                font_size: 16.0,
            }));
        children.push(row);
    }

    let trailing = (len - last) + EDGE_SPACER_ROWS;
    children.push(View::new(ViewKind::Box).modifier(Modifier::new().height(trailing as f32 * item_h)));

    let on_scroll = {
        let st = state.clone();
        Rc::new(move |off: f32| dispatch(&st, |s| s.handle_scroll(off)))
    };
    let on_drag_begin = {
        let st = state.clone();
        Rc::new(move || dispatch(&st, |s| s.handle_scroll_begin_drag()))
    };
    let on_momentum_end = {
        let st = state.clone();
        Rc::new(move |off: f32| dispatch(&st, |s| s.handle_momentum_end(off)))
    };
    let get_offset = {
        let st = state.clone();
        Rc::new(move || {
            dispatch(&st, |s| s.tick());
            st.borrow().scroll_offset()
        })
    };
    let set_offset = {
        let st = state.clone();
        Rc::new(move |off: f32| dispatch(&st, |s| s.handle_scroll(off)))
    };

    let wheel = View::new(ViewKind::Scroll {
        on_scroll: Some(on_scroll),
        on_drag_begin: Some(on_drag_begin),
        on_momentum_end: Some(on_momentum_end),
        get_offset: Some(get_offset),
        set_offset: Some(set_offset),
        snap_interval_px: Some(item_h),
        scroll_enabled: s.scroll_enabled(),
        on_end_reached: None,
    })
    .modifier(Modifier::new().height(picker_h).clip_rounded(0.0))
    .with_children(children);

    let mut row = View::new(ViewKind::Row).modifier(Modifier::new().height(picker_h).gap(8.0));
    row = row.child(wheel);
    if let Some(label) = s.label() {
        row = row.child(View::new(ViewKind::Text {
            text: label.to_string(),
            color: theme().muted_foreground,
            font_size: 16.0,
        }));
    }
    row
}

/// Fade rows toward the window edges so the wheel reads as a drum rather
/// than a flat list.
fn row_alpha(scroll_offset_px: f32, index: usize, item_height_px: f32) -> f32 {
    let h = item_height_px;
    let center_offset = h * (VISIBLE_ROWS as f32 / 2.0);
    let distance = (scroll_offset_px + center_offset - (index as f32 * h + center_offset)).abs();
    geometry::interpolate(distance, &[0.0, h, h * 2.5], &[1.0, 0.6, 0.0]).clamp(0.0, 1.0)
}
