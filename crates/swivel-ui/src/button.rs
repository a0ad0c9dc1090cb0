//! Pressable with press-scale feedback, optional post-press cooldown and a
//! hold-to-repeat mode.

use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::{
    AnimatedValue, AnimationSpec, Callback, Easing, ImpactStyle, Modifier, SettleTimer,
    SharedHaptics, Transform, View, ViewKind, haptics, theme,
};
use web_time::Duration;

const PRESS_SCALE: f32 = 0.95;
const PRESS_ANIMATION: Duration = Duration::from_millis(150);
/// Repeat period while a long-press is held.
const HOLD_REPEAT: Duration = Duration::from_millis(100);

pub struct ButtonProps {
    pub label: String,
    pub on_press: Option<Callback>,
    pub on_long_press: Option<Callback>,
    /// Fires every [`HOLD_REPEAT`] while the press is held after a long-press.
    pub on_hold: Option<Callback>,
    pub haptics: bool,
    pub disabled: bool,
    /// Ignore further presses for this long after each accepted press.
    pub disable_time: Option<Duration>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: String::new(),
            on_press: None,
            on_long_press: None,
            on_hold: None,
            haptics: true,
            disabled: false,
            disable_time: None,
        }
    }
}

pub struct ButtonState {
    props: ButtonProps,
    haptics: SharedHaptics,
    scale: AnimatedValue<f32>,
    cooldown: SettleTimer,
    cooling: bool,
    holding: bool,
    hold_timer: SettleTimer,
}

impl ButtonState {
    pub fn new(props: ButtonProps, haptics: SharedHaptics) -> Self {
        Self {
            props,
            haptics,
            scale: AnimatedValue::new(1.0, AnimationSpec::tween(PRESS_ANIMATION, Easing::EaseOut)),
            cooldown: SettleTimer::new(),
            cooling: false,
            holding: false,
            hold_timer: SettleTimer::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.props.disabled && !self.cooling
    }

    pub fn press_in(&mut self) {
        if !self.enabled() {
            return;
        }
        self.scale.set_target(PRESS_SCALE);
    }

    pub fn press(&mut self) {
        if !self.enabled() {
            return;
        }
        if let Some(cb) = &self.props.on_press {
            cb();
            if let Some(t) = self.props.disable_time {
                self.cooling = true;
                self.cooldown.arm(t);
            }
        }
    }

    pub fn long_press(&mut self) {
        if !self.enabled() {
            return;
        }
        if let Some(cb) = &self.props.on_long_press {
            cb();
        }
        if self.props.on_hold.is_some() && !self.holding {
            self.holding = true;
            self.hold_timer.arm(HOLD_REPEAT);
        }
    }

    pub fn press_out(&mut self) {
        if self.props.haptics {
            haptics::pulse(&*self.haptics, ImpactStyle::Light);
        }
        self.holding = false;
        self.hold_timer.cancel();
        self.scale.set_target(1.0);
    }

    pub fn scale(&self) -> f32 {
        *self.scale.get()
    }

    /// Advance the press animation, the cooldown, and hold repeats. Returns
    /// true while anything is still running.
    pub fn tick(&mut self) -> bool {
        let animating = self.scale.update();
        if self.cooling && self.cooldown.poll().is_some() {
            self.cooling = false;
        }
        if self.holding && self.hold_timer.poll().is_some() {
            if let Some(cb) = &self.props.on_hold {
                cb();
            }
            self.hold_timer.arm(HOLD_REPEAT);
        }
        animating || self.cooling || self.holding
    }
}

#[allow(non_snake_case)]
pub fn Button(state: &Rc<RefCell<ButtonState>>) -> View {
    let s = state.borrow();
    let t = theme();
    let enabled = s.enabled();
    let bg = if enabled {
        t.primary
    } else {
        t.primary.with_alpha(178)
    };

    let press = {
        let st = state.clone();
        move || {
            let mut s = st.borrow_mut();
            s.press_in();
            s.press();
            s.press_out();
        }
    };
    let long_press = {
        let st = state.clone();
        move || st.borrow_mut().long_press()
    };

    View::new(ViewKind::Box)
        .modifier(
            Modifier::new()
                .padding(8.0)
                .clip_rounded(12.0)
                .background(bg)
                .transform(Transform {
                    scale: s.scale(),
                    ..Transform::identity()
                })
                .on_press(press)
                .on_long_press(long_press),
        )
        .child(View::new(ViewKind::Text {
            text: s.props.label.clone(),
            color: t.primary_foreground,
            font_size: 18.0,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use swivel_core::NoopHaptics;
    use swivel_core::clock::{advance_test_now, clear_test_now, set_test_now};
    use web_time::Instant;

    fn counting_button(disable_time: Option<Duration>) -> (ButtonState, Rc<Cell<usize>>) {
        let hits = Rc::new(Cell::new(0));
        let c = hits.clone();
        let state = ButtonState::new(
            ButtonProps {
                label: "go".into(),
                on_press: Some(Rc::new(move || c.set(c.get() + 1))),
                disable_time,
                ..ButtonProps::default()
            },
            Rc::new(NoopHaptics),
        );
        (state, hits)
    }

    #[test]
    fn cooldown_swallows_presses_until_it_expires() {
        set_test_now(Instant::now());
        let (mut b, hits) = counting_button(Some(Duration::from_millis(500)));

        b.press();
        b.press();
        assert_eq!(hits.get(), 1);
        assert!(!b.enabled());

        advance_test_now(Duration::from_millis(500));
        b.tick();
        assert!(b.enabled());
        b.press();
        assert_eq!(hits.get(), 2);
        clear_test_now();
    }

    #[test]
    fn hold_repeats_until_release() {
        set_test_now(Instant::now());
        let fired = Rc::new(Cell::new(0));
        let c = fired.clone();
        let mut b = ButtonState::new(
            ButtonProps {
                on_hold: Some(Rc::new(move || c.set(c.get() + 1))),
                ..ButtonProps::default()
            },
            Rc::new(NoopHaptics),
        );

        b.long_press();
        for _ in 0..3 {
            advance_test_now(HOLD_REPEAT);
            b.tick();
        }
        assert_eq!(fired.get(), 3);

        b.press_out();
        advance_test_now(HOLD_REPEAT);
        b.tick();
        assert_eq!(fired.get(), 3);
        clear_test_now();
    }

    #[test]
    fn disabled_button_ignores_everything() {
        set_test_now(Instant::now());
        let hits = Rc::new(Cell::new(0));
        let c = hits.clone();
        let mut b = ButtonState::new(
            ButtonProps {
                disabled: true,
                on_press: Some(Rc::new(move || c.set(c.get() + 1))),
                ..ButtonProps::default()
            },
            Rc::new(NoopHaptics),
        );
        b.press_in();
        b.press();
        assert_eq!(hits.get(), 0);
        assert_eq!(b.scale(), 1.0);
        clear_test_now();
    }
}
