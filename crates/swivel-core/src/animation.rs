use web_time::{Duration, Instant};

use crate::clock;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());
                if zeta < 1.0 {
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    // Overdamped falls back to ease-out.
                    t * (2.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn spring(damping: f32, stiffness: f32, duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Spring { damping, stiffness },
        }
    }

    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for crate::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        crate::Color(
            ch(self.0, other.0),
            ch(self.1, other.1),
            ch(self.2, other.2),
            ch(self.3, other.3),
        )
    }
}

/// Value that tweens toward its target; advance it with `update()` each frame.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(clock::now());
    }

    /// Snap to `value` without animating.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.start_time = None;
    }

    /// Returns true while the animation is still running.
    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = clock::now().saturating_duration_since(start);
        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased);
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{advance_test_now, clear_test_now, set_test_now};

    #[test]
    fn linear_tween_is_deterministic() {
        set_test_now(Instant::now());
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        advance_test_now(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        advance_test_now(Duration::from_millis(750));
        assert!(!a.update());
        assert!((*a.get() - 10.0).abs() < 0.001);
        clear_test_now();
    }

    #[test]
    fn snap_to_skips_animation() {
        set_test_now(Instant::now());
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::default());
        a.set_target(5.0);
        a.snap_to(1.0);
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 1.0);
        clear_test_now();
    }

    #[test]
    fn retarget_restarts_from_current() {
        set_test_now(Instant::now());
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(10.0);
        advance_test_now(Duration::from_millis(50));
        a.update();
        let mid = *a.get();
        a.set_target(0.0);
        advance_test_now(Duration::from_millis(100));
        a.update();
        assert_eq!(*a.get(), 0.0);
        assert!((0.0..=10.0).contains(&mid));
        clear_test_now();
    }
}
