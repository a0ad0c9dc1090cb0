//! # Theming locals
//!
//! Swivel passes global UI parameters through thread-local "composition
//! locals" pushed for the duration of a subtree build:
//!
//! - `Theme` — the component palette.
//! - `Density` — dp→px scale factor.
//!
//! ```rust
//! use swivel_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     foreground: Color::from_hex("#1A1A1A"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     // components built here read the light palette via theme()
//! });
//! ```
//!
//! Components read `theme()` instead of hard-coding colors. Shared state
//! objects with behavior (header registry, segment state, chart scope) are
//! deliberately *not* locals: they are constructed explicitly and passed to
//! the components that need them, so a missing collaborator is a
//! construction-time mistake rather than a build-time surprise.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

/// density-independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

/// Convert a raw dp scalar into px using the current Density.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Frame guard ensures pop on unwind.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

fn get_local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Paired colors used by chart gradients.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGroup {
    pub primary: Color,
    pub secondary: Color,
}

/// Component palette. Dark-first defaults; a
/// host app overrides the parts it cares about with struct update syntax.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,

    pub card: Color,
    pub card_foreground: Color,

    pub primary: Color,
    pub primary_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,

    pub destructive: Color,
    pub success: Color,

    pub chart: ColorGroup,

    pub segment_background: Color,
    pub segment_active_font: Color,
    pub segment_inactive_font: Color,

    pub checkbox_icon: Color,
    pub checkbox_active: Color,
    pub checkbox_inactive: Color,

    pub progress_active: Color,
    pub progress_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#0B0B0F"),
            foreground: Color::from_hex("#ECECEE"),
            border: Color::from_hex("#2A2A33"),

            card: Color::from_hex("#17171D"),
            card_foreground: Color::from_hex("#ECECEE"),

            primary: Color::from_hex("#5B8CFF"),
            primary_foreground: Color::WHITE,
            muted: Color::from_hex("#23232B"),
            muted_foreground: Color::from_hex("#8E8E99"),

            destructive: Color::from_hex("#E5484D"),
            success: Color::from_hex("#30A46C"),

            chart: ColorGroup {
                primary: Color::from_hex("#5B8CFF"),
                secondary: Color::from_hex("#9B6BFF"),
            },

            segment_background: Color::from_hex("#1C1C24"),
            segment_active_font: Color::from_hex("#ECECEE"),
            segment_inactive_font: Color::from_hex("#8E8E99"),

            checkbox_icon: Color::WHITE,
            checkbox_active: Color::from_hex("#5B8CFF"),
            checkbox_inactive: Color::from_hex("#2A2A33"),

            progress_active: Color::from_hex("#5B8CFF"),
            progress_inactive: Color::from_hex("#23232B"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Density {
    /// dp→px multiplier
    pub scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Density>(), Box::new(density));
        f()
    })
}

pub fn theme() -> Theme {
    get_local::<Theme>()
}

pub fn density() -> Density {
    get_local::<Density>()
}
