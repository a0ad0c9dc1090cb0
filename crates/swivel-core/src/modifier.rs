use std::rc::Rc;

use crate::{Brush, Color};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Visual transform applied to a node. `rotate_x_deg` is the perspective tilt
/// used by the wheel picker rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotate_x_deg: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }
}

/// Layout and appearance attributes, built fluently:
///
/// ```rust
/// use swivel_core::*;
///
/// let m = Modifier::new().size(120.0, 35.0).padding(8.0);
/// ```
#[derive(Clone, Default)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_width: bool,
    pub fill_max_height: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub gap: Option<f32>,
    pub flex_grow: Option<f32>,
    pub background: Option<Brush>,
    pub border: Option<Border>,
    pub clip_rounded: Option<f32>,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    pub on_press: Option<Rc<dyn Fn()>>,
    pub on_long_press: Option<Rc<dyn Fn()>>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }

    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_height = true;
        self
    }

    pub fn fill_max_size(self) -> Self {
        self.fill_max_width().fill_max_height()
    }

    pub fn padding(mut self, p: f32) -> Self {
        self.padding = Some(p);
        self
    }

    pub fn padding_values(mut self, v: PaddingValues) -> Self {
        self.padding_values = Some(v);
        self
    }

    pub fn gap(mut self, g: f32) -> Self {
        self.gap = Some(g);
        self
    }

    pub fn flex_grow(mut self, g: f32) -> Self {
        self.flex_grow = Some(g);
        self
    }

    pub fn background(mut self, b: impl Into<Brush>) -> Self {
        self.background = Some(b.into());
        self
    }

    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }

    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }

    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a.clamp(0.0, 1.0));
        self
    }

    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = Some(t);
        self
    }

    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    pub fn on_long_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_long_press = Some(Rc::new(f));
        self
    }
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max_width", &self.fill_max_width)
            .field("fill_max_height", &self.fill_max_height)
            .field("padding", &self.padding)
            .field("padding_values", &self.padding_values)
            .field("gap", &self.gap)
            .field("flex_grow", &self.flex_grow)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("clip_rounded", &self.clip_rounded)
            .field("alpha", &self.alpha)
            .field("transform", &self.transform)
            .field("on_press", &self.on_press.as_ref().map(|_| "<callback>"))
            .field(
                "on_long_press",
                &self.on_long_press.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}
