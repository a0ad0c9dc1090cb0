use std::rc::Rc;

use crate::{Color, Modifier, Rect, Size, Vec2};

pub type ViewId = u64;
pub type Callback = Rc<dyn Fn()>;
pub type CallbackF32 = Rc<dyn Fn(f32)>;

/// Host-rendered node kinds. The host toolkit walks the tree, lays it out,
/// and feeds gesture callbacks back in; components never draw directly.
#[derive(Clone)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Stack,
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    /// Custom-painted region. The painter receives the resolved size and
    /// emits draw commands; it must be a pure function of its captures.
    Canvas {
        paint: Rc<dyn Fn(&mut DrawScope)>,
    },
    /// Vertical snapping list surface. Continuous offsets flow out through
    /// `on_scroll`; discrete gesture lifecycle through `on_drag_begin` and
    /// `on_momentum_end`; the component positions it via `set_offset`.
    Scroll {
        on_scroll: Option<CallbackF32>,
        on_drag_begin: Option<Callback>,
        on_momentum_end: Option<CallbackF32>,
        get_offset: Option<Rc<dyn Fn() -> f32>>,
        set_offset: Option<CallbackF32>,
        snap_interval_px: Option<f32>,
        scroll_enabled: bool,
        on_end_reached: Option<Callback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Canvas { .. } => write!(f, "Canvas"),
            ViewKind::Scroll {
                snap_interval_px,
                scroll_enabled,
                ..
            } => f
                .debug_struct("Scroll")
                .field("snap_interval_px", snap_interval_px)
                .field("scroll_enabled", scroll_enabled)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            id: 0,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn child(mut self, v: View) -> Self {
        self.children.push(v);
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
}

/// Recording surface handed to `ViewKind::Canvas` painters.
pub struct DrawScope {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        stroke_width: Option<f32>,
    },
    /// Circular arc in degrees, measured clockwise from 3 o'clock.
    Arc {
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Color,
        stroke_width: f32,
    },
    Polyline {
        points: Vec<Vec2>,
        color_start: Color,
        color_end: Color,
        stroke_width: f32,
    },
}

impl DrawScope {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            radius,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke_width: None,
        });
    }

    pub fn circle_stroke(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke_width: Some(width),
        });
    }

    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Color,
        stroke_width: f32,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
            color,
            stroke_width,
        });
    }

    pub fn polyline(
        &mut self,
        points: Vec<Vec2>,
        color_start: Color,
        color_end: Color,
        stroke_width: f32,
    ) {
        self.commands.push(DrawCommand::Polyline {
            points,
            color_start,
            color_end,
            stroke_width,
        });
    }
}
