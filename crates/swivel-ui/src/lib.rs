#![allow(non_snake_case)]
//! Mobile-styled component library: wheel picker, charts, controls.
//!
//! Components are plain functions that build a [`View`] subtree from props
//! and a state handle. Stateful components keep their state in an
//! `Rc<RefCell<_>>` owned by the host; the host re-invokes the component
//! function whenever the state's signals change and drives timers by calling
//! the state's `tick` from its frame loop.

pub mod bar_chart;
pub mod button;
pub mod checkbox;
pub mod divider;
pub mod header;
pub mod line_chart;
pub mod progress;
pub mod segmented;
pub mod slider;
pub mod wheel;

pub use bar_chart::{BarChart, BarChartScope, BarSpec};
pub use button::{Button, ButtonProps, ButtonState};
pub use checkbox::Checkbox;
pub use divider::Divider;
pub use header::{Header, HeaderRegistry, HeaderSlot, HeaderSpacer};
pub use line_chart::{ChartPoint, LineChart};
pub use progress::{ProgressBar, ProgressCircle, ProgressCircleState};
pub use segmented::{SegmentState, SegmentedControl};
pub use slider::{Slider, SliderState};
pub use wheel::{
    WheelPicker, WheelPickerProps, WheelPickerState, dispatch as wheel_dispatch, item_transform,
};

use swivel_core::{Color, Modifier, View, ViewKind, theme};

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: theme().foreground,
        font_size: 16.0, // dp
    })
}

pub fn text_colored(text: impl Into<String>, color: Color, font_size: f32) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color,
        font_size,
    })
}

pub fn Spacer(width: f32, height: f32) -> View {
    View::new(ViewKind::Box).modifier(Modifier::new().size(width, height))
}
