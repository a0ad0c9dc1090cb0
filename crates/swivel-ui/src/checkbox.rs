//! Controlled square toggle. The checked flag lives with the caller; passing
//! no press handler renders a read-only box.

use std::rc::Rc;

use swivel_core::{Callback, Color, Modifier, Vec2, View, ViewKind, theme};

const BOX_SIZE: f32 = 24.0;
const CORNER_RADIUS: f32 = 5.0;
const CHECK_STROKE: f32 = 4.0;

#[allow(non_snake_case)]
pub fn Checkbox(checked: bool, on_press: Option<Callback>) -> View {
    let t = theme();
    let (background, border) = if checked {
        (t.checkbox_active, t.checkbox_active)
    } else {
        (Color::TRANSPARENT, t.checkbox_inactive)
    };

    let mut modifier = Modifier::new()
        .size(BOX_SIZE, BOX_SIZE)
        .clip_rounded(CORNER_RADIUS)
        .border(1.0, border, CORNER_RADIUS)
        .background(background);
    if let Some(press) = on_press {
        modifier = modifier.on_press(move || press());
    }

    let mut view = View::new(ViewKind::Box).modifier(modifier);
    if checked {
        view = view.child(check_mark(t.checkbox_icon));
    }
    view
}

/// Tick glyph scaled to whatever box it is painted into.
fn check_mark(color: Color) -> View {
    View::new(ViewKind::Canvas {
        paint: Rc::new(move |scope| {
            let w = scope.size.width;
            let h = scope.size.height;
            scope.polyline(
                vec![
                    Vec2 { x: 0.21 * w, y: 0.55 * h },
                    Vec2 { x: 0.42 * w, y: 0.75 * h },
                    Vec2 { x: 0.79 * w, y: 0.29 * h },
                ],
                color,
                color,
                CHECK_STROKE,
            );
        }),
    })
    .modifier(Modifier::new().fill_max_size())
}
