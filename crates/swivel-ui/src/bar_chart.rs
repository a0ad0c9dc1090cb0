//! Horizontal bar chart built from an explicit scope: callers describe bars
//! through [`BarChartScope`] and the chart derives heights from the largest
//! value.

use std::rc::Rc;

use swivel_core::{
    AnimatedValue, AnimationSpec, Callback, Easing, Modifier, Rect, View, ViewKind, theme,
};
use web_time::Duration;

const BAR_WIDTH: f32 = 20.0;

pub struct BarSpec {
    pub value: f32,
    pub label: String,
    pub active: bool,
    pub on_press: Option<Callback>,
}

/// Collects the bars for one [`BarChart`] invocation.
#[derive(Default)]
pub struct BarChartScope {
    bars: Vec<BarSpec>,
}

impl BarChartScope {
    pub fn bar(&mut self, value: f32, label: impl Into<String>) -> &mut Self {
        self.bars.push(BarSpec {
            value,
            label: label.into(),
            active: true,
            on_press: None,
        });
        self
    }

    pub fn bar_with(&mut self, spec: BarSpec) -> &mut Self {
        self.bars.push(spec);
        self
    }

    fn max_value(&self) -> f32 {
        self.bars.iter().map(|b| b.value).fold(1.0, f32::max)
    }
}

/// Height for one bar. Values at or below one render as a stub so empty
/// buckets stay visible and tappable.
pub fn bar_height(value: f32, max_value: f32, max_height: f32) -> f32 {
    if max_value <= 1.0 || value <= 1.0 {
        return BAR_WIDTH;
    }
    ((max_height / max_value) * value).max(BAR_WIDTH * 1.5)
}

/// One bar's tweened rise. Hosts keep one per bar and rebuild while any is
/// still animating.
pub struct BarRise {
    height: AnimatedValue<f32>,
}

impl BarRise {
    pub fn new(duration: Duration) -> Self {
        Self {
            height: AnimatedValue::new(
                BAR_WIDTH,
                AnimationSpec::tween(duration, Easing::EaseOut),
            ),
        }
    }

    pub fn set_height(&mut self, h: f32) {
        self.height.set_target(h);
    }

    pub fn current(&self) -> f32 {
        *self.height.get()
    }

    pub fn tick(&mut self) -> bool {
        self.height.update()
    }
}

#[allow(non_snake_case)]
pub fn BarChart(max_height: f32, build: impl FnOnce(&mut BarChartScope)) -> View {
    let mut scope = BarChartScope::default();
    build(&mut scope);
    let t = theme();
    let max = scope.max_value();

    let mut row = View::new(ViewKind::Row).modifier(
        Modifier::new()
            .fill_max_width()
            .height(max_height + 28.0)
            .gap(10.0),
    );

    for bar in scope.bars {
        let h = bar_height(bar.value, max, max_height);
        let color = if bar.active {
            t.chart.primary
        } else {
            t.chart.secondary.with_alpha(76)
        };
        let glyph = View::new(ViewKind::Canvas {
            paint: Rc::new(move |scope| {
                scope.rect(
                    Rect {
                        x: 0.0,
                        y: scope.size.height - h,
                        w: BAR_WIDTH,
                        h,
                    },
                    color,
                    BAR_WIDTH / 2.0,
                );
            }),
        })
        .modifier(Modifier::new().size(BAR_WIDTH, max_height));

        let mut column = View::new(ViewKind::Column).child(glyph);
        if !bar.label.is_empty() {
            let label_color = if bar.active {
                t.foreground
            } else {
                t.muted_foreground
            };
            column = column.child(View::new(ViewKind::Text {
                text: bar.label,
                color: label_color,
                font_size: 18.0,
            }));
        }
        if let Some(on_press) = bar.on_press {
            let cb = on_press.clone();
            column = column.modifier(Modifier::new().on_press(move || cb()));
        }
        row = row.child(column);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_against_the_largest_value() {
        assert_eq!(bar_height(50.0, 100.0, 100.0), 50.0);
        assert_eq!(bar_height(100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn small_values_render_as_stubs() {
        assert_eq!(bar_height(0.0, 100.0, 100.0), BAR_WIDTH);
        assert_eq!(bar_height(1.0, 100.0, 100.0), BAR_WIDTH);
        // Non-empty but tiny: clamped up so it stays distinguishable.
        assert_eq!(bar_height(2.0, 1000.0, 100.0), BAR_WIDTH * 1.5);
    }

    #[test]
    fn scope_collects_bars_in_order() {
        let view = BarChart(100.0, |s| {
            s.bar(3.0, "a").bar(9.0, "b");
        });
        assert_eq!(view.children.len(), 2);
        // Each bar column: canvas glyph + label.
        assert_eq!(view.children[0].children.len(), 2);
    }
}
