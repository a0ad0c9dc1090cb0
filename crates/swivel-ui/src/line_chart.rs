//! Polyline chart with min/max normalization and a label row.

use std::rc::Rc;

use swivel_core::{Modifier, Vec2, View, ViewKind, theme};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub value: f32,
    pub label: Option<String>,
}

impl ChartPoint {
    pub fn new(value: f32) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Map values onto canvas positions: the x axis spreads points evenly, the y
/// axis normalizes into the padded band. A flat series sits on the midline.
pub fn plot_points(items: &[ChartPoint], width: f32, height: f32, padding: f32) -> Vec<Vec2> {
    if items.is_empty() {
        return Vec::new();
    }
    let available_w = width - 2.0 * padding;
    let available_h = height - 2.0 * padding;
    let gap = if items.len() > 1 {
        available_w / (items.len() - 1) as f32
    } else {
        0.0
    };

    let min = items.iter().map(|p| p.value).fold(f32::INFINITY, f32::min);
    let max = items
        .iter()
        .map(|p| p.value)
        .fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    items
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let normalized = if range > 0.0 {
                (p.value - min) / range
            } else {
                0.5
            };
            Vec2 {
                x: padding + gap * i as f32,
                y: padding + (1.0 - normalized) * available_h,
            }
        })
        .collect()
}

#[allow(non_snake_case)]
pub fn LineChart(items: &[ChartPoint], height: f32, padding: f32) -> View {
    let t = theme();
    let data = items.to_vec();
    let canvas = View::new(ViewKind::Canvas {
        paint: Rc::new(move |scope| {
            let points = plot_points(&data, scope.size.width, scope.size.height, padding);
            if points.len() >= 2 {
                scope.polyline(points, t.chart.primary, t.chart.secondary, 4.0);
            }
        }),
    })
    .modifier(Modifier::new().fill_max_width().height(height));

    let mut labels = View::new(ViewKind::Row).modifier(Modifier::new().fill_max_width().gap(5.0));
    for item in items {
        let mut cell = View::new(ViewKind::Box);
        if let Some(label) = &item.label {
            cell = cell.child(View::new(ViewKind::Text {
                text: label.clone(),
                color: t.foreground,
                font_size: 14.0,
            }));
        }
        labels = labels.child(cell);
    }

    View::new(ViewKind::Column)
        .modifier(Modifier::new().fill_max_width())
        .child(canvas)
        .child(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f32]) -> Vec<ChartPoint> {
        values.iter().map(|&v| ChartPoint::new(v)).collect()
    }

    #[test]
    fn extremes_land_on_the_padded_band_edges() {
        let p = plot_points(&pts(&[0.0, 10.0]), 120.0, 120.0, 20.0);
        assert_eq!(p[0], Vec2 { x: 20.0, y: 100.0 });
        assert_eq!(p[1], Vec2 { x: 100.0, y: 20.0 });
    }

    #[test]
    fn flat_series_sits_on_the_midline() {
        let p = plot_points(&pts(&[5.0, 5.0, 5.0]), 100.0, 120.0, 20.0);
        assert!(p.iter().all(|v| v.y == 60.0));
    }

    #[test]
    fn x_positions_are_evenly_spaced() {
        let p = plot_points(&pts(&[1.0, 2.0, 3.0, 4.0]), 110.0, 100.0, 10.0);
        let xs: Vec<f32> = p.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![10.0, 40.0, 70.0, 100.0]);
    }

    #[test]
    fn empty_and_single_point_series_draw_nothing() {
        assert!(plot_points(&[], 100.0, 100.0, 20.0).is_empty());
        let single = plot_points(&pts(&[3.0]), 100.0, 100.0, 20.0);
        assert_eq!(single.len(), 1);
    }
}
