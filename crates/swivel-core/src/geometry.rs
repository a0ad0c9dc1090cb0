#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Linear interpolation of `t` from the `input` range onto the `output` range,
/// with piecewise segments when the ranges have more than two stops.
/// Values outside the input range extrapolate from the nearest segment.
pub fn interpolate(t: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert!(input.len() == output.len() && input.len() >= 2);
    let last = input.len() - 1;
    let mut seg = last - 1;
    for i in 0..last {
        if t < input[i + 1] {
            seg = i;
            break;
        }
    }
    let (lo, hi) = (input[seg], input[seg + 1]);
    let span = hi - lo;
    if span.abs() < f32::EPSILON {
        return output[seg];
    }
    let frac = (t - lo) / span;
    output[seg] + (output[seg + 1] - output[seg]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_two_stop() {
        assert_eq!(interpolate(0.5, &[0.0, 1.0], &[0.0, 10.0]), 5.0);
        assert_eq!(interpolate(0.0, &[0.0, 1.0], &[0.0, 10.0]), 0.0);
    }

    #[test]
    fn interpolate_piecewise() {
        let input = [0.0, 10.0, 20.0, 30.0];
        let output = [-50.0, -30.0, 30.0, 50.0];
        assert_eq!(interpolate(0.0, &input, &output), -50.0);
        assert_eq!(interpolate(15.0, &input, &output), 0.0);
        assert_eq!(interpolate(30.0, &input, &output), 50.0);
    }

    #[test]
    fn interpolate_extrapolates_past_ends() {
        let v = interpolate(40.0, &[0.0, 10.0, 20.0, 30.0], &[-50.0, -30.0, 30.0, 50.0]);
        assert!(v > 50.0);
    }
}
