//! Easing curves: the CSS cubic Bézier keywords plus the sine, cubic, circ, elastic, back and
//! bounce families.

use core::f32::consts::{FRAC_PI_2, PI};

use style_values::{EasingFunction, EasingMode};

const NEWTON_ITERATIONS: u8 = 8;
const SOLVE_EPSILON: f64 = 1e-6;
const BACK_OVERSHOOT: f32 = 1.701_58;
const ELASTIC_PERIOD: f32 = 0.3;

/// A unit cubic Bézier curve from (0, 0) to (1, 1); x is time, y is progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl Bezier {
    /// Build the curve from its two middle control points.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn sample_x(&self, time: f64) -> f64 {
        ((self.ax * time + self.bx) * time + self.cx) * time
    }

    fn sample_y(&self, time: f64) -> f64 {
        ((self.ay * time + self.by) * time + self.cy) * time
    }

    fn sample_derivative_x(&self, time: f64) -> f64 {
        (3.0 * self.ax * time + 2.0 * self.bx) * time + self.cx
    }

    /// Find the curve parameter whose x is `target`: Newton first, bisection as fallback.
    fn solve_x(&self, target: f64) -> f64 {
        let mut time = target;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(time) - target;
            if error.abs() < SOLVE_EPSILON {
                return time;
            }
            let slope = self.sample_derivative_x(time);
            if slope.abs() < 1e-6 {
                break;
            }
            time -= error / slope;
        }

        let (mut low, mut high) = (0.0f64, 1.0f64);
        time = target.clamp(low, high);
        while low < high {
            let sampled = self.sample_x(time);
            if (sampled - target).abs() < SOLVE_EPSILON {
                return time;
            }
            if target > sampled {
                low = time;
            } else {
                high = time;
            }
            let next = (high - low) / 2.0 + low;
            if (next - time).abs() < f64::EPSILON {
                break;
            }
            time = next;
        }
        time
    }

    /// Progress at time `x` in `[0, 1]`.
    pub fn solve(&self, x: f64) -> f64 {
        self.sample_y(self.solve_x(x))
    }
}

/// Apply `easing` to linear progress `progress`. The endpoints are exact: 0 maps to 0 and 1
/// maps to 1 for every curve.
pub fn ease(easing: EasingFunction, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    match easing {
        EasingFunction::CubicBezier { x1, y1, x2, y2 } => bezier(x1, y1, x2, y2, progress),
        EasingFunction::Mode(mode) => ease_mode(mode, progress),
    }
}

fn bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    Bezier::new(f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2))
        .solve(f64::from(progress)) as f32
}

fn ease_mode(mode: EasingMode, time: f32) -> f32 {
    match mode {
        EasingMode::Ease => bezier(0.25, 0.1, 0.25, 1.0, time),
        EasingMode::EaseIn => bezier(0.42, 0.0, 1.0, 1.0, time),
        EasingMode::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, time),
        EasingMode::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, time),
        EasingMode::Linear => time,
        EasingMode::EaseInSine => 1.0 - (time * FRAC_PI_2).cos(),
        EasingMode::EaseOutSine => (time * FRAC_PI_2).sin(),
        EasingMode::EaseInOutSine => (1.0 - (PI * time).cos()) / 2.0,
        EasingMode::EaseInCubic => time * time * time,
        EasingMode::EaseOutCubic => 1.0 - (1.0 - time).powi(3),
        EasingMode::EaseInOutCubic => in_out(time, |part| part * part * part),
        EasingMode::EaseInCirc => in_circ(time),
        EasingMode::EaseOutCirc => out_of(time, in_circ),
        EasingMode::EaseInOutCirc => in_out(time, in_circ),
        EasingMode::EaseInElastic => in_elastic(time),
        EasingMode::EaseOutElastic => out_of(time, in_elastic),
        EasingMode::EaseInOutElastic => in_out(time, in_elastic),
        EasingMode::EaseInBack => in_back(time),
        EasingMode::EaseOutBack => out_of(time, in_back),
        EasingMode::EaseInOutBack => in_out(time, in_back),
        EasingMode::EaseInBounce => out_of(time, out_bounce),
        EasingMode::EaseOutBounce => out_bounce(time),
        EasingMode::EaseInOutBounce => in_out(time, |part| 1.0 - out_bounce(1.0 - part)),
    }
}

/// Mirror an ease-in curve into its ease-out counterpart (and vice versa).
fn out_of(time: f32, curve: fn(f32) -> f32) -> f32 {
    1.0 - curve(1.0 - time)
}

/// Ease-in on the first half, the mirrored ease-out on the second.
fn in_out(time: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    if time < 0.5 {
        ease_in(time * 2.0) / 2.0
    } else {
        1.0 - ease_in((1.0 - time) * 2.0) / 2.0
    }
}

fn in_circ(time: f32) -> f32 {
    1.0 - (1.0 - time * time).max(0.0).sqrt()
}

fn in_elastic(time: f32) -> f32 {
    if time <= 0.0 {
        return 0.0;
    }
    if time >= 1.0 {
        return 1.0;
    }
    let shifted = time - 1.0;
    -(2.0f32.powf(10.0 * shifted))
        * ((shifted - ELASTIC_PERIOD / 4.0) * (2.0 * PI) / ELASTIC_PERIOD).sin()
}

fn in_back(time: f32) -> f32 {
    time * time * ((BACK_OVERSHOOT + 1.0) * time - BACK_OVERSHOOT)
}

fn out_bounce(time: f32) -> f32 {
    const STRENGTH: f32 = 7.5625;
    const SPAN: f32 = 2.75;
    if time < 1.0 / SPAN {
        STRENGTH * time * time
    } else if time < 2.0 / SPAN {
        let shifted = time - 1.5 / SPAN;
        STRENGTH * shifted * shifted + 0.75
    } else if time < 2.5 / SPAN {
        let shifted = time - 2.25 / SPAN;
        STRENGTH * shifted * shifted + 0.9375
    } else {
        let shifted = time - 2.625 / SPAN;
        STRENGTH * shifted * shifted + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use style_values::EnumValue as _;

    use super::*;

    #[test]
    fn endpoints_are_exact_for_every_mode() {
        for mode in EasingMode::VARIANTS {
            let easing = EasingFunction::Mode(*mode);
            assert_eq!(ease(easing, 0.0), 0.0, "{mode:?}");
            assert_eq!(ease(easing, 1.0), 1.0, "{mode:?}");
        }
    }

    #[test]
    fn linear_and_symmetric_midpoints() {
        let linear = EasingFunction::Mode(EasingMode::Linear);
        assert!((ease(linear, 0.25) - 0.25).abs() < 1e-6);
        let in_out = EasingFunction::Mode(EasingMode::EaseInOut);
        assert!((ease(in_out, 0.5) - 0.5).abs() < 1e-3);
        let sine = EasingFunction::Mode(EasingMode::EaseInOutSine);
        assert!((ease(sine, 0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn bezier_matches_linear_for_diagonal_control_points() {
        let curve = Bezier::new(0.25, 0.25, 0.75, 0.75);
        assert!((curve.solve(0.3) - 0.3).abs() < 1e-4);
    }

    #[test]
    fn back_overshoots_and_bounce_stays_in_range() {
        let back = EasingFunction::Mode(EasingMode::EaseOutBack);
        assert!(ease(back, 0.7) > 1.0);
        let bounce = EasingFunction::Mode(EasingMode::EaseOutBounce);
        for step in 1..10u8 {
            let value = ease(bounce, f32::from(step) / 10.0);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
