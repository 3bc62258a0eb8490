use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Where a `steps()` timing function places its jumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepPosition {
    JumpStart,
    JumpEnd,
    JumpNone,
    JumpBoth,
}

/// Timing function applied to iteration progress (or to a keyframe interval).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier([f64; 4]),
    Steps { count: u32, position: StepPosition },
}

impl Ease {
    pub fn validate(self) -> ScrollreelResult<()> {
        match self {
            Self::CubicBezier([x1, y1, x2, y2]) => {
                if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                    return Err(ScrollreelError::validation(
                        "cubic-bezier control points must be finite",
                    ));
                }
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(ScrollreelError::validation(
                        "cubic-bezier x control points must be in [0, 1]",
                    ));
                }
                Ok(())
            }
            Self::Steps { count, position } => {
                let min = if position == StepPosition::JumpNone { 2 } else { 1 };
                if count < min {
                    return Err(ScrollreelError::validation(format!(
                        "steps() count must be >= {min}"
                    )));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Map `t` in `[0, 1]` to eased progress. Bezier curves may overshoot `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(x1, y1, x2, y2, t),
            Self::Steps { count, position } => steps(count, position, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    let coord = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let dx = |s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * x1 + 6.0 * inv * s * (x2 - x1) + 3.0 * s * s * (1.0 - x2)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = coord(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return coord(y1, y2, s);
        }
        let d = dx(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Newton did not converge; bisect.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = coord(x1, x2, s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    coord(y1, y2, s)
}

fn steps(count: u32, position: StepPosition, t: f64) -> f64 {
    let n = f64::from(count.max(1));
    let mut step = (t * n).floor();
    if matches!(position, StepPosition::JumpStart | StepPosition::JumpBoth) {
        step += 1.0;
    }
    let jumps = match position {
        StepPosition::JumpStart | StepPosition::JumpEnd => n,
        StepPosition::JumpNone => n - 1.0,
        StepPosition::JumpBoth => n + 1.0,
    };
    (step / jumps).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
