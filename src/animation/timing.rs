use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// How an effect applies outside its active interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Forwards,
    Backwards,
    Both,
    #[default]
    Auto,
}

impl FillMode {
    /// Whether values hold before the start point. `Auto` behaves as `None` for effects.
    pub fn fills_backwards(self) -> bool {
        matches!(self, Self::Backwards | Self::Both)
    }

    pub fn fills_forwards(self) -> bool {
        matches!(self, Self::Forwards | Self::Both)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

/// Per-request timing, in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub end_delay: f64,
    /// Iteration count; `f64::INFINITY` repeats forever.
    #[serde(default = "one", with = "iteration_count")]
    pub iterations: f64,
    #[serde(default)]
    pub iteration_start: f64,
    #[serde(default)]
    pub direction: PlaybackDirection,
    #[serde(default)]
    pub easing: Ease,
    #[serde(default)]
    pub fill: FillMode,
}

fn one() -> f64 {
    1.0
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            end_delay: 0.0,
            iterations: 1.0,
            iteration_start: 0.0,
            direction: PlaybackDirection::Normal,
            easing: Ease::Linear,
            fill: FillMode::Auto,
        }
    }
}

/// Which part of its interval an effect is in for a given local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    Active,
    After,
    Idle,
}

/// Result of running the timing model for one local time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ComputedTiming {
    pub phase: Phase,
    pub active_time: Option<f64>,
    pub current_iteration: Option<f64>,
    /// Eased, direction-adjusted iteration progress; `None` when the effect is not in effect.
    pub progress: Option<f64>,
}

impl ComputedTiming {
    fn unresolved(phase: Phase) -> Self {
        Self {
            phase,
            active_time: None,
            current_iteration: None,
            progress: None,
        }
    }
}

impl Timing {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_end_delay(mut self, end_delay: f64) -> Self {
        self.end_delay = end_delay;
        self
    }

    pub fn with_iterations(mut self, iterations: f64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_direction(mut self, direction: PlaybackDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScrollreelError::validation(
                "Timing duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || !self.end_delay.is_finite() {
            return Err(ScrollreelError::validation(
                "Timing delay and end_delay must be finite",
            ));
        }
        if self.iterations.is_nan() || self.iterations < 0.0 {
            return Err(ScrollreelError::validation("Timing iterations must be >= 0"));
        }
        if !self.iteration_start.is_finite() || self.iteration_start < 0.0 {
            return Err(ScrollreelError::validation(
                "Timing iteration_start must be finite and >= 0",
            ));
        }
        self.easing.validate()
    }

    pub fn is_unbounded(&self) -> bool {
        self.iterations.is_infinite() && self.duration > 0.0
    }

    /// `duration × iterations`; zero-length iterations never produce an infinite span.
    pub fn active_duration(&self) -> f64 {
        if self.duration == 0.0 || self.iterations == 0.0 {
            return 0.0;
        }
        self.duration * self.iterations
    }

    /// `delay + active duration + end delay`, clamped at 0. `None` when unbounded.
    pub fn end_time(&self) -> Option<f64> {
        if self.is_unbounded() {
            return None;
        }
        Some((self.delay + self.active_duration() + self.end_delay).max(0.0))
    }

    /// Web Animations timing model for a forward-playing effect.
    pub fn computed(&self, local_time: Option<f64>) -> ComputedTiming {
        let Some(local) = local_time else {
            return ComputedTiming::unresolved(Phase::Idle);
        };

        let active = self.active_duration();
        let end = (self.delay + active + self.end_delay).max(0.0);
        let before_boundary = self.delay.min(end).max(0.0);
        let after_boundary = (self.delay + active).min(end).max(0.0);

        let phase = if local < before_boundary {
            Phase::Before
        } else if local >= after_boundary {
            Phase::After
        } else {
            Phase::Active
        };

        let active_time = match phase {
            Phase::Before if self.fill.fills_backwards() => Some((local - self.delay).max(0.0)),
            Phase::Active => Some(local - self.delay),
            Phase::After if self.fill.fills_forwards() => {
                Some((local - self.delay).min(active).max(0.0))
            }
            _ => None,
        };
        let Some(active_time) = active_time else {
            return ComputedTiming::unresolved(phase);
        };

        let overall = if self.duration == 0.0 {
            if phase == Phase::Before {
                self.iteration_start
            } else {
                self.iteration_start + self.iterations
            }
        } else {
            active_time / self.duration + self.iteration_start
        };

        let mut simple = if overall.is_infinite() {
            self.iteration_start % 1.0
        } else {
            overall % 1.0
        };
        if simple == 0.0
            && matches!(phase, Phase::Active | Phase::After)
            && active_time == active
            && self.iterations != 0.0
            && overall != 0.0
        {
            simple = 1.0;
        }

        let current_iteration = if phase == Phase::After && self.iterations.is_infinite() {
            f64::INFINITY
        } else if simple == 1.0 {
            overall.floor() - 1.0
        } else {
            overall.floor()
        };

        let forwards = match self.direction {
            PlaybackDirection::Normal => true,
            PlaybackDirection::Reverse => false,
            PlaybackDirection::Alternate => current_iteration % 2.0 == 0.0,
            PlaybackDirection::AlternateReverse => current_iteration % 2.0 != 0.0,
        };
        let directed = if forwards { simple } else { 1.0 - simple };

        ComputedTiming {
            phase,
            active_time: Some(active_time),
            current_iteration: Some(current_iteration),
            progress: Some(self.easing.apply(directed)),
        }
    }
}

/// Iteration counts travel as numbers, with `"infinite"` for unbounded repetition.
mod iteration_count {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Count(f64),
        Keyword(String),
    }

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_infinite() {
            s.serialize_str("infinite")
        } else {
            s.serialize_f64(*v)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Count(n) => Ok(n),
            Repr::Keyword(k) if k.eq_ignore_ascii_case("infinite") => Ok(f64::INFINITY),
            Repr::Keyword(k) => Err(serde::de::Error::custom(format!(
                "unknown iteration count '{k}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
