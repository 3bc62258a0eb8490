use crate::{
    animation::{
        keyframes::{KeyframeInterval, Keyframes},
        timing::{ComputedTiming, Timing},
    },
    foundation::core::ElementId,
    foundation::error::ScrollreelResult,
};

/// Target, keyframes and timing of one animation. Holds no playback state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeEffect {
    pub target: ElementId,
    pub keyframes: Keyframes,
    pub timing: Timing,
}

/// What an effect contributes at one local time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EffectSample {
    pub timing: ComputedTiming,
    /// Keyframe pair in effect; `None` when the effect is not in effect.
    pub interval: Option<KeyframeInterval>,
}

impl KeyframeEffect {
    pub fn new(target: ElementId, keyframes: Keyframes, timing: Timing) -> ScrollreelResult<Self> {
        timing.validate()?;
        keyframes.validate()?;
        Ok(Self {
            target,
            keyframes,
            timing,
        })
    }

    pub fn sample(&self, local_time: Option<f64>) -> EffectSample {
        let timing = self.timing.computed(local_time);
        let interval = timing.progress.and_then(|p| self.keyframes.interval_at(p));
        EffectSample { timing, interval }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/effect.rs"]
mod tests;
