use crate::{
    foundation::error::ScrollreelResult,
    host::{PlayState, Player, ScrollGeometry},
    player::effect::{EffectSample, KeyframeEffect},
    timeline::scroll::ScrollTimeline,
};

/// Reference player: a keyframe effect whose local time is read from a scroll timeline.
#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    effect: KeyframeEffect,
    timeline: ScrollTimeline,
    state: PlayState,
}

impl ScrollAnimation {
    pub fn new(effect: KeyframeEffect, timeline: ScrollTimeline) -> Self {
        Self {
            effect,
            timeline,
            state: PlayState::Idle,
        }
    }

    pub fn effect(&self) -> &KeyframeEffect {
        &self.effect
    }

    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// Timeline time in milliseconds, or `None` while idle.
    pub fn current_time(&self, geometry: &impl ScrollGeometry) -> ScrollreelResult<Option<f64>> {
        if self.state == PlayState::Idle {
            return Ok(None);
        }
        self.timeline.current_time(geometry)
    }

    /// Sample the effect at the current scroll position. Idle players contribute nothing.
    pub fn sample(&self, geometry: &impl ScrollGeometry) -> ScrollreelResult<Option<EffectSample>> {
        if self.state == PlayState::Idle {
            return Ok(None);
        }
        let t = self.timeline.current_time(geometry)?;
        Ok(Some(self.effect.sample(t)))
    }
}

impl Player for ScrollAnimation {
    fn play(&mut self) -> ScrollreelResult<()> {
        self.timeline.validate()?;
        self.state = PlayState::Running;
        Ok(())
    }

    fn cancel(&mut self) {
        self.state = PlayState::Idle;
    }

    fn play_state(&self) -> PlayState {
        self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/animation.rs"]
mod tests;
