//! scrollreel plays keyframe animations on scroll-driven timelines.
//!
//! A batch of [`AnimationRequest`]s is bound to one scene element. Instead of a wall
//! clock, every player reads its time from a [`ScrollTimeline`] that runs while the scene
//! passes through the scrollport of the document's scrolling element.
//!
//! # Pipeline overview
//!
//! 1. **Aggregate**: `[AnimationRequest] -> TimeRange` (latest end time in the batch)
//! 2. **Anchor**: `scrolling element + scene + TimeRange -> ScrollTimeline` per request
//! 3. **Bind**: apply immediate vars, build a [`KeyframeEffect`], pair it with its
//!    timeline through the [`Host`] and `play()` it
//! 4. **Control**: [`ScrollTimelineRunner`] owns the players behind the
//!    [`AnimationRunner`] lifecycle (`init`, `start`, `cancel`)
//!
//! The document is reached only through the [`Host`] and [`ScrollGeometry`] traits.
//! [`HeadlessHost`] is an in-memory implementation used by tests and the CLI.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod host;
mod player;
mod runner;
mod style;
mod timeline;

pub use animation::duration::{compute_time_range, request_end_time};
pub use animation::ease::{Ease, StepPosition};
pub use animation::keyframes::{Keyframe, KeyframeInterval, Keyframes, StyleMap};
pub use animation::request::{AnimationRequest, ViewportData};
pub use animation::timing::{ComputedTiming, FillMode, Phase, PlaybackDirection, Timing};
pub use foundation::core::{ElementId, Span, TimeRange};
pub use foundation::error::{ScrollreelError, ScrollreelResult};
pub use host::headless::{DocumentGeometry, HeadlessHost};
pub use host::{Host, PlayState, Player, ScrollGeometry};
pub use player::animation::ScrollAnimation;
pub use player::binder::bind_and_play;
pub use player::effect::{EffectSample, KeyframeEffect};
pub use runner::AnimationRunner;
pub use runner::scroll_timeline::ScrollTimelineRunner;
pub use runner::state::{InitFailurePolicy, RunnerOptions, RunnerState};
pub use style::guard::{
    assert_does_not_contain_display, is_display_property, normalize_property_name,
    without_display,
};
pub use timeline::scroll::{
    ElementOffset, Orientation, ScrollEdge, ScrollTimeline, make_scroll_timeline,
};
