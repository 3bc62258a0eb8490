use crate::{
    animation::keyframes::StyleMap,
    foundation::core::{ElementId, Span},
    foundation::error::ScrollreelResult,
    player::effect::KeyframeEffect,
    timeline::scroll::ScrollTimeline,
};

/// Whether a player is attached to its timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    Idle,
    Running,
}

/// Live pairing of a keyframe effect with a scroll timeline.
pub trait Player {
    /// Attach to the timeline's scroll-driven clock.
    fn play(&mut self) -> ScrollreelResult<()>;
    /// Detach and drop any applied effect. Must be safe to call repeatedly.
    fn cancel(&mut self);
    fn play_state(&self) -> PlayState;
}

/// Document services the runner consumes.
pub trait Host {
    type Player: Player;

    /// The element whose scrolling drives the document viewport.
    fn scrolling_element(&self) -> ScrollreelResult<ElementId>;

    fn is_attached(&self, element: &ElementId) -> bool;

    /// Set inline styles on `target` immediately.
    fn apply_styles(&mut self, target: &ElementId, styles: &StyleMap) -> ScrollreelResult<()>;

    /// Pair `effect` with `timeline`. The returned player is not yet playing.
    fn create_player(
        &mut self,
        effect: KeyframeEffect,
        timeline: ScrollTimeline,
    ) -> ScrollreelResult<Self::Player>;
}

/// Block-axis layout queries a scroll timeline resolves its offsets from.
pub trait ScrollGeometry {
    fn scroll_offset(&self, source: &ElementId) -> ScrollreelResult<f64>;

    /// Visible extent of the scrollport.
    fn scrollport_extent(&self, source: &ElementId) -> ScrollreelResult<f64>;

    /// Total extent of the scrollable content.
    fn scroll_extent(&self, source: &ElementId) -> ScrollreelResult<f64>;

    /// Where `target` sits in `source`'s scroll-content coordinates.
    fn element_span(&self, source: &ElementId, target: &ElementId) -> ScrollreelResult<Span>;
}
