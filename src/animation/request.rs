use crate::{
    animation::{
        keyframes::{Keyframes, StyleMap, style_text},
        timing::Timing,
    },
    foundation::core::ElementId,
};

/// One element's animation within a batch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationRequest {
    pub target: ElementId,
    pub keyframes: Keyframes,
    pub timing: Timing,
    /// Styles applied immediately (not animated) before the player starts.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "style_text::deserialize_opt"
    )]
    pub vars: Option<StyleMap>,
}

impl AnimationRequest {
    pub fn new(target: ElementId, keyframes: Keyframes, timing: Timing) -> Self {
        Self {
            target,
            keyframes,
            timing,
            vars: None,
        }
    }

    pub fn with_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

/// Scroll region every timeline of a batch is anchored to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewportData {
    pub scene: ElementId,
}

impl ViewportData {
    pub fn new(scene: ElementId) -> Self {
        Self { scene }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/request.rs"]
mod tests;
