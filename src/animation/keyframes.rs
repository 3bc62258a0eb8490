use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// Property name → CSS value text. Values are opaque to the runner.
pub type StyleMap = BTreeMap<String, String>;

/// Style maps read from JSON accept numbers (`{"opacity": 0}`) and store them as text.
pub(crate) mod style_text {
    use serde::Deserialize as _;

    use super::StyleMap;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum StyleValue {
        Text(String),
        Number(serde_json::Number),
    }

    impl From<StyleValue> for String {
        fn from(value: StyleValue) -> Self {
            match value {
                StyleValue::Text(text) => text,
                StyleValue::Number(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<StyleMap, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = std::collections::BTreeMap::<String, StyleValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<StyleMap>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw =
            Option::<std::collections::BTreeMap<String, StyleValue>>::deserialize(deserializer)?;
        Ok(raw.map(|m| m.into_iter().map(|(k, v)| (k, v.into())).collect()))
    }
}

/// One style snapshot of a keyframe sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Position in `[0, 1]`; missing offsets are spaced evenly between neighbours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Ease applied toward the next keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Ease>,
    #[serde(flatten, deserialize_with = "style_text::deserialize")]
    pub props: StyleMap,
}

impl Keyframe {
    pub fn new<K, V>(props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            offset: None,
            easing: None,
            props: props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn at(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn eased(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Ordered keyframe sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Keyframes(pub Vec<Keyframe>);

/// The keyframe pair surrounding an iteration progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct KeyframeInterval {
    pub from: usize,
    pub to: usize,
    /// Eased progress between `from` and `to`.
    pub local: f64,
}

impl Keyframes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        let mut last = 0.0_f64;
        for (i, kf) in self.0.iter().enumerate() {
            if let Some(offset) = kf.offset {
                if !(0.0..=1.0).contains(&offset) {
                    return Err(ScrollreelError::validation(format!(
                        "keyframe {i} offset {offset} is outside [0, 1]"
                    )));
                }
                if offset < last {
                    return Err(ScrollreelError::validation(
                        "keyframe offsets must be non-decreasing",
                    ));
                }
                last = offset;
            }
            if let Some(easing) = kf.easing {
                easing.validate()?;
            }
        }
        Ok(())
    }

    /// Offsets with gaps filled: first defaults to 0, last to 1 (or 0 for a single
    /// keyframe), the rest spaced evenly between their nearest explicit neighbours.
    pub fn computed_offsets(&self) -> Vec<f64> {
        let n = self.0.len();
        let mut out: Vec<Option<f64>> = self.0.iter().map(|k| k.offset).collect();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![out[0].unwrap_or(0.0)];
        }
        if out[0].is_none() {
            out[0] = Some(0.0);
        }
        if out[n - 1].is_none() {
            out[n - 1] = Some(1.0);
        }

        let mut prev = 0;
        for i in 1..n {
            if let Some(end) = out[i] {
                let start = out[prev].unwrap_or(0.0);
                let gap = i - prev;
                for (step, slot) in out[prev + 1..i].iter_mut().enumerate() {
                    let frac = (step + 1) as f64 / gap as f64;
                    *slot = Some(start + (end - start) * frac);
                }
                prev = i;
            }
        }

        out.into_iter().map(|o| o.unwrap_or(0.0)).collect()
    }

    /// Locate the interval for iteration progress `p`. Progress outside `[0, 1]`
    /// extrapolates from the first or last interval.
    pub fn interval_at(&self, p: f64) -> Option<KeyframeInterval> {
        let offsets = self.computed_offsets();
        match offsets.len() {
            0 => return None,
            1 => {
                return Some(KeyframeInterval {
                    from: 0,
                    to: 0,
                    local: 0.0,
                });
            }
            _ => {}
        }

        let last = offsets.len() - 1;
        let from = if p < 0.0 {
            0
        } else if p >= 1.0 {
            last - 1
        } else {
            offsets
                .partition_point(|&o| o <= p)
                .saturating_sub(1)
                .min(last - 1)
        };
        let to = from + 1;

        let span = offsets[to] - offsets[from];
        let raw = if span <= 0.0 {
            if p >= offsets[to] { 1.0 } else { 0.0 }
        } else {
            (p - offsets[from]) / span
        };
        let local = match self.0[from].easing {
            Some(ease) if (0.0..=1.0).contains(&raw) => ease.apply(raw),
            _ => raw,
        };

        Some(KeyframeInterval { from, to, local })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
