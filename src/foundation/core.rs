use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Opaque reference to an element in the host document.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    /// Build an element reference from any string-like id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared normalisation denominator for every timeline of a batch, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Finite span in milliseconds (`>= 0`).
    Finite(f64),
    /// At least one request repeats forever.
    Unbounded,
}

impl TimeRange {
    /// The finite span, or `None` when unbounded.
    pub fn as_finite(self) -> Option<f64> {
        match self {
            Self::Finite(ms) => Some(ms),
            Self::Unbounded => None,
        }
    }

    /// Whether at least one request in the batch is unbounded.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The larger of two ranges; `Unbounded` absorbs everything.
    pub fn max(self, other: Self) -> Self {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.max(b)),
            _ => Self::Unbounded,
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::Finite(0.0)
    }
}

/// Extent of a box along the block axis, in scroll-content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SpanFields")]
pub struct Span {
    pub start: f64,
    pub end: f64, // >= start
}

#[derive(serde::Deserialize)]
struct SpanFields {
    start: f64,
    end: f64,
}

impl TryFrom<SpanFields> for Span {
    type Error = ScrollreelError;

    fn try_from(raw: SpanFields) -> ScrollreelResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl Span {
    pub fn new(start: f64, end: f64) -> ScrollreelResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollreelError::validation("Span bounds must be finite"));
        }
        if start > end {
            return Err(ScrollreelError::validation("Span start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len(self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
