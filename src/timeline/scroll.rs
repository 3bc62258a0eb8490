use crate::{
    animation::timing::FillMode,
    foundation::core::{ElementId, TimeRange},
    foundation::error::{ScrollreelError, ScrollreelResult},
    host::ScrollGeometry,
};

/// Axis a scroll timeline follows. Only the block (primary) axis is driven here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Block,
}

/// Scrollport edge an element-based offset is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollEdge {
    /// The target meets the scrollport's start edge (leaving at the top).
    Start,
    /// The target meets the scrollport's end edge (entering from the bottom).
    End,
}

/// Scroll offset defined by where a target element sits relative to the scrollport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementOffset {
    pub target: ElementId,
    pub edge: ScrollEdge,
    /// Fraction of the target that must be visible past the edge, in `[0, 1]`.
    pub threshold: f64,
}

impl ElementOffset {
    /// Resolve to an absolute scroll offset, clamped to the scrollable range.
    pub fn resolve(
        &self,
        geometry: &impl ScrollGeometry,
        source: &ElementId,
    ) -> ScrollreelResult<f64> {
        let span = geometry.element_span(source, &self.target)?;
        let port = geometry.scrollport_extent(source)?;
        let max_scroll = (geometry.scroll_extent(source)? - port).max(0.0);

        let visible = self.threshold * span.len();
        let raw = match self.edge {
            ScrollEdge::End => span.start - port + visible,
            ScrollEdge::Start => span.end - visible,
        };
        Ok(raw.clamp(0.0, max_scroll))
    }
}

/// Timeline whose current time is derived from the scroll position of `scroll_source`.
///
/// Nothing is cached: every query re-reads geometry and scroll position from the host,
/// so layout changes between queries are always reflected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTimeline {
    pub scroll_source: ElementId,
    pub orientation: Orientation,
    pub start_scroll_offset: ElementOffset,
    pub end_scroll_offset: ElementOffset,
    pub time_range: TimeRange,
    pub fill: FillMode,
}

impl ScrollTimeline {
    pub fn validate(&self) -> ScrollreelResult<()> {
        for offset in [&self.start_scroll_offset, &self.end_scroll_offset] {
            if !(0.0..=1.0).contains(&offset.threshold) {
                return Err(ScrollreelError::validation(format!(
                    "scroll offset threshold {} is outside [0, 1]",
                    offset.threshold
                )));
            }
        }
        if let TimeRange::Finite(ms) = self.time_range {
            if !ms.is_finite() || ms < 0.0 {
                return Err(ScrollreelError::validation(
                    "ScrollTimeline time_range must be finite and >= 0",
                ));
            }
        }
        Ok(())
    }

    /// `(start, end)` scroll offsets for the current layout.
    pub fn resolved_offsets(&self, geometry: &impl ScrollGeometry) -> ScrollreelResult<(f64, f64)> {
        let start = self
            .start_scroll_offset
            .resolve(geometry, &self.scroll_source)?;
        let end = self
            .end_scroll_offset
            .resolve(geometry, &self.scroll_source)?;
        Ok((start, end))
    }

    /// Progress in `[0, 1]`, or `None` when outside the offsets and not filled.
    pub fn progress(&self, geometry: &impl ScrollGeometry) -> ScrollreelResult<Option<f64>> {
        let (start, end) = self.resolved_offsets(geometry)?;
        let scroll = geometry.scroll_offset(&self.scroll_source)?;

        if scroll < start {
            return Ok(self.fill.fills_backwards().then_some(0.0));
        }
        if scroll >= end {
            return Ok(self.fill.fills_forwards().then_some(1.0));
        }
        Ok(Some((scroll - start) / (end - start)))
    }

    /// Current time in milliseconds: progress scaled by the batch time range.
    pub fn current_time(&self, geometry: &impl ScrollGeometry) -> ScrollreelResult<Option<f64>> {
        let Some(range) = self.time_range.as_finite() else {
            return Err(ScrollreelError::animation(
                "scroll timeline with an unbounded time range cannot be sampled",
            ));
        };
        Ok(self.progress(geometry)?.map(|p| p * range))
    }
}

/// Timeline spanning the scene's pass through the scrollport: it starts as the scene
/// enters at the end edge and completes once the scene has left past the start edge.
pub fn make_scroll_timeline(
    scroll_source: ElementId,
    scene: &ElementId,
    time_range: TimeRange,
) -> ScrollTimeline {
    ScrollTimeline {
        scroll_source,
        orientation: Orientation::Block,
        start_scroll_offset: ElementOffset {
            target: scene.clone(),
            edge: ScrollEdge::End,
            threshold: 0.0,
        },
        end_scroll_offset: ElementOffset {
            target: scene.clone(),
            edge: ScrollEdge::Start,
            threshold: 0.0,
        },
        time_range,
        fill: FillMode::Both,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scroll.rs"]
mod tests;
