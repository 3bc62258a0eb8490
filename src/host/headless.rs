use std::collections::BTreeMap;

use crate::{
    animation::keyframes::StyleMap,
    foundation::core::{ElementId, Span},
    foundation::error::{ScrollreelError, ScrollreelResult},
    host::{Host, ScrollGeometry},
    player::{animation::ScrollAnimation, effect::KeyframeEffect},
    style::guard::normalize_property_name,
    timeline::scroll::ScrollTimeline,
};

/// Block-axis layout of a document with one scrolling element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolling_element: Option<ElementId>,
    /// Visible height of the scrollport.
    pub scrollport_extent: f64,
    /// Height of the scrollable content.
    pub scroll_extent: f64,
    /// Attached elements and their spans in scroll-content coordinates.
    #[serde(default)]
    pub elements: BTreeMap<ElementId, Span>,
}

impl DocumentGeometry {
    pub fn validate(&self) -> ScrollreelResult<()> {
        if !self.scrollport_extent.is_finite() || self.scrollport_extent < 0.0 {
            return Err(ScrollreelError::validation(
                "scrollport_extent must be finite and >= 0",
            ));
        }
        if !self.scroll_extent.is_finite() || self.scroll_extent < 0.0 {
            return Err(ScrollreelError::validation(
                "scroll_extent must be finite and >= 0",
            ));
        }
        for (element, span) in &self.elements {
            Span::new(span.start, span.end).map_err(|err| {
                ScrollreelError::validation(format!("element '{element}': {err}"))
            })?;
        }
        Ok(())
    }

    pub fn max_scroll(&self) -> f64 {
        (self.scroll_extent - self.scrollport_extent).max(0.0)
    }
}

/// In-memory host: an element registry, one scroll position, and an inline style store.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    geometry: DocumentGeometry,
    scroll_offset: f64,
    styles: BTreeMap<ElementId, StyleMap>,
}

impl HeadlessHost {
    pub fn new(geometry: DocumentGeometry) -> ScrollreelResult<Self> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            scroll_offset: 0.0,
            styles: BTreeMap::new(),
        })
    }

    pub fn geometry(&self) -> &DocumentGeometry {
        &self.geometry
    }

    pub fn current_scroll(&self) -> f64 {
        self.scroll_offset
    }

    /// Scroll the document, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.geometry.max_scroll());
    }

    pub fn attach(&mut self, element: ElementId, span: Span) {
        self.geometry.elements.insert(element, span);
    }

    pub fn detach(&mut self, element: &ElementId) {
        self.geometry.elements.remove(element);
        self.styles.remove(element);
    }

    pub fn styles_of(&self, element: &ElementId) -> Option<&StyleMap> {
        self.styles.get(element)
    }

    fn check_source(&self, source: &ElementId) -> ScrollreelResult<()> {
        match &self.geometry.scrolling_element {
            Some(el) if el == source => Ok(()),
            _ => Err(ScrollreelError::resolution(format!(
                "'{source}' is not a scroll container of this document"
            ))),
        }
    }
}

impl ScrollGeometry for HeadlessHost {
    fn scroll_offset(&self, source: &ElementId) -> ScrollreelResult<f64> {
        self.check_source(source)?;
        Ok(self.scroll_offset)
    }

    fn scrollport_extent(&self, source: &ElementId) -> ScrollreelResult<f64> {
        self.check_source(source)?;
        Ok(self.geometry.scrollport_extent)
    }

    fn scroll_extent(&self, source: &ElementId) -> ScrollreelResult<f64> {
        self.check_source(source)?;
        Ok(self.geometry.scroll_extent)
    }

    fn element_span(&self, source: &ElementId, target: &ElementId) -> ScrollreelResult<Span> {
        self.check_source(source)?;
        self.geometry
            .elements
            .get(target)
            .copied()
            .ok_or_else(|| ScrollreelError::resolution(format!("element '{target}' is detached")))
    }
}

impl Host for HeadlessHost {
    type Player = ScrollAnimation;

    fn scrolling_element(&self) -> ScrollreelResult<ElementId> {
        self.geometry
            .scrolling_element
            .clone()
            .ok_or_else(|| ScrollreelError::resolution("document has no scrolling element"))
    }

    fn is_attached(&self, element: &ElementId) -> bool {
        self.geometry.elements.contains_key(element)
    }

    fn apply_styles(&mut self, target: &ElementId, styles: &StyleMap) -> ScrollreelResult<()> {
        if !self.is_attached(target) {
            return Err(ScrollreelError::resolution(format!(
                "cannot style detached element '{target}'"
            )));
        }
        let inline = self.styles.entry(target.clone()).or_default();
        for (name, value) in styles {
            inline.insert(normalize_property_name(name), value.clone());
        }
        Ok(())
    }

    fn create_player(
        &mut self,
        effect: KeyframeEffect,
        timeline: ScrollTimeline,
    ) -> ScrollreelResult<Self::Player> {
        self.check_source(&timeline.scroll_source)?;
        Ok(ScrollAnimation::new(effect, timeline))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
