//! Collaborator seams. The coordinator never holds UI objects; hosts implement these traits and
//! pass themselves into every coordinator entry point.

use crate::{IndicatorGeometry, TabFrame};

/// Read-only access to the current layout.
pub trait GeometryProvider {
    /// Raw frame of tab `index` in strip content coordinates, or `None` if not laid out.
    fn frame_of(&self, index: usize) -> Option<TabFrame>;

    /// Extent of one page along the primary axis. Zero or negative means "not laid out yet".
    fn page_extent(&self) -> f32;
}

pub trait PageScroller {
    fn jump_to(&mut self, index: usize, animated: bool);
}

pub trait TabStrip {
    fn viewport_extent(&self) -> f32;

    fn content_extent(&self) -> f32;

    /// Scrolls the strip to an already clamped offset.
    fn scroll_to(&mut self, offset: f32, animated: bool);
}

pub trait Indicator {
    /// With `animated`, the indicator transitions from whatever geometry it currently shows.
    fn set_geometry(&mut self, geometry: IndicatorGeometry, animated: bool);
}

/// Everything the coordinator talks to, as one bound.
pub trait Host: GeometryProvider + PageScroller + TabStrip + Indicator {}
impl<T: GeometryProvider + PageScroller + TabStrip + Indicator> Host for T {}
