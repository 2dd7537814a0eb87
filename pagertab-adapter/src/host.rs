use pagertab::{GeometryProvider, Indicator, IndicatorGeometry, PageScroller, TabFrame, TabStrip};

use crate::{AnimatedIndicator, SimPageScroller, SimTabStrip, StackLayout};

/// A complete in-memory host: stack layout, paging scroller, scrolling strip and indicator.
///
/// Useful for driving a [`pagertab::Coordinator`] without a UI, in tests or to prototype motion.
#[derive(Clone, Debug)]
pub struct SimHost {
    pub layout: StackLayout,
    pub pages: SimPageScroller,
    pub strip: SimTabStrip,
    pub indicator: AnimatedIndicator,
}

impl SimHost {
    pub fn new(layout: StackLayout, page_extent: f32) -> Self {
        Self {
            layout,
            pages: SimPageScroller::new(page_extent),
            strip: SimTabStrip::default(),
            indicator: AnimatedIndicator::default(),
        }
    }

    pub fn with_strip(mut self, strip: SimTabStrip) -> Self {
        self.strip = strip;
        self
    }

    pub fn with_indicator(mut self, indicator: AnimatedIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn with_pages(mut self, pages: SimPageScroller) -> Self {
        self.pages = pages;
        self
    }

    /// Moves every animated part's clock to `now_ms` without advancing them.
    pub fn set_now(&mut self, now_ms: u64) {
        self.pages.set_now(now_ms);
        self.strip.set_now(now_ms);
        self.indicator.set_now(now_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.pages.is_animating() || self.strip.is_animating() || self.indicator.is_animating()
    }
}

impl GeometryProvider for SimHost {
    fn frame_of(&self, index: usize) -> Option<TabFrame> {
        self.layout.frame_of(index)
    }

    fn page_extent(&self) -> f32 {
        self.pages.page_extent()
    }
}

impl PageScroller for SimHost {
    fn jump_to(&mut self, index: usize, animated: bool) {
        self.pages.jump_to(index, animated);
    }
}

impl TabStrip for SimHost {
    fn viewport_extent(&self) -> f32 {
        self.layout.viewport_extent()
    }

    fn content_extent(&self) -> f32 {
        self.layout.content_extent()
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.strip.scroll_to(offset, animated);
    }
}

impl Indicator for SimHost {
    fn set_geometry(&mut self, geometry: IndicatorGeometry, animated: bool) {
        self.indicator.set_geometry(geometry, animated);
    }
}
