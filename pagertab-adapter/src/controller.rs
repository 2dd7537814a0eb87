use alloc::vec::Vec;

use pagertab::{
    Coordinator, IndicatorGeometry, Page, PagerEvent, PagerOptions, SelectionState, TabStrip,
};

use crate::{ScrollerEvent, SimHost};

/// What a host would render after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    pub page_offset: f32,
    pub strip_offset: f32,
    pub indicator: IndicatorGeometry,
    pub selection: SelectionState,
}

/// A framework-neutral controller that wraps a [`pagertab::Coordinator`] and a [`SimHost`].
///
/// Adapters drive it by calling:
/// - `tap` / `begin_drag` / `drag_to` / `end_drag` when input arrives
/// - `resize` when the page extent or the strip viewport changes
/// - `tick(now_ms)` each frame, which advances the scroller, strip and indicator animations and
///   feeds the scroller's reports back into the coordinator
#[derive(Clone, Debug)]
pub struct Controller<C> {
    coordinator: Coordinator<C>,
    host: SimHost,
    scratch: Vec<ScrollerEvent>,
}

impl<C> Controller<C> {
    pub fn new(options: PagerOptions, host: SimHost) -> Self {
        Self::from_parts(Coordinator::new(options), host)
    }

    pub fn from_parts(coordinator: Coordinator<C>, host: SimHost) -> Self {
        Self {
            coordinator,
            host,
            scratch: Vec::new(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<C> {
        &self.coordinator
    }

    pub fn host(&self) -> &SimHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SimHost {
        &mut self.host
    }

    pub fn into_parts(self) -> (Coordinator<C>, SimHost) {
        (self.coordinator, self.host)
    }

    pub fn selection(&self) -> SelectionState {
        self.coordinator.selection_state()
    }

    pub fn is_animating(&self) -> bool {
        self.host.is_animating()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            page_offset: self.host.pages.offset(),
            strip_offset: self.host.strip.offset(),
            indicator: self.host.indicator.geometry(),
            selection: self.coordinator.selection_state(),
        }
    }

    /// Relabels the strip from `pages` and hands them to the coordinator.
    pub fn set_pages(&mut self, pages: Vec<Page<C>>, now_ms: u64) {
        self.host.set_now(now_ms);
        self.host.layout.set_labels(pages.iter().map(|p| p.label.as_str()));
        self.host.pages.set_page_count(pages.len());
        self.coordinator.set_pages(&mut self.host, pages);
    }

    pub fn restore(&mut self, index: usize, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        self.coordinator.restore_selection(&mut self.host, index)
    }

    pub fn tap(&mut self, index: usize, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        self.coordinator.on_tab_tapped(&mut self.host, index)
    }

    /// A finger landed on the pages. Any scroller animation stops where it is.
    pub fn begin_drag(&mut self, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        let offset = self.host.pages.offset();
        self.host.pages.drag_to(offset);
        self.coordinator.on_drag_began(&mut self.host)
    }

    pub fn drag_to(&mut self, offset: f32, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        self.host.pages.drag_to(offset);
        self.coordinator.on_scroll_offset_changed(&mut self.host, offset)
    }

    /// Lifts the finger. The scroller animates to the nearest page and settles on a later tick,
    /// or settles right away if it already rests on a page.
    pub fn end_drag(&mut self, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        match self.host.pages.release() {
            Some(offset) => self.coordinator.on_scroll_settled(&mut self.host, offset),
            None => false,
        }
    }

    /// Applies new extents and re-snaps everything without animation.
    pub fn resize(&mut self, page_extent: f32, strip_viewport: f32, now_ms: u64) -> bool {
        self.host.set_now(now_ms);
        self.host.pages.set_page_extent(page_extent);
        self.host.layout.set_viewport_extent(strip_viewport);
        self.coordinator.on_layout_changed(&mut self.host)
    }

    /// Advances every animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> FrameSnapshot {
        self.host.set_now(now_ms);
        self.scratch.clear();
        self.host.pages.tick(now_ms, &mut self.scratch);
        for report in self.scratch.drain(..) {
            let event = match report {
                ScrollerEvent::Offset(offset) => PagerEvent::ScrollOffsetChanged(offset),
                ScrollerEvent::JumpCompleted(index) => PagerEvent::JumpCompleted(index),
                ScrollerEvent::Settled(offset) => PagerEvent::ScrollSettled(offset),
            };
            self.coordinator.enqueue(event);
        }
        self.coordinator.process(&mut self.host);

        self.host.strip.tick(now_ms);
        self.host.indicator.tick(now_ms);
        self.snapshot()
    }

    /// Ticks every `step_ms` from `now_ms` until nothing animates. Returns the final clock.
    pub fn run_until_idle(&mut self, mut now_ms: u64, step_ms: u64) -> u64 {
        let step_ms = step_ms.max(1);
        while self.is_animating() {
            now_ms = now_ms.saturating_add(step_ms);
            self.tick(now_ms);
        }
        now_ms
    }

    /// Largest offset the strip can scroll to.
    pub fn max_strip_offset(&self) -> f32 {
        (self.host.content_extent() - self.host.viewport_extent()).max(0.0)
    }
}
