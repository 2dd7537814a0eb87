use alloc::vec::Vec;

use crate::arena::Arena;
use crate::geometry::{
    centered_strip_offset, drag_relative_progress, interpolate, is_positive, page_progress,
    settled_page, tab_region,
};
use crate::state::Phase;
use crate::{
    DragBaseline, EventQueue, Handle, Host, IndicatorGeometry, Mode, Page, PageProgress,
    PagerEvent, PagerOptions, ProgressPolicy, SelectionState, TabEntry, TabGeometry,
};

/// The synchronization engine between a tab strip, a page scroller and a selection indicator.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; every entry point borrows a [`Host`].
/// - All inputs go through one ordered [`EventQueue`] and a single dispatch path, so
///   `SelectionState` has exactly one writer.
/// - Layout is never cached: tab frames and extents are re-read from the host on every update.
///
/// For tween-driven indicators and a simulated host, see the `pagertab-adapter` crate.
#[derive(Clone, Debug)]
pub struct Coordinator<C> {
    options: PagerOptions,
    pages: Arena<Page<C>>,
    tabs: Arena<TabEntry>,
    selected_index: usize,
    phase: Phase,
    /// Last page scroller offset reported by the host.
    last_offset: f32,
    layout_pending: bool,
    queue: EventQueue<C>,
}

impl<C> Default for Coordinator<C> {
    fn default() -> Self {
        Self::new(PagerOptions::default())
    }
}

impl<C> Coordinator<C> {
    pub fn new(options: PagerOptions) -> Self {
        pdebug!(
            spacing = options.spacing,
            outer_margin = options.outer_margin,
            policy = ?options.progress_policy,
            "Coordinator::new"
        );
        Self {
            options,
            pages: Arena::new(),
            tabs: Arena::new(),
            selected_index: 0,
            phase: Phase::Idle,
            last_offset: 0.0,
            layout_pending: false,
            queue: EventQueue::new(),
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    /// Replaces the options and re-snaps to the settled geometry if nothing is in flight.
    pub fn set_options(&mut self, host: &mut impl Host, options: PagerOptions) {
        self.options = options;
        if self.phase == Phase::Idle && self.page_count() > 0 {
            self.snap(host, self.selected_index, false);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, host: &mut impl Host, f: impl FnOnce(&mut PagerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(host, next);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn mode(&self) -> Mode {
        self.phase.mode()
    }

    pub fn drag_baseline(&self) -> Option<DragBaseline> {
        self.phase.drag_baseline()
    }

    pub fn target_index(&self) -> Option<usize> {
        self.phase.target()
    }

    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// `true` when an update was skipped because layout was not available yet.
    ///
    /// Cleared by the next layout-changed event.
    pub fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState {
            selected_index: self.selected_index,
            mode: self.phase.mode(),
            drag_baseline: self.phase.drag_baseline(),
            target_index: self.phase.target(),
        }
    }

    pub fn page(&self, index: usize) -> Option<&Page<C>> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page<C>> {
        self.pages.iter()
    }

    pub fn tab(&self, index: usize) -> Option<&TabEntry> {
        self.tabs.get(index)
    }

    pub fn tab_label(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.label.as_str())
    }

    pub fn page_handle(&self, index: usize) -> Option<Handle> {
        self.pages.handle(index)
    }

    pub fn tab_handle(&self, index: usize) -> Option<Handle> {
        self.tabs.handle(index)
    }

    /// Resolves a page handle; handles taken before the last rebuild resolve to `None`.
    pub fn resolve_page(&self, handle: Handle) -> Option<&Page<C>> {
        self.pages.resolve(handle)
    }

    pub fn resolve_tab(&self, handle: Handle) -> Option<&TabEntry> {
        self.tabs.resolve(handle)
    }

    /// Number of rebuilds so far.
    pub fn generation(&self) -> u32 {
        self.pages.generation()
    }

    /// Indicator region of tab `index`, using the current frame from the host.
    pub fn tab_geometry(&self, host: &impl Host, index: usize) -> Option<TabGeometry> {
        let count = self.page_count();
        if index >= count {
            return None;
        }
        let frame = host.frame_of(index)?;
        if !frame.leading.is_finite() || !frame.width.is_finite() {
            return None;
        }
        Some(tab_region(
            index,
            count,
            frame,
            self.options.spacing,
            self.options.outer_margin,
        ))
    }

    /// Progress implied by the last offset while dragging; settled progress otherwise.
    pub fn progress(&self, host: &impl Host) -> Option<PageProgress> {
        match self.phase {
            Phase::Idle if self.page_count() > 0 => Some(PageProgress::at(self.selected_index)),
            Phase::Idle => None,
            Phase::Programmatic { target } => Some(PageProgress::at(target)),
            Phase::Dragging(baseline) => self.drag_progress(host, baseline),
        }
    }

    /// The indicator geometry derived from the current state.
    ///
    /// Returns [`IndicatorGeometry::ZERO`] without pages and `None` while layout is unavailable.
    pub fn indicator_geometry(&self, host: &impl Host) -> Option<IndicatorGeometry> {
        if self.page_count() == 0 {
            return Some(IndicatorGeometry::ZERO);
        }
        let progress = self.progress(host)?;
        self.interpolated(host, progress)
    }

    /// Queues an event without processing it.
    pub fn enqueue(&mut self, event: PagerEvent<C>) {
        self.queue.push(event);
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Drains the queue in arrival order.
    ///
    /// Returns whether the last processed event changed anything.
    pub fn process(&mut self, host: &mut impl Host) -> bool {
        let mut handled = false;
        while let Some(event) = self.queue.pop() {
            handled = self.handle(host, event);
        }
        handled
    }

    /// Queues `event` behind any pending ones and drains the queue.
    ///
    /// Returns whether `event` changed anything.
    pub fn dispatch(&mut self, host: &mut impl Host, event: PagerEvent<C>) -> bool {
        self.queue.push(event);
        self.process(host)
    }

    pub fn set_pages(&mut self, host: &mut impl Host, pages: Vec<Page<C>>) {
        self.dispatch(host, PagerEvent::SetPages(pages));
    }

    /// Returns `false` when the tap was ignored (out of range or already selected).
    pub fn on_tab_tapped(&mut self, host: &mut impl Host, index: usize) -> bool {
        self.dispatch(host, PagerEvent::TabTapped(index))
    }

    pub fn on_drag_began(&mut self, host: &mut impl Host) -> bool {
        self.dispatch(host, PagerEvent::DragBegan)
    }

    pub fn on_scroll_offset_changed(&mut self, host: &mut impl Host, offset: f32) -> bool {
        self.dispatch(host, PagerEvent::ScrollOffsetChanged(offset))
    }

    pub fn on_scroll_settled(&mut self, host: &mut impl Host, final_offset: f32) -> bool {
        self.dispatch(host, PagerEvent::ScrollSettled(final_offset))
    }

    pub fn on_jump_completed(&mut self, host: &mut impl Host, index: usize) -> bool {
        self.dispatch(host, PagerEvent::JumpCompleted(index))
    }

    pub fn on_layout_changed(&mut self, host: &mut impl Host) -> bool {
        self.dispatch(host, PagerEvent::LayoutChanged)
    }

    /// Jumps to a previously saved selection without animation (index is clamped).
    pub fn restore_selection(&mut self, host: &mut impl Host, index: usize) -> bool {
        self.dispatch(host, PagerEvent::Restore(index))
    }

    fn handle(&mut self, host: &mut impl Host, event: PagerEvent<C>) -> bool {
        ptrace!(event = event.name(), mode = ?self.phase.mode(), "handle");
        match event {
            PagerEvent::SetPages(pages) => {
                self.rebuild(host, pages);
                true
            }
            PagerEvent::TabTapped(index) => self.tab_tapped(host, index),
            PagerEvent::DragBegan => self.drag_began(),
            PagerEvent::ScrollOffsetChanged(offset) => self.offset_changed(host, offset),
            PagerEvent::ScrollSettled(offset) => self.scroll_settled(host, offset),
            PagerEvent::JumpCompleted(index) => self.jump_completed(host, index),
            PagerEvent::LayoutChanged => self.layout_changed(host),
            PagerEvent::Restore(index) => self.restore(host, index),
        }
    }

    fn rebuild(&mut self, host: &mut impl Host, pages: Vec<Page<C>>) {
        let prev = self.selected_index;
        self.pages.rebuild(pages);
        let pages = &self.pages;
        self.tabs.rebuild(pages.iter().enumerate().filter_map(|(i, page)| {
            Some(TabEntry {
                label: page.label.clone(),
                page: pages.handle(i)?,
            })
        }));

        let count = self.page_count();
        self.selected_index = if count == 0 { 0 } else { prev.min(count - 1) };
        self.phase = Phase::Idle;
        pdebug!(
            count,
            generation = self.pages.generation(),
            selected = self.selected_index,
            "rebuild"
        );

        if count == 0 {
            self.last_offset = 0.0;
            host.set_geometry(IndicatorGeometry::ZERO, false);
        } else {
            self.resync(host, self.selected_index);
        }
        if prev != self.selected_index {
            self.notify();
        }
    }

    fn tab_tapped(&mut self, host: &mut impl Host, index: usize) -> bool {
        if index >= self.page_count() {
            ptrace!(index, count = self.page_count(), "tap out of range");
            return false;
        }
        match self.phase {
            Phase::Idle if index == self.selected_index => return false,
            Phase::Programmatic { target } if target == index => return false,
            _ => {}
        }

        pdebug!(from = ?self.phase.mode(), index, "tab tapped: programmatic transition");
        self.phase = Phase::Programmatic { target: index };
        host.jump_to(index, true);
        match self.tab_geometry(&*host, index) {
            Some(region) => {
                // The indicator animates from whatever it currently shows, including a
                // drag-interpolated geometry.
                host.set_geometry(region.indicator(), true);
                self.center_strip(host, region.midpoint(), true);
            }
            None => self.defer("tab tapped"),
        }
        true
    }

    fn drag_began(&mut self) -> bool {
        if self.page_count() == 0 {
            return false;
        }
        let index = match self.phase {
            Phase::Dragging(_) => return false,
            Phase::Idle => self.selected_index,
            // The user grabbed the scroller mid-jump; the jump is abandoned.
            Phase::Programmatic { target } => target,
        };
        let baseline = DragBaseline {
            offset: self.last_offset,
            index,
        };
        pdebug!(offset = baseline.offset, index, "drag began");
        self.phase = Phase::Dragging(baseline);
        true
    }

    fn offset_changed(&mut self, host: &mut impl Host, offset: f32) -> bool {
        if !offset.is_finite() {
            pwarn!(offset, "ignoring non-finite scroll offset");
            return false;
        }
        self.last_offset = offset;
        let Phase::Dragging(baseline) = self.phase else {
            // Side effect of a programmatic jump or a resync, not user intent.
            return false;
        };

        let view = &*host;
        let Some(geometry) = self
            .drag_progress(view, baseline)
            .and_then(|p| self.interpolated(view, p))
        else {
            self.defer("drag offset");
            return false;
        };
        host.set_geometry(geometry, false);
        if self.options.track_strip_while_dragging {
            self.center_strip(host, geometry.midpoint(), false);
        }
        true
    }

    fn scroll_settled(&mut self, host: &mut impl Host, offset: f32) -> bool {
        if !offset.is_finite() {
            pwarn!(offset, "ignoring non-finite settle offset");
            return false;
        }
        let count = self.page_count();
        if count == 0 {
            return false;
        }
        self.last_offset = offset;

        let was_dragging = match self.phase {
            Phase::Programmatic { .. } => return false,
            Phase::Dragging(_) => true,
            Phase::Idle => false,
        };
        let index = match settled_page(offset, host.page_extent(), count) {
            Some(index) => index,
            None => {
                self.defer("settle");
                self.selected_index
            }
        };
        if !was_dragging && index == self.selected_index {
            return false;
        }

        pdebug!(index, was_dragging, "scroll settled");
        self.phase = Phase::Idle;
        self.settle(host, index, self.options.animate_settle_strip_scroll);
        true
    }

    fn jump_completed(&mut self, host: &mut impl Host, index: usize) -> bool {
        match self.phase {
            Phase::Programmatic { target } if target == index => {
                pdebug!(index, "programmatic transition completed");
                self.phase = Phase::Idle;
                let extent = host.page_extent();
                if is_positive(extent) {
                    self.last_offset = index as f32 * extent;
                }
                self.settle(host, index, self.options.animate_settle_strip_scroll);
                true
            }
            _ => {
                ptrace!(index, "ignoring stale jump completion");
                false
            }
        }
    }

    fn layout_changed(&mut self, host: &mut impl Host) -> bool {
        self.layout_pending = false;
        if self.page_count() == 0 {
            return false;
        }
        let index = self.phase.target().unwrap_or(self.selected_index);
        pdebug!(index, from = ?self.phase.mode(), "layout changed");
        self.phase = Phase::Idle;
        let prev = self.selected_index;
        self.selected_index = index;
        self.resync(host, index);
        if prev != index {
            self.notify();
        }
        true
    }

    fn restore(&mut self, host: &mut impl Host, index: usize) -> bool {
        let count = self.page_count();
        if count == 0 {
            return false;
        }
        let index = index.min(count - 1);
        self.phase = Phase::Idle;
        let prev = self.selected_index;
        self.selected_index = index;
        self.resync(host, index);
        if prev != index {
            self.notify();
        }
        true
    }

    /// Moves the scroller, indicator and strip to `index` without animation.
    fn resync(&mut self, host: &mut impl Host, index: usize) {
        host.jump_to(index, false);
        let extent = host.page_extent();
        self.last_offset = if is_positive(extent) {
            index as f32 * extent
        } else {
            0.0
        };
        self.snap(host, index, false);
    }

    /// Enters the settled state on `index`: exact indicator geometry and a centered strip.
    fn settle(&mut self, host: &mut impl Host, index: usize, animate_strip: bool) {
        let prev = self.selected_index;
        self.selected_index = index;
        self.snap(host, index, animate_strip);
        if prev != index {
            self.notify();
        }
    }

    fn snap(&mut self, host: &mut impl Host, index: usize, animate_strip: bool) {
        let Some(region) = self.tab_geometry(&*host, index) else {
            self.defer("snap");
            return;
        };
        host.set_geometry(region.indicator(), false);
        self.center_strip(host, region.midpoint(), animate_strip);
    }

    fn center_strip(&mut self, host: &mut impl Host, midpoint: f32, animated: bool) {
        match centered_strip_offset(midpoint, host.viewport_extent(), host.content_extent()) {
            Some(offset) => host.scroll_to(offset, animated),
            None => self.defer("strip centering"),
        }
    }

    fn drag_progress(&self, host: &impl Host, baseline: DragBaseline) -> Option<PageProgress> {
        let extent = host.page_extent();
        let count = self.page_count();
        match self.options.progress_policy {
            ProgressPolicy::Absolute => page_progress(self.last_offset, extent, count),
            ProgressPolicy::DragRelative => {
                drag_relative_progress(self.last_offset, baseline, extent, count)
            }
        }
    }

    fn interpolated(&self, host: &impl Host, progress: PageProgress) -> Option<IndicatorGeometry> {
        let from = self.tab_geometry(host, progress.from_index)?;
        if progress.is_settled() {
            return Some(from.indicator());
        }
        let to = self.tab_geometry(host, progress.to_index)?;
        Some(interpolate(from, to, progress.progress))
    }

    fn defer(&mut self, _what: &'static str) {
        ptrace!(what = _what, "layout not ready, update deferred");
        self.layout_pending = true;
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self.selection_state());
        }
    }
}
