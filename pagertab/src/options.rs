use alloc::sync::Arc;

use crate::{ProgressPolicy, SelectionState};

/// A callback fired when a transition settles on a different page.
pub type OnChangeCallback = Arc<dyn Fn(SelectionState) + Send + Sync>;

/// Configuration for [`crate::Coordinator`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct PagerOptions {
    /// Space between adjacent tabs in the strip.
    pub spacing: f32,
    /// Space before the first tab and after the last one.
    pub outer_margin: f32,

    pub progress_policy: ProgressPolicy,

    /// While dragging, keep the interpolated indicator centered in the strip (never animated).
    pub track_strip_while_dragging: bool,

    /// Whether centering the strip after a user drag settles is animated.
    ///
    /// Rebuilds and layout changes always apply without animation.
    pub animate_settle_strip_scroll: bool,

    pub on_change: Option<OnChangeCallback>,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            outer_margin: 0.0,
            progress_policy: ProgressPolicy::Absolute,
            track_strip_while_dragging: true,
            animate_settle_strip_scroll: true,
            on_change: None,
        }
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_outer_margin(mut self, outer_margin: f32) -> Self {
        self.outer_margin = outer_margin;
        self
    }

    pub fn with_progress_policy(mut self, progress_policy: ProgressPolicy) -> Self {
        self.progress_policy = progress_policy;
        self
    }

    pub fn with_track_strip_while_dragging(mut self, track: bool) -> Self {
        self.track_strip_while_dragging = track;
        self
    }

    pub fn with_animate_settle_strip_scroll(mut self, animate: bool) -> Self {
        self.animate_settle_strip_scroll = animate;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(SelectionState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("spacing", &self.spacing)
            .field("outer_margin", &self.outer_margin)
            .field("progress_policy", &self.progress_policy)
            .field(
                "track_strip_while_dragging",
                &self.track_strip_while_dragging,
            )
            .field(
                "animate_settle_strip_scroll",
                &self.animate_settle_strip_scroll,
            )
            .finish_non_exhaustive()
    }
}
