use alloc::sync::Arc;
use alloc::vec::Vec;

use pagertab::TabFrame;

pub type MeasureCallback = Arc<dyn Fn(&str) -> f32 + Send + Sync>;

/// How tabs share the strip when their natural widths don't fill the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// Every tab keeps its measured width.
    #[default]
    Natural,
    /// All tabs get the same width: the widest label, or an equal share of the viewport if that
    /// is larger.
    FillEqually,
}

/// A horizontal stack of tabs: outer margin, tabs separated by `spacing`, outer margin.
///
/// Widths come from a measure callback over the tab labels, so the layout can be rebuilt
/// whenever the page list changes.
#[derive(Clone)]
pub struct StackLayout {
    measure: MeasureCallback,
    widths: Vec<f32>,
    spacing: f32,
    outer_margin: f32,
    viewport_extent: f32,
    distribution: Distribution,
}

impl StackLayout {
    pub fn new(spacing: f32, outer_margin: f32, viewport_extent: f32) -> Self {
        Self {
            measure: Arc::new(|label: &str| label.chars().count() as f32 * 8.0 + 24.0),
            widths: Vec::new(),
            spacing,
            outer_margin,
            viewport_extent,
            distribution: Distribution::Natural,
        }
    }

    pub fn with_measure(mut self, f: impl Fn(&str) -> f32 + Send + Sync + 'static) -> Self {
        self.measure = Arc::new(f);
        self
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Replaces the measured widths with `widths` as given.
    pub fn with_widths(mut self, widths: impl IntoIterator<Item = f32>) -> Self {
        self.widths = widths.into_iter().map(|w| w.max(0.0)).collect();
        self
    }

    pub fn set_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        let measure = &self.measure;
        self.widths = labels.into_iter().map(|l| measure(l).max(0.0)).collect();
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: f32) {
        self.viewport_extent = viewport_extent;
    }

    pub fn tab_count(&self) -> usize {
        self.widths.len()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn outer_margin(&self) -> f32 {
        self.outer_margin
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn frame_of(&self, index: usize) -> Option<TabFrame> {
        if index >= self.widths.len() {
            return None;
        }
        let mut leading = self.outer_margin;
        for i in 0..index {
            leading += self.width_of(i) + self.spacing;
        }
        Some(TabFrame::new(leading, self.width_of(index)))
    }

    pub fn frames(&self) -> Vec<TabFrame> {
        (0..self.widths.len()).filter_map(|i| self.frame_of(i)).collect()
    }

    pub fn content_extent(&self) -> f32 {
        let n = self.widths.len();
        if n == 0 {
            return 0.0;
        }
        let tabs: f32 = (0..n).map(|i| self.width_of(i)).sum();
        tabs + self.spacing * (n - 1) as f32 + 2.0 * self.outer_margin
    }

    fn width_of(&self, index: usize) -> f32 {
        match self.distribution {
            Distribution::Natural => self.widths[index],
            Distribution::FillEqually => self.equal_width(),
        }
    }

    fn equal_width(&self) -> f32 {
        let n = self.widths.len();
        let widest = self.widths.iter().copied().fold(0.0f32, f32::max);
        if n == 0 {
            return widest;
        }
        let free = self.viewport_extent - 2.0 * self.outer_margin - self.spacing * (n - 1) as f32;
        widest.max(free / n as f32)
    }
}

impl core::fmt::Debug for StackLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackLayout")
            .field("widths", &self.widths)
            .field("spacing", &self.spacing)
            .field("outer_margin", &self.outer_margin)
            .field("viewport_extent", &self.viewport_extent)
            .field("distribution", &self.distribution)
            .finish_non_exhaustive()
    }
}
