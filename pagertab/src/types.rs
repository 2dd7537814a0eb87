/// Raw frame of a tab along the primary axis, as reported by the layout system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabFrame {
    pub leading: f32,
    pub width: f32,
}

impl TabFrame {
    pub fn new(leading: f32, width: f32) -> Self {
        Self { leading, width }
    }

    pub fn trailing(&self) -> f32 {
        self.leading + self.width
    }
}

/// A tab's indicator region: the raw frame widened by the edge policy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabGeometry {
    pub index: usize,
    pub leading: f32,
    pub width: f32,
}

impl TabGeometry {
    pub fn trailing(&self) -> f32 {
        self.leading + self.width
    }

    pub fn midpoint(&self) -> f32 {
        self.leading + self.width / 2.0
    }

    pub fn indicator(&self) -> IndicatorGeometry {
        IndicatorGeometry {
            leading: self.leading,
            width: self.width,
        }
    }
}

/// Target geometry for the selection indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorGeometry {
    pub leading: f32,
    pub width: f32,
}

impl IndicatorGeometry {
    /// Hidden indicator (no pages).
    pub const ZERO: Self = Self {
        leading: 0.0,
        width: 0.0,
    };

    pub fn new(leading: f32, width: f32) -> Self {
        Self { leading, width }
    }

    pub fn midpoint(&self) -> f32 {
        self.leading + self.width / 2.0
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            leading: self.leading + (to.leading - self.leading) * t,
            width: self.width + (to.width - self.width) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
    ProgrammaticTransition,
}

/// Page scroller offset and selection captured when a drag begins.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragBaseline {
    pub offset: f32,
    pub index: usize,
}

/// How drag progress is derived from the page scroller offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressPolicy {
    /// Fraction of the absolute offset over the page extent.
    #[default]
    Absolute,
    /// Delta from the offset recorded at drag start, relative to the page selected at that time.
    ///
    /// Diverges from `Absolute` when a drag starts before a previous transition has settled.
    DragRelative,
}

/// Fractional position between two adjacent pages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageProgress {
    pub from_index: usize,
    pub to_index: usize,
    /// In `[0, 1]`. Irrelevant when `from_index == to_index`.
    pub progress: f32,
}

impl PageProgress {
    pub fn at(index: usize) -> Self {
        Self {
            from_index: index,
            to_index: index,
            progress: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.from_index == self.to_index
    }
}
