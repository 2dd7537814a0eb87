use crate::{DragBaseline, Mode};

/// A lightweight, serializable snapshot of the coordinator's selection state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    pub selected_index: usize,
    pub mode: Mode,
    pub drag_baseline: Option<DragBaseline>,
    /// Destination of the in-flight programmatic transition, if any.
    pub target_index: Option<usize>,
}

/// Internal phase. Each variant carries only the data valid in that mode, so a drag baseline and
/// a programmatic target can never coexist.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Phase {
    #[default]
    Idle,
    Dragging(DragBaseline),
    Programmatic { target: usize },
}

impl Phase {
    pub(crate) fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Dragging(_) => Mode::Dragging,
            Self::Programmatic { .. } => Mode::ProgrammaticTransition,
        }
    }

    pub(crate) fn drag_baseline(&self) -> Option<DragBaseline> {
        match self {
            Self::Dragging(baseline) => Some(*baseline),
            _ => None,
        }
    }

    pub(crate) fn target(&self) -> Option<usize> {
        match self {
            Self::Programmatic { target } => Some(*target),
            _ => None,
        }
    }
}
