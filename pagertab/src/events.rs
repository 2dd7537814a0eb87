use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Page;

/// Every input the coordinator reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum PagerEvent<C> {
    SetPages(Vec<Page<C>>),
    TabTapped(usize),
    DragBegan,
    ScrollOffsetChanged(f32),
    ScrollSettled(f32),
    /// An animated page jump came to rest on `index`.
    JumpCompleted(usize),
    LayoutChanged,
    /// Restores a saved selection without animation.
    Restore(usize),
}

impl<C> PagerEvent<C> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetPages(_) => "set_pages",
            Self::TabTapped(_) => "tab_tapped",
            Self::DragBegan => "drag_began",
            Self::ScrollOffsetChanged(_) => "scroll_offset_changed",
            Self::ScrollSettled(_) => "scroll_settled",
            Self::JumpCompleted(_) => "jump_completed",
            Self::LayoutChanged => "layout_changed",
            Self::Restore(_) => "restore",
        }
    }
}

/// FIFO of pending events. Events are never reordered or coalesced.
#[derive(Clone, Debug)]
pub struct EventQueue<C> {
    pending: VecDeque<PagerEvent<C>>,
}

impl<C> EventQueue<C> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: PagerEvent<C>) {
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<PagerEvent<C>> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<C> Default for EventQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
