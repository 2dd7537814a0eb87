use alloc::vec::Vec;

use crate::{Animation, Tween};

/// What a simulated page scroller reported while advancing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollerEvent {
    Offset(f32),
    JumpCompleted(usize),
    Settled(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Jump { tween: Tween, target: usize },
    Settle { tween: Tween },
}

impl Motion {
    fn tween(&self) -> &Tween {
        match self {
            Self::Jump { tween, .. } | Self::Settle { tween } => tween,
        }
    }
}

/// A paging scroll container driven by a frame clock.
///
/// Animated jumps report offsets on every tick and a completion at the end. Releasing a drag
/// animates to the nearest page and reports a settle there. Non-animated jumps apply at once and
/// report nothing, like most native pagers.
#[derive(Clone, Debug)]
pub struct SimPageScroller {
    offset: f32,
    page_extent: f32,
    page_count: usize,
    motion: Option<Motion>,
    jump: Animation,
    settle: Animation,
    now_ms: u64,
}

impl SimPageScroller {
    pub fn new(page_extent: f32) -> Self {
        Self {
            offset: 0.0,
            page_extent,
            page_count: 0,
            motion: None,
            jump: Animation::SCROLL,
            settle: Animation::SETTLE,
            now_ms: 0,
        }
    }

    pub fn with_jump_animation(mut self, animation: Animation) -> Self {
        self.jump = animation;
        self
    }

    pub fn with_settle_animation(mut self, animation: Animation) -> Self {
        self.settle = animation;
        self
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn page_extent(&self) -> f32 {
        self.page_extent
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// The page an in-flight jump is heading to.
    pub fn jump_target(&self) -> Option<usize> {
        match self.motion {
            Some(Motion::Jump { target, .. }) => Some(target),
            _ => None,
        }
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.motion = None;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Keeps the current page in place across a resize.
    pub fn set_page_extent(&mut self, page_extent: f32) {
        if self.page_extent > 0.0 && page_extent > 0.0 {
            self.offset = self.offset / self.page_extent * page_extent;
        } else {
            self.offset = 0.0;
        }
        self.page_extent = page_extent;
        self.motion = None;
    }

    /// Follows the finger; any running animation is dropped.
    pub fn drag_to(&mut self, offset: f32) {
        self.motion = None;
        self.offset = offset;
    }

    /// Moves to page `index`. An animated jump always reports a completion, even when the
    /// scroller already rests on that page.
    pub fn jump_to(&mut self, index: usize, animated: bool) {
        if self.page_count == 0 {
            return;
        }
        let index = index.min(self.page_count - 1);
        let to = self.offset_of(index);
        if !animated {
            self.motion = None;
            self.offset = to;
            return;
        }
        let tween = match self.motion {
            Some(motion) if self.offset != to => {
                let mut tween = *motion.tween();
                tween.retarget(self.now_ms, to, self.jump.duration_ms);
                tween
            }
            _ => {
                let duration = if self.offset == to {
                    0
                } else {
                    self.jump.duration_ms
                };
                Tween::new(self.offset, to, self.now_ms, duration, self.jump.easing)
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pagertab_adapter", index, from = self.offset, to, "page jump");
        self.motion = Some(Motion::Jump {
            tween,
            target: index,
        });
    }

    /// Ends a drag. Returns the settled offset when no settle animation is needed.
    ///
    /// A jump started while the finger was down keeps running; its completion settles the pager.
    pub fn release(&mut self) -> Option<f32> {
        if matches!(self.motion, Some(Motion::Jump { .. })) {
            return None;
        }
        let to = self.offset_of(self.nearest_page());
        if self.offset == to {
            self.motion = None;
            return Some(to);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pagertab_adapter", from = self.offset, to, "settle after release");
        self.motion = Some(Motion::Settle {
            tween: Tween::new(
                self.offset,
                to,
                self.now_ms,
                self.settle.duration_ms,
                self.settle.easing,
            ),
        });
        None
    }

    /// Advances the running animation and appends what a native pager would report.
    pub fn tick(&mut self, now_ms: u64, out: &mut Vec<ScrollerEvent>) {
        self.now_ms = now_ms;
        let Some(motion) = self.motion else {
            return;
        };
        let tween = motion.tween();
        let done = tween.is_done(now_ms);
        self.offset = if done { tween.to } else { tween.sample(now_ms) };
        out.push(ScrollerEvent::Offset(self.offset));
        if !done {
            return;
        }
        self.motion = None;
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "pagertab_adapter", offset = self.offset, "scroller at rest");
        match motion {
            Motion::Jump { target, .. } => out.push(ScrollerEvent::JumpCompleted(target)),
            Motion::Settle { .. } => out.push(ScrollerEvent::Settled(self.offset)),
        }
    }

    fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.page_extent.max(0.0)
    }

    fn max_offset(&self) -> f32 {
        self.offset_of(self.page_count.saturating_sub(1))
    }

    fn nearest_page(&self) -> usize {
        if self.page_count == 0 || self.page_extent <= 0.0 {
            return 0;
        }
        let pf = (self.offset / self.page_extent).max(0.0);
        ((pf + 0.5) as usize).min(self.page_count - 1)
    }
}
