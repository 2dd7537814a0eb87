use crate::{Animation, Tween};

/// Scroll position of the tab strip, animated on a frame clock.
#[derive(Clone, Debug)]
pub struct SimTabStrip {
    offset: f32,
    tween: Option<Tween>,
    animation: Animation,
    now_ms: u64,
}

impl Default for SimTabStrip {
    fn default() -> Self {
        Self::new(Animation::SCROLL)
    }
}

impl SimTabStrip {
    pub fn new(animation: Animation) -> Self {
        Self {
            offset: 0.0,
            tween: None,
            animation,
            now_ms: 0,
        }
    }

    pub fn offset(&self) -> f32 {
        match &self.tween {
            Some(tween) => tween.sample(self.now_ms),
            None => self.offset,
        }
    }

    /// Final offset of a running scroll, or the current one.
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.offset, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn scroll_to(&mut self, offset: f32, animated: bool) {
        if !animated {
            self.tween = None;
            self.offset = offset;
            return;
        }
        let duration = self.animation.duration_ms;
        if let Some(tween) = self.tween.as_mut() {
            tween.retarget(self.now_ms, offset, duration);
            return;
        }
        self.tween = Some(Tween::new(
            self.offset,
            offset,
            self.now_ms,
            duration,
            self.animation.easing,
        ));
    }

    pub fn tick(&mut self, now_ms: u64) -> f32 {
        self.now_ms = now_ms;
        if let Some(tween) = self.tween {
            if tween.is_done(now_ms) {
                self.offset = tween.to;
                self.tween = None;
            } else {
                self.offset = tween.sample(now_ms);
            }
        }
        self.offset
    }
}
