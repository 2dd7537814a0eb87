use pagertab::IndicatorGeometry;

/// A small tween helper for adapter-driven scalar animations (page and strip offsets).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let t = self.easing.sample(progress_at(self.start_ms, self.duration_ms, now_ms));
        self.from + (self.to - self.from) * t
    }

    /// Restarts from the current sample towards `new_to`, so an interruption never jumps.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// Tween over both indicator dimensions with one clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryTween {
    pub from: IndicatorGeometry,
    pub to: IndicatorGeometry,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl GeometryTween {
    pub fn new(
        from: IndicatorGeometry,
        to: IndicatorGeometry,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> IndicatorGeometry {
        let t = self.easing.sample(progress_at(self.start_ms, self.duration_ms, now_ms));
        self.from.lerp(self.to, t)
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: IndicatorGeometry, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

fn progress_at(start_ms: u64, duration_ms: u64, now_ms: u64) -> f32 {
    let elapsed = now_ms.saturating_sub(start_ms);
    (elapsed as f32 / duration_ms as f32).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Monotonic on `[0, 1]`, with `sample(0) == 0` and `sample(1) == 1`.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Duration and curve for one kind of animated transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Animation {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// 220 ms ease-in-out, the indicator's default.
    pub const INDICATOR: Self = Self::new(220, Easing::EaseInOutCubic);

    /// Page jumps and strip scrolls.
    pub const SCROLL: Self = Self::new(300, Easing::EaseInOutCubic);

    /// Release animation after a drag.
    pub const SETTLE: Self = Self::new(180, Easing::SmoothStep);
}

impl Default for Animation {
    fn default() -> Self {
        Self::INDICATOR
    }
}
