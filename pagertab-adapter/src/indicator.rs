use pagertab::{Indicator, IndicatorGeometry};

use crate::{Animation, GeometryTween};

/// An indicator that animates between geometries on a frame clock.
///
/// A new animated target always starts from the geometry currently on screen, so interrupting a
/// transition never snaps back to the old target first.
#[derive(Clone, Debug)]
pub struct AnimatedIndicator {
    current: IndicatorGeometry,
    tween: Option<GeometryTween>,
    animation: Animation,
    now_ms: u64,
}

impl Default for AnimatedIndicator {
    fn default() -> Self {
        Self::new(Animation::INDICATOR)
    }
}

impl AnimatedIndicator {
    pub fn new(animation: Animation) -> Self {
        Self {
            current: IndicatorGeometry::ZERO,
            tween: None,
            animation,
            now_ms: 0,
        }
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = animation;
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Geometry on screen at the current clock.
    pub fn geometry(&self) -> IndicatorGeometry {
        match &self.tween {
            Some(tween) => tween.sample(self.now_ms),
            None => self.current,
        }
    }

    /// Where the indicator is heading (the on-screen geometry when idle).
    pub fn target(&self) -> IndicatorGeometry {
        match &self.tween {
            Some(tween) => tween.to,
            None => self.current,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tick(&mut self, now_ms: u64) -> IndicatorGeometry {
        self.now_ms = now_ms;
        if let Some(tween) = self.tween {
            if tween.is_done(now_ms) {
                self.current = tween.to;
                self.tween = None;
            } else {
                self.current = tween.sample(now_ms);
            }
        }
        self.current
    }
}

impl Indicator for AnimatedIndicator {
    fn set_geometry(&mut self, geometry: IndicatorGeometry, animated: bool) {
        if !animated {
            self.tween = None;
            self.current = geometry;
            return;
        }
        let duration = self.animation.duration_ms;
        if let Some(tween) = self.tween.as_mut() {
            tween.retarget(self.now_ms, geometry, duration);
            return;
        }
        self.tween = Some(GeometryTween::new(
            self.current,
            geometry,
            self.now_ms,
            duration,
            self.animation.easing,
        ));
    }
}
