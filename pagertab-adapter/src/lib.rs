//! Adapter utilities for the `pagertab` crate.
//!
//! The `pagertab` crate is UI-agnostic and focuses on selection state and indicator geometry.
//! This crate provides small, framework-neutral pieces commonly needed around it:
//!
//! - Tweens and easing curves for indicator and scroll animations
//! - An [`AnimatedIndicator`] that always transitions from what it currently shows
//! - A simulated host ([`SimHost`]): stack layout, paging scroller and scrolling strip
//! - A [`Controller`] that drives a coordinator and a simulated host from a frame clock
//!
//! No UI toolkit bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;
mod indicator;
mod layout;
mod scroller;
mod strip;
mod tween;


pub use controller::{Controller, FrameSnapshot};
pub use host::SimHost;
pub use indicator::AnimatedIndicator;
pub use layout::{Distribution, MeasureCallback, StackLayout};
pub use scroller::{ScrollerEvent, SimPageScroller};
pub use strip::SimTabStrip;
pub use tween::{Animation, Easing, GeometryTween, Tween};
