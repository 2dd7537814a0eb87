//! A headless synchronization engine for a tab strip, a page scroller and a selection indicator.
//!
//! For adapter-level utilities (indicator tweens, a simulated host), see the `pagertab-adapter`
//! crate.
//!
//! The engine reconciles three input sources into one selection state:
//! - explicit tab taps (animated, programmatic page transitions)
//! - continuous drags through the pages (indicator interpolated from the scroll offset)
//! - layout changes (everything re-snapped without animation)
//!
//! It is UI-agnostic. A UI layer is expected to provide, through the [`Host`] traits:
//! - the current raw frame of each tab and the page extent
//! - a page scroller that can jump to an index
//! - a tab strip that can scroll to an offset
//! - an indicator that accepts a target geometry
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod arena;
mod coordinator;
mod events;
pub mod geometry;
mod host;
mod options;
mod page;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use arena::Handle;
pub use coordinator::Coordinator;
pub use events::{EventQueue, PagerEvent};
pub use host::{GeometryProvider, Host, Indicator, PageScroller, TabStrip};
pub use options::{OnChangeCallback, PagerOptions};
pub use page::{Page, TabEntry};
pub use state::SelectionState;
pub use types::{
    DragBaseline, IndicatorGeometry, Mode, PageProgress, ProgressPolicy, TabFrame, TabGeometry,
};
