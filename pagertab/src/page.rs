use alloc::string::String;

use crate::Handle;

/// An opaque content handle plus the label shown on its tab.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<C> {
    pub label: String,
    pub content: C,
}

impl<C> Page<C> {
    pub fn new(label: impl Into<String>, content: C) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }
}

/// The tab built for a page during a rebuild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntry {
    pub label: String,
    /// The page container this tab selects.
    pub page: Handle,
}
