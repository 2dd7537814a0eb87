use alloc::vec::Vec;

/// Handle into an [`Arena`]. Handles from before a rebuild never resolve afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Handle {
    generation: u32,
    index: usize,
}

impl Handle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Slots indexed by page index, replaced wholesale on every rebuild.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    generation: u32,
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            generation: 0,
            slots: Vec::new(),
        }
    }

    pub(crate) fn rebuild(&mut self, slots: impl IntoIterator<Item = T>) {
        self.generation = self.generation.wrapping_add(1);
        self.slots.clear();
        self.slots.extend(slots);
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn handle(&self, index: usize) -> Option<Handle> {
        (index < self.slots.len()).then_some(Handle {
            generation: self.generation,
            index,
        })
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub(crate) fn resolve(&self, handle: Handle) -> Option<&T> {
        if handle.generation != self.generation {
            return None;
        }
        self.slots.get(handle.index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }
}
