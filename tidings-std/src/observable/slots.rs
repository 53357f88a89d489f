//! Generation-tagged slot table.
//!
//! Each occupied slot is addressed by a [`SlotKey`]: its index plus the
//! generation the slot had when it was filled. Vacating a slot bumps its
//! generation, so a key that outlives its occupant never matches again, even
//! after the index has been reused.

use std::{cmp::Reverse, collections::BinaryHeap};

/// Address of an occupied slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotKey {
    index: usize,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    occupant: Option<T>,
}

/// Slots are iterated in index order; the lowest vacant index is filled first.
pub(crate) struct SlotTable<T> {
    slots: Vec<Slot<T>>,
    vacant: BinaryHeap<Reverse<usize>>,
    len: usize,
}

impl<T> SlotTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: BinaryHeap::new(),
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, occupant: T) -> SlotKey {
        self.len += 1;
        if let Some(Reverse(index)) = self.vacant.pop() {
            let slot = &mut self.slots[index];
            slot.occupant = Some(occupant);
            return SlotKey {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            occupant: Some(occupant),
        });
        SlotKey {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Vacate the slot `key` points at. Stale keys are ignored.
    pub(crate) fn remove(&mut self, key: SlotKey) -> Option<T> {
        let slot = self.slots.get_mut(key.index)?;
        if slot.generation != key.generation {
            return None;
        }
        let occupant = slot.occupant.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(Reverse(key.index));
        self.len -= 1;
        Some(occupant)
    }

    pub(crate) fn contains(&self, key: SlotKey) -> bool {
        self.slots
            .get(key.index)
            .is_some_and(|slot| slot.generation == key.generation && slot.occupant.is_some())
    }

    /// Vacate every slot.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.occupant.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.vacant.push(Reverse(index));
            }
        }
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|slot| slot.occupant.as_ref())
    }
}
