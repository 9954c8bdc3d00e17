//! Storage behind the `u64` value handles handed to C.
//!
//! `tv_value_create_*` moves a [`TaggedValue`](tagval_core::TaggedValue)
//! in here and gives the caller back a handle; `tv_value_destroy` moves it
//! out again and releases it. A C caller that keeps using a destroyed
//! handle gets `InvalidHandle`, even after a newer value has taken over
//! the same storage slot.

/// A handle is the slot in the upper 32 bits and the slot's generation in
/// the lower 32. Handle 0 is the first value ever created.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// Values owned on behalf of C callers, plus a count of how many are live
/// for `tv_value_count`.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live: usize,
}

impl<T> HandleTable<T> {
    /// Empty table, usable as the initializer of the global `static`.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Store a newly created value. Freed slots are reused before the
    /// table grows.
    pub fn insert(&mut self, value: T) -> u64 {
        self.live += 1;
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            return encode(slot_idx, slot.generation);
        }
        let slot_idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            data: Some(value),
        });
        encode(slot_idx, 0)
    }

    /// The value a query or format call should read, or `None` when the
    /// handle was destroyed or never issued.
    pub fn get(&self, handle: u64) -> Option<&T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.data.as_ref()
    }

    /// Hand the value back for release.
    ///
    /// Returns `None` on a double destroy. After 2^32 values have passed
    /// through one slot it is never reused, since its generation would
    /// repeat.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.data.take()?;
        self.live -= 1;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(slot_idx);
        }
        Some(value)
    }

    /// Values created and not yet destroyed.
    pub fn len(&self) -> usize {
        self.live
    }
}
